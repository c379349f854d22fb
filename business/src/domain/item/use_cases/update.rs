use async_trait::async_trait;

use crate::domain::item::binding::ItemForm;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::value_objects::ItemId;

pub struct UpdateItemParams {
    pub id: ItemId,
    pub form: ItemForm,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError>;
}
