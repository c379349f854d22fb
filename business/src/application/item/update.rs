use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::binding::bind_item_form;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;

/// Overwrites a stored item with the submitted fields.
///
/// Unlike creation, the item rules are not checked here. A field that fails to
/// bind rejects the whole submission and leaves the stored item untouched.
pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger.debug(&format!("Updating item: {}", params.id));

        let bound = bind_item_form(&params.form);
        if bound.errors.has_errors() {
            self.logger
                .warn(&format!("binding error on item {} : {}", params.id, bound.errors));
            return Err(ItemError::Validation(bound.errors));
        }

        self.repository
            .update(params.id, &bound.item)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        self.logger.info(&format!("Item updated: {}", params.id));
        Ok(bound.item.with_id(params.id))
    }
}
