use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Item;
use super::value_objects::ItemId;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
    async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError>;
    /// Stores a new item and returns it with the assigned id.
    async fn save(&self, item: &Item) -> Result<Item, RepositoryError>;
    /// Replaces every field of the stored item. `NotFound` when the id is unknown.
    async fn update(&self, id: ItemId, item: &Item) -> Result<(), RepositoryError>;
}
