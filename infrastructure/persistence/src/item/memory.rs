use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;
use business::domain::item::value_objects::ItemId;

#[derive(Default)]
struct MemoryState {
    items: BTreeMap<ItemId, Item>,
    last_id: i64,
}

/// Process-local item store. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct ItemRepositoryMemory {
    state: RwLock<MemoryState>,
}

impl ItemRepositoryMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryMemory {
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let state = self.state.read().map_err(|_| RepositoryError::persistence())?;
        Ok(state.items.values().cloned().collect())
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError> {
        let state = self.state.read().map_err(|_| RepositoryError::persistence())?;
        state
            .items
            .get(&id)
            .cloned()
            .ok_or_else(RepositoryError::not_found)
    }

    async fn save(&self, item: &Item) -> Result<Item, RepositoryError> {
        let mut state = self.state.write().map_err(|_| RepositoryError::persistence())?;
        state.last_id += 1;
        let id = ItemId::new(state.last_id);
        let stored = item.clone().with_id(id);
        state.items.insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: ItemId, item: &Item) -> Result<(), RepositoryError> {
        let mut state = self.state.write().map_err(|_| RepositoryError::persistence())?;
        let stored = state
            .items
            .get_mut(&id)
            .ok_or_else(RepositoryError::not_found)?;
        *stored = item.clone().with_id(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::item::model::NewItemProps;

    fn item(name: &str, price: i32, quantity: i32) -> Item {
        Item::new(NewItemProps {
            item_name: Some(name.to_string()),
            price: Some(price),
            quantity: Some(quantity),
        })
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_when_saving() {
        let repository = ItemRepositoryMemory::new();

        let first = repository.save(&item("itemA", 10000, 10)).await.unwrap();
        let second = repository.save(&item("itemB", 20000, 20)).await.unwrap();

        assert_eq!(first.id, Some(ItemId::new(1)));
        assert_eq!(second.id, Some(ItemId::new(2)));
    }

    #[tokio::test]
    async fn should_list_items_in_id_order() {
        let repository = ItemRepositoryMemory::new();
        repository.save(&item("itemA", 10000, 10)).await.unwrap();
        repository.save(&item("itemB", 20000, 20)).await.unwrap();

        let items = repository.get_all().await.unwrap();

        let names: Vec<_> = items.iter().map(|i| i.item_name.as_deref()).collect();
        assert_eq!(names, vec![Some("itemA"), Some("itemB")]);
    }

    #[tokio::test]
    async fn should_return_not_found_when_id_unknown() {
        let repository = ItemRepositoryMemory::new();

        let result = repository.get_by_id(ItemId::new(7)).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn should_overwrite_every_field_when_updating() {
        let repository = ItemRepositoryMemory::new();
        let saved = repository.save(&item("itemA", 10000, 10)).await.unwrap();
        let id = saved.id.unwrap();

        let replacement = Item::new(NewItemProps {
            item_name: Some("renamed".to_string()),
            price: None,
            quantity: Some(3),
        });
        repository.update(id, &replacement).await.unwrap();

        let stored = repository.get_by_id(id).await.unwrap();
        assert_eq!(stored.id, Some(id));
        assert_eq!(stored.item_name.as_deref(), Some("renamed"));
        assert!(stored.price.is_none());
        assert_eq!(stored.quantity, Some(3));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unknown_id() {
        let repository = ItemRepositoryMemory::new();

        let result = repository.update(ItemId::new(1), &item("x", 1, 1)).await;

        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }
}
