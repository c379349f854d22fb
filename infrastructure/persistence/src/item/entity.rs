use sqlx::FromRow;

use business::domain::item::model::Item;
use business::domain::item::value_objects::ItemId;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: i64,
    pub item_name: Option<String>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(
            ItemId::new(self.id),
            self.item_name,
            self.price,
            self.quantity,
        )
    }
}
