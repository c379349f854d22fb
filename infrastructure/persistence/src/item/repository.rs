use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;
use business::domain::item::value_objects::ItemId;

use super::entity::ItemEntity;

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!("item query failed: {e}");
    RepositoryError::DatabaseError
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(
            "SELECT id, item_name, price, quantity FROM items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(
            "SELECT id, item_name, price, quantity FROM items WHERE id = $1",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, item: &Item) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(
            r#"INSERT INTO items (item_name, price, quantity)
            VALUES ($1, $2, $3)
            RETURNING id, item_name, price, quantity"#,
        )
        .bind(&item.item_name)
        .bind(item.price)
        .bind(item.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, id: ItemId, item: &Item) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE items SET item_name = $2, price = $3, quantity = $4 WHERE id = $1",
        )
        .bind(id.value())
        .bind(&item.item_name)
        .bind(item.price)
        .bind(item.quantity)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
