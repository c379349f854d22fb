use business::domain::item::model::{Item, NewItemProps};
use business::domain::item::repository::ItemRepository;

/// Stores two sample items when the repository is empty.
pub async fn seed_test_data(repository: &dyn ItemRepository) -> anyhow::Result<()> {
    if !repository.get_all().await?.is_empty() {
        tracing::debug!("item store already populated, skipping test data");
        return Ok(());
    }

    for (name, price, quantity) in [("itemA", 10000, 10), ("itemB", 20000, 20)] {
        repository
            .save(&Item::new(NewItemProps {
                item_name: Some(name.to_string()),
                price: Some(price),
                quantity: Some(quantity),
            }))
            .await?;
    }
    tracing::info!("seeded item store with test data");
    Ok(())
}
