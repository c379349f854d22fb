use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::binding::bind_item_form;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::item::validator::validate_item;
use crate::domain::logger::Logger;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger.debug(&format!(
            "Creating item: {}",
            params.form.item_name.as_deref().unwrap_or("")
        ));

        let bound = bind_item_form(&params.form);
        let mut errors = bound.errors;
        errors.extend(validate_item(&bound.item));

        if errors.has_errors() {
            self.logger.info(&format!("validation error : {}", errors));
            return Err(ItemError::Validation(errors));
        }

        let saved = self.repository.save(&bound.item).await?;

        if let Some(id) = saved.id {
            self.logger.info(&format!("Item created with id: {}", id));
        }
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::binding::ItemForm;
    use crate::domain::item::value_objects::ItemId;
    use mockall::mock;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
            async fn get_by_id(&self, id: ItemId) -> Result<Item, RepositoryError>;
            async fn save(&self, item: &Item) -> Result<Item, RepositoryError>;
            async fn update(&self, id: ItemId, item: &Item) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn form(name: &str, price: &str, quantity: &str) -> ItemForm {
        ItemForm {
            item_name: Some(name.to_string()),
            price: Some(price.to_string()),
            quantity: Some(quantity.to_string()),
        }
    }

    #[tokio::test]
    async fn should_save_item_when_submission_is_valid() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_save()
            .withf(|item| {
                item.id.is_none()
                    && item.item_name.as_deref() == Some("Book")
                    && item.price == Some(15000)
                    && item.quantity == Some(10)
            })
            .times(1)
            .returning(|item| Ok(item.clone().with_id(ItemId::new(1))));

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateItemParams {
                form: form("Book", "15000", "10"),
            })
            .await;

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.id, Some(ItemId::new(1)));
        assert_eq!(item.item_name.as_deref(), Some("Book"));
    }

    #[tokio::test]
    async fn should_reject_without_saving_when_fields_invalid() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateItemParams {
                form: form("", "500", "10000"),
            })
            .await;

        match result {
            Err(ItemError::Validation(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.has_field_errors("itemName"));
                assert!(errors.has_field_errors("price"));
                assert!(errors.has_field_errors("quantity"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_reject_when_total_below_minimum() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateItemParams {
                form: form("Cup", "1000", "1"),
            })
            .await;

        match result {
            Err(ItemError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.global_errors().next().unwrap().code, "totalPriceMin");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_report_binding_and_rule_errors_together_when_price_unparseable() {
        let mock_repo = MockItemRepo::new();

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateItemParams {
                form: form("Book", "lots", "10"),
            })
            .await;

        match result {
            Err(ItemError::Validation(errors)) => {
                let codes: Vec<&str> = errors
                    .field_errors("price")
                    .map(|e| e.code.as_str())
                    .collect();
                assert_eq!(codes, vec!["typeMismatch", "range"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = CreateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateItemParams {
                form: form("Book", "15000", "10"),
            })
            .await;

        assert!(matches!(result, Err(ItemError::Repository(_))));
    }
}
