use std::sync::Arc;

use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::get_all::GetAllItemsUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::domain::item::messages::MessageSource;
use business::domain::item::repository::ItemRepository;
use logger::TracingLogger;

use crate::api::health::routes::Api as HealthApi;
use crate::api::item::routes::ItemApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub item_api: ItemApi,
}

impl DependencyContainer {
    /// Wires the item use cases around a repository owned for the lifetime of
    /// the process.
    pub fn new(repository: Arc<dyn ItemRepository>, messages: MessageSource) -> Self {
        let logger = Arc::new(TracingLogger);

        let create_use_case = Arc::new(CreateItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllItemsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetItemByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateItemUseCaseImpl { repository, logger });

        let item_api = ItemApi::new(
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            Arc::new(messages),
        );

        Self {
            health_api: HealthApi::new(),
            item_api,
        }
    }
}
