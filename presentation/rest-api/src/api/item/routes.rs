use std::sync::Arc;

use poem_openapi::{
    ApiResponse, OpenApi, Union,
    param::{Path, Query},
    payload::{Form, Json},
};

use business::domain::item::binding::ItemForm;
use business::domain::item::errors::ItemError;
use business::domain::item::messages::MessageSource;
use business::domain::item::model::Item;
use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::get_all::GetAllItemsUseCase;
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use business::domain::item::value_objects::ItemId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{
    ADD_FORM_VIEW, EDIT_FORM_VIEW, ItemDetailView, ItemFormRequest, ItemFormValues, ItemFormView,
    ItemView,
};
use crate::api::tags::ApiTags;

pub const ITEMS_PATH: &str = "/items";

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    messages: Arc<MessageSource>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        messages: Arc<MessageSource>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            messages,
        }
    }
}

fn parse_item_id(raw: &str) -> Result<ItemId, Json<ErrorResponse>> {
    raw.parse::<ItemId>()
        .map_err(|_| Json(ErrorResponse::new("ValidationError", "item.invalid_id")))
}

fn detail_location(id: ItemId) -> String {
    format!("{}/{}", ITEMS_PATH, id)
}

/// Item management routes
///
/// Each operation maps one method and path to one handler:
///
/// | method | path              | handler          |
/// |--------|-------------------|------------------|
/// | GET    | /items            | `items`          |
/// | GET    | /items/:id        | `item`           |
/// | GET    | /items/add        | `add_form`       |
/// | POST   | /items/add        | `add_item`       |
/// | GET    | /items/:id/edit   | `edit_form`      |
/// | POST   | /items/:id/edit   | `edit`           |
#[OpenApi]
impl ItemApi {
    /// List all items
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn items(&self) -> ItemListResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => ItemListResponse::Ok(Json(items.into_iter().map(ItemView::from).collect())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ItemListResponse::InternalError(json)
            }
        }
    }

    /// Get one item
    ///
    /// `status=true` is appended by the redirect that follows a successful
    /// creation and is echoed back in the view.
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn item(&self, id: Path<String>, status: Query<Option<bool>>) -> ItemDetailResponse {
        let id = match parse_item_id(&id.0) {
            Ok(id) => id,
            Err(json) => return ItemDetailResponse::BadRequest(json),
        };

        match self.get_by_id_use_case.execute(GetItemByIdParams { id }).await {
            Ok(item) => ItemDetailResponse::Ok(Json(ItemDetailView {
                item: item.into(),
                status: status.0.unwrap_or(false),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ItemDetailResponse::NotFound(json),
                    _ => ItemDetailResponse::InternalError(json),
                }
            }
        }
    }

    /// Empty add form
    #[oai(path = "/items/add", method = "get", tag = "ApiTags::Items")]
    async fn add_form(&self) -> Json<ItemFormView> {
        Json(ItemFormView::new(ADD_FORM_VIEW, Item::empty().into()))
    }

    /// Create an item
    ///
    /// Every item rule is checked. On failure the add form comes back with the
    /// submitted values and all errors, and nothing is stored. On success the
    /// client is redirected to the new item.
    #[oai(path = "/items/add", method = "post", tag = "ApiTags::Items")]
    async fn add_item(&self, form: Form<ItemFormRequest>) -> AddItemResponse {
        let form: ItemForm = form.0.into();

        match self
            .create_use_case
            .execute(CreateItemParams { form: form.clone() })
            .await
        {
            Ok(item) => match item.id {
                Some(id) => AddItemResponse::SeeOther(format!("{}?status=true", detail_location(id))),
                None => AddItemResponse::InternalError(Json(ErrorResponse::new(
                    "InternalError",
                    "repository.persistence",
                ))),
            },
            Err(ItemError::Validation(errors)) => AddItemResponse::BadRequest(Json(
                ItemFormView::new(ADD_FORM_VIEW, ItemFormValues::from(form))
                    .with_errors(&errors, &self.messages),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                AddItemResponse::InternalError(json)
            }
        }
    }

    /// Edit form for a stored item
    #[oai(path = "/items/:id/edit", method = "get", tag = "ApiTags::Items")]
    async fn edit_form(&self, id: Path<String>) -> EditFormResponse {
        let id = match parse_item_id(&id.0) {
            Ok(id) => id,
            Err(json) => return EditFormResponse::BadRequest(json),
        };

        match self.get_by_id_use_case.execute(GetItemByIdParams { id }).await {
            Ok(item) => EditFormResponse::Ok(Json(ItemFormView::new(EDIT_FORM_VIEW, item.into()))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => EditFormResponse::NotFound(json),
                    _ => EditFormResponse::InternalError(json),
                }
            }
        }
    }

    /// Overwrite an item
    ///
    /// The submitted fields replace the stored item as-is. Item rules are not
    /// checked on this path, but a number that cannot be read sends the edit
    /// form back and the stored item is kept.
    #[oai(path = "/items/:id/edit", method = "post", tag = "ApiTags::Items")]
    async fn edit(&self, id: Path<String>, form: Form<ItemFormRequest>) -> EditItemResponse {
        let id = match parse_item_id(&id.0) {
            Ok(id) => id,
            Err(json) => {
                return EditItemResponse::BadRequest(Json(EditRejection::InvalidId(json.0)));
            }
        };
        let form: ItemForm = form.0.into();

        match self
            .update_use_case
            .execute(UpdateItemParams {
                id,
                form: form.clone(),
            })
            .await
        {
            Ok(_) => EditItemResponse::SeeOther(detail_location(id)),
            Err(ItemError::Validation(errors)) => {
                let values = ItemFormValues {
                    id: Some(id.value()),
                    ..ItemFormValues::from(form)
                };
                EditItemResponse::BadRequest(Json(EditRejection::Form(
                    ItemFormView::new(EDIT_FORM_VIEW, values).with_errors(&errors, &self.messages),
                )))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => EditItemResponse::NotFound(json),
                    _ => EditItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum ItemListResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemView>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ItemDetailResponse {
    #[oai(status = 200)]
    Ok(Json<ItemDetailView>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 303)]
    SeeOther(#[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<ItemFormView>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum EditFormResponse {
    #[oai(status = 200)]
    Ok(Json<ItemFormView>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Body of a rejected edit: either the id could not be read or a submitted
/// number could not.
#[derive(Debug, Clone, Union)]
pub enum EditRejection {
    InvalidId(ErrorResponse),
    Form(ItemFormView),
}

#[derive(ApiResponse)]
pub enum EditItemResponse {
    #[oai(status = 303)]
    SeeOther(#[oai(header = "Location")] String),
    #[oai(status = 400)]
    BadRequest(Json<EditRejection>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
