use poem_openapi::Object;
use serde::Deserialize;

use business::domain::item::binding::ItemForm;
use business::domain::item::messages::{MessageSource, resolve_message_codes};
use business::domain::item::model::Item;
use business::domain::item::validation::{ValidationError, ValidationErrors};

pub const ADD_FORM_VIEW: &str = "addForm";
pub const EDIT_FORM_VIEW: &str = "editForm";

/// Submitted item form (`application/x-www-form-urlencoded`).
#[derive(Debug, Clone, Default, Deserialize, Object)]
#[serde(rename_all = "camelCase")]
#[oai(rename_all = "camelCase")]
pub struct ItemFormRequest {
    /// Item name
    pub item_name: Option<String>,
    /// Price, as typed
    pub price: Option<String>,
    /// Quantity, as typed
    pub quantity: Option<String>,
}

impl From<ItemFormRequest> for ItemForm {
    fn from(request: ItemFormRequest) -> Self {
        Self {
            item_name: request.item_name,
            price: request.price,
            quantity: request.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemView {
    /// Item identifier
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    #[oai(skip_serializing_if_is_none)]
    pub item_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<i32>,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i32>,
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.map(|id| id.value()),
            item_name: item.item_name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

/// Single item view. `status` is set right after a successful creation.
#[derive(Debug, Clone, Object)]
pub struct ItemDetailView {
    pub item: ItemView,
    pub status: bool,
}

/// Values shown in form inputs. Numbers are kept as text so rejected input
/// can be echoed back unchanged.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemFormValues {
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    #[oai(skip_serializing_if_is_none)]
    pub item_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<String>,
}

impl From<Item> for ItemFormValues {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.map(|id| id.value()),
            item_name: item.item_name,
            price: item.price.map(|p| p.to_string()),
            quantity: item.quantity.map(|q| q.to_string()),
        }
    }
}

impl From<ItemForm> for ItemFormValues {
    fn from(form: ItemForm) -> Self {
        Self {
            id: None,
            item_name: form.item_name,
            price: form.price,
            quantity: form.quantity,
        }
    }
}

/// One validation error, with its message already resolved.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ValidationErrorView {
    /// Field name, absent for errors spanning several fields
    #[oai(skip_serializing_if_is_none)]
    pub field: Option<String>,
    pub code: String,
    /// Message codes tried, most specific first
    pub codes: Vec<String>,
    pub arguments: Vec<String>,
    #[oai(skip_serializing_if_is_none)]
    pub rejected_value: Option<String>,
    pub message: String,
}

impl ValidationErrorView {
    pub fn from_error(error: &ValidationError, messages: &MessageSource) -> Self {
        Self {
            field: error.field_name().map(str::to_string),
            code: error.code.clone(),
            codes: resolve_message_codes(error),
            arguments: error.arguments.iter().map(|a| a.to_string()).collect(),
            rejected_value: error.rejected_value.clone(),
            message: messages.message_for(error),
        }
    }
}

/// Add or edit form, optionally carrying errors from a rejected submission.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemFormView {
    pub view: String,
    pub item: ItemFormValues,
    pub field_errors: Vec<ValidationErrorView>,
    pub global_errors: Vec<ValidationErrorView>,
}

impl ItemFormView {
    pub fn new(view: &str, item: ItemFormValues) -> Self {
        Self {
            view: view.to_string(),
            item,
            field_errors: Vec::new(),
            global_errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: &ValidationErrors, messages: &MessageSource) -> Self {
        let (global, field): (Vec<_>, Vec<_>) = errors.iter().partition(|e| e.is_global());
        self.field_errors = field
            .into_iter()
            .map(|e| ValidationErrorView::from_error(e, messages))
            .collect();
        self.global_errors = global
            .into_iter()
            .map(|e| ValidationErrorView::from_error(e, messages))
            .collect();
        self
    }
}
