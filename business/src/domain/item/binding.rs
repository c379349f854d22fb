use super::model::{Item, NewItemProps};
use super::validation::{ValidationError, ValidationErrors};
use super::validator::{FIELD_PRICE, FIELD_QUANTITY};

pub const TYPE_MISMATCH_CODE: &str = "typeMismatch";

/// Raw form submission, exactly as the client sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub item_name: Option<String>,
    pub price: Option<String>,
    pub quantity: Option<String>,
}

/// Result of binding a submission onto an item.
#[derive(Debug, Clone)]
pub struct BoundItem {
    pub item: Item,
    pub errors: ValidationErrors,
}

/// Binds the raw form onto an unsaved item.
///
/// Missing or blank numbers bind as absent. Text that does not parse as a
/// 32-bit integer also binds as absent and records a `typeMismatch` error
/// holding the rejected text.
pub fn bind_item_form(form: &ItemForm) -> BoundItem {
    let mut errors = ValidationErrors::new();

    let price = bind_integer(FIELD_PRICE, form.price.as_deref(), &mut errors);
    let quantity = bind_integer(FIELD_QUANTITY, form.quantity.as_deref(), &mut errors);

    let item = Item::new(NewItemProps {
        item_name: form.item_name.clone(),
        price,
        quantity,
    });

    BoundItem { item, errors }
}

fn bind_integer(field: &str, raw: Option<&str>, errors: &mut ValidationErrors) -> Option<i32> {
    let text = raw.map(str::trim).filter(|t| !t.is_empty())?;
    match text.parse::<i32>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.push(
                ValidationError::field(field, TYPE_MISMATCH_CODE, vec![field.into()])
                    .with_rejected_value(raw.map(str::to_string)),
            );
            None
        }
    }
}
