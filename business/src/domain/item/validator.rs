use super::model::Item;
use super::validation::{ValidationError, ValidationErrors};

pub const FIELD_ITEM_NAME: &str = "itemName";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_QUANTITY: &str = "quantity";

pub const PRICE_MIN: i32 = 1_000;
pub const PRICE_MAX: i32 = 1_000_000;
pub const QUANTITY_MAX: i32 = 9_999;
pub const TOTAL_PRICE_MIN: i64 = 10_000;

/// Checks every item rule and returns all violations in rule order.
///
/// Rules never short-circuit. An empty result means the item may be stored.
///
/// Known quirk: the price range rule also fires when `quantity` exceeds
/// `PRICE_MAX`, reporting the error on `price`. The condition is kept as
/// written because its intent is ambiguous.
pub fn validate_item(item: &Item) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    let name_blank = item
        .item_name
        .as_deref()
        .is_none_or(|name| name.trim().is_empty());
    if name_blank {
        errors.push(
            ValidationError::field(FIELD_ITEM_NAME, "required", vec![])
                .with_rejected_value(item.item_name.clone()),
        );
    }

    let price_out_of_range = item.price.is_none_or(|price| price < PRICE_MIN)
        || item.quantity.is_some_and(|quantity| quantity > PRICE_MAX);
    if price_out_of_range {
        errors.push(
            ValidationError::field(FIELD_PRICE, "range", vec![PRICE_MIN.into(), PRICE_MAX.into()])
                .with_rejected_value(item.price.map(|p| p.to_string())),
        );
    }

    let quantity_too_large = item
        .quantity
        .is_none_or(|quantity| quantity >= QUANTITY_MAX);
    if quantity_too_large {
        errors.push(
            ValidationError::field(FIELD_QUANTITY, "max", vec![QUANTITY_MAX.into()])
                .with_rejected_value(item.quantity.map(|q| q.to_string())),
        );
    }

    if let (Some(price), Some(quantity)) = (item.price, item.quantity) {
        let total = i64::from(price) * i64::from(quantity);
        if total < TOTAL_PRICE_MIN {
            errors.push(ValidationError::object(
                "totalPriceMin",
                vec![TOTAL_PRICE_MIN.into(), total.into()],
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::validation::{ErrorArgument, ErrorTarget};
    use proptest::prelude::*;

    fn item(name: Option<&str>, price: Option<i32>, quantity: Option<i32>) -> Item {
        Item {
            id: None,
            item_name: name.map(str::to_string),
            price,
            quantity,
        }
    }

    fn codes(errors: &ValidationErrors) -> Vec<(Option<String>, String)> {
        errors
            .iter()
            .map(|e| (e.field_name().map(str::to_string), e.code.clone()))
            .collect()
    }

    #[test]
    fn should_accept_item_when_every_rule_passes() {
        let errors = validate_item(&item(Some("Book"), Some(15000), Some(10)));
        assert!(!errors.has_errors());
    }

    #[test]
    fn should_report_three_field_errors_when_name_price_and_quantity_invalid() {
        let errors = validate_item(&item(Some(""), Some(500), Some(10000)));

        assert_eq!(
            codes(&errors),
            vec![
                (Some("itemName".to_string()), "required".to_string()),
                (Some("price".to_string()), "range".to_string()),
                (Some("quantity".to_string()), "max".to_string()),
            ]
        );
    }

    #[test]
    fn should_report_total_price_min_when_fields_pass_individually() {
        let errors = validate_item(&item(Some("Cup"), Some(1000), Some(1)));

        assert_eq!(errors.len(), 1);
        let error = errors.iter().next().unwrap();
        assert_eq!(error.target, ErrorTarget::Object);
        assert_eq!(error.code, "totalPriceMin");
        assert_eq!(
            error.arguments,
            vec![ErrorArgument::Int(10000), ErrorArgument::Int(1000)]
        );
    }

    #[test]
    fn should_report_every_field_when_all_absent() {
        let errors = validate_item(&Item::empty());

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.global_errors().count(), 0);
    }

    #[test]
    fn should_not_fire_quantity_arm_of_price_rule_when_quantity_absent() {
        let errors = validate_item(&item(Some("Lamp"), Some(5000), None));

        assert!(!errors.has_field_errors("price"));
        assert!(errors.has_field_errors("quantity"));
    }

    #[test]
    fn should_carry_range_arguments_on_price_error() {
        let errors = validate_item(&item(Some("Lamp"), Some(10), Some(2000)));
        let price_error = errors.field_errors("price").next().unwrap();

        assert_eq!(
            price_error.arguments,
            vec![ErrorArgument::Int(1000), ErrorArgument::Int(1_000_000)]
        );
        assert_eq!(price_error.rejected_value.as_deref(), Some("10"));
    }

    #[test]
    fn should_compute_total_without_overflow_when_values_are_large() {
        let errors = validate_item(&item(Some("Gold"), Some(i32::MAX), Some(9000)));
        assert_eq!(errors.global_errors().count(), 0);
    }

    proptest! {
        #[test]
        fn blank_names_are_required(name in "[ \t]{0,8}", price in any::<Option<i32>>(), quantity in any::<Option<i32>>()) {
            let errors = validate_item(&item(Some(&name), price, quantity));
            prop_assert!(errors.field_errors("itemName").any(|e| e.code == "required"));
        }

        #[test]
        fn low_or_missing_price_is_out_of_range(price in prop::option::of(i32::MIN..PRICE_MIN), quantity in any::<Option<i32>>()) {
            let errors = validate_item(&item(Some("Book"), price, quantity));
            prop_assert!(errors.field_errors("price").any(|e| e.code == "range"));
        }

        #[test]
        fn oversized_quantity_is_reported_on_price(price in any::<Option<i32>>(), quantity in (PRICE_MAX + 1)..=i32::MAX) {
            let errors = validate_item(&item(Some("Book"), price, Some(quantity)));
            prop_assert!(errors.field_errors("price").any(|e| e.code == "range"));
        }

        #[test]
        fn missing_or_large_quantity_exceeds_max(quantity in prop::option::of(QUANTITY_MAX..=i32::MAX)) {
            let errors = validate_item(&item(Some("Book"), Some(20000), quantity));
            prop_assert!(errors.field_errors("quantity").any(|e| e.code == "max"));
        }

        #[test]
        fn small_totals_raise_object_error(price in -100i32..100, quantity in -100i32..100) {
            let errors = validate_item(&item(Some("Book"), Some(price), Some(quantity)));
            let total = i64::from(price) * i64::from(quantity);
            let global: Vec<_> = errors.global_errors().collect();
            prop_assert_eq!(global.len(), 1);
            prop_assert_eq!(&global[0].code, "totalPriceMin");
            prop_assert_eq!(
                &global[0].arguments,
                &vec![ErrorArgument::Int(10000), ErrorArgument::Int(total)]
            );
        }
    }
}
