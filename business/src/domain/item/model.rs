use super::value_objects::ItemId;

/// An item as held by the repository and rendered by the views.
///
/// Every field is optional at this level. Semantic constraints are applied by
/// the validator before an item is persisted, never by the type itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub id: Option<ItemId>,
    pub item_name: Option<String>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

pub struct NewItemProps {
    pub item_name: Option<String>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl Item {
    /// Builds an item that has not been stored yet.
    pub fn new(props: NewItemProps) -> Self {
        Self {
            id: None,
            item_name: props.item_name,
            price: props.price,
            quantity: props.quantity,
        }
    }

    /// The blank item shown by the add form.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ItemId,
        item_name: Option<String>,
        price: Option<i32>,
        quantity: Option<i32>,
    ) -> Self {
        Self {
            id: Some(id),
            item_name,
            price,
            quantity,
        }
    }

    pub fn with_id(self, id: ItemId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_unsaved_item_without_id() {
        let item = Item::new(NewItemProps {
            item_name: Some("Book".to_string()),
            price: Some(15000),
            quantity: Some(10),
        });

        assert!(item.id.is_none());
        assert_eq!(item.item_name.as_deref(), Some("Book"));
    }

    #[test]
    fn should_leave_every_field_absent_when_empty() {
        let item = Item::empty();

        assert!(item.id.is_none());
        assert!(item.item_name.is_none());
        assert!(item.price.is_none());
        assert!(item.quantity.is_none());
    }

    #[test]
    fn should_keep_fields_when_id_assigned() {
        let item = Item::new(NewItemProps {
            item_name: Some("Pen".to_string()),
            price: Some(1200),
            quantity: None,
        })
        .with_id(ItemId::new(3));

        assert_eq!(item.id, Some(ItemId::new(3)));
        assert_eq!(item.price, Some(1200));
        assert!(item.quantity.is_none());
    }
}
