//! Item entity and partial-update payloads.

use crate::domain::user::non_blank;

/// Listed item owned by a user.
///
/// `available = false` blocks new bookings but does not hide the item.
/// `request_id` links the item to the item request it fulfills, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

/// New item payload, prior to identity assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i64,
    pub request_id: Option<i64>,
}

/// Partial update for an item.
///
/// Absent or blank `name`/`description` leave the stored value unchanged;
/// an absent `available` flag is a no-op as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

impl ItemPatch {
    /// Apply non-blank fields onto an existing item.
    #[must_use]
    pub fn apply(&self, mut item: Item) -> Item {
        if let Some(name) = non_blank(self.name.as_deref()) {
            item.name = name;
        }
        if let Some(description) = non_blank(self.description.as_deref()) {
            item.description = description;
        }
        if let Some(available) = self.available {
            item.available = available;
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn drill() -> Item {
        Item {
            id: 3,
            name: "Drill".to_owned(),
            description: "Cordless drill".to_owned(),
            available: true,
            owner_id: 1,
            request_id: None,
        }
    }

    #[rstest]
    fn patch_applies_present_fields() {
        let patch = ItemPatch {
            name: None,
            description: Some("Cordless drill, two batteries".to_owned()),
            available: Some(false),
        };
        let updated = patch.apply(drill());
        assert_eq!(updated.name, "Drill");
        assert_eq!(updated.description, "Cordless drill, two batteries");
        assert!(!updated.available);
    }

    #[rstest]
    fn blank_strings_do_not_clear_fields() {
        let patch = ItemPatch {
            name: Some("  ".to_owned()),
            description: Some(String::new()),
            available: None,
        };
        assert_eq!(patch.apply(drill()), drill());
    }
}
