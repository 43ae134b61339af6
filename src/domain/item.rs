//! The to-do item entity and its field rules.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum accepted item name length, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// A stored to-do item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Store-assigned identifier. Never reused after deletion.
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

/// Payload for creating an item; the store assigns the id.
#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTodoItem {
    pub name: String,
    #[serde(default)]
    pub is_complete: bool,
}

/// Name rules shared by create and replace: non-empty, at most
/// [`MAX_NAME_LEN`] characters.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name must not be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(format!("name must be at most {} characters", MAX_NAME_LEN));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_camel_case() {
        let item = TodoItem {
            id: 1,
            name: "Item1".to_string(),
            is_complete: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Item1");
        assert_eq!(json["isComplete"], false);
    }

    #[test]
    fn item_roundtrips_through_json() {
        let item = TodoItem {
            id: 7,
            name: "Walk dog".to_string(),
            is_complete: true,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: TodoItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn new_item_defaults_is_complete_to_false() {
        let new: NewTodoItem = serde_json::from_str(r#"{"name":"Buy milk"}"#).unwrap();
        assert_eq!(new.name, "Buy milk");
        assert!(!new.is_complete);
    }

    #[test]
    fn new_item_accepts_explicit_is_complete() {
        let new: NewTodoItem =
            serde_json::from_str(r#"{"name":"Done","isComplete":true}"#).unwrap();
        assert!(new.is_complete);
    }

    #[test]
    fn new_item_rejects_missing_name() {
        let result: Result<NewTodoItem, _> = serde_json::from_str(r#"{"isComplete":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn name_at_limit_is_accepted() {
        let name = "x".repeat(MAX_NAME_LEN);
        assert!(validate_name(&name).is_ok());
    }

    #[test]
    fn name_over_limit_is_rejected() {
        let name = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_name(&name).is_err());
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(validate_name("").is_err());
    }

    #[test]
    fn multibyte_names_are_counted_in_characters() {
        // 50 three-byte characters is still 50 characters.
        let name = "中".repeat(MAX_NAME_LEN);
        assert!(validate_name(&name).is_ok());
        let name = "中".repeat(MAX_NAME_LEN + 1);
        assert!(validate_name(&name).is_err());
    }
}
