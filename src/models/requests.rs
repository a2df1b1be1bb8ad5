//! Request DTOs for the item API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Maximum item name length in characters (`VARCHAR(100)`)
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum item description length in characters (`VARCHAR(1000)`)
pub const MAX_DESC_LENGTH: usize = 1000;

/// Request body for create (POST /items/) and update (PUT /items/{item_id})
///
/// # Fields
/// - `itemname`: Unique name of the item
/// - `itemdesc`: Item description
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRequest {
    /// The item name
    pub itemname: String,
    /// The item description
    pub itemdesc: String,
}

impl ItemRequest {
    /// Creates a new ItemRequest
    pub fn new(itemname: impl Into<String>, itemdesc: impl Into<String>) -> Self {
        Self {
            itemname: itemname.into(),
            itemdesc: itemdesc.into(),
        }
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.itemname.trim().is_empty() {
            return Some("Item name cannot be empty".to_string());
        }
        if self.itemname.contains('\0') {
            return Some("Item name cannot contain NUL characters".to_string());
        }
        if self.itemdesc.contains('\0') {
            return Some("Item description cannot contain NUL characters".to_string());
        }
        if self.itemname.chars().count() > MAX_NAME_LENGTH {
            return Some(format!(
                "Item name exceeds maximum length of {} characters",
                MAX_NAME_LENGTH
            ));
        }
        if self.itemdesc.chars().count() > MAX_DESC_LENGTH {
            return Some(format!(
                "Item description exceeds maximum length of {} characters",
                MAX_DESC_LENGTH
            ));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_request_deserialize() {
        let json = r#"{"itemname": "pen", "itemdesc": "blue pen"}"#;
        let req: ItemRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.itemname, "pen");
        assert_eq!(req.itemdesc, "blue pen");
    }

    #[test]
    fn test_item_request_missing_field() {
        let json = r#"{"itemname": "pen"}"#;
        assert!(serde_json::from_str::<ItemRequest>(json).is_err());
    }

    #[test]
    fn test_validate_empty_name() {
        assert!(ItemRequest::new("  ", "desc").validate().is_some());
    }

    #[test]
    fn test_validate_length_limits_count_characters() {
        let name = "é".repeat(MAX_NAME_LENGTH);
        assert!(ItemRequest::new(name, "desc").validate().is_none());

        let name = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(ItemRequest::new(name, "desc").validate().is_some());

        let desc = "d".repeat(MAX_DESC_LENGTH + 1);
        assert!(ItemRequest::new("pen", desc).validate().is_some());
    }

    #[test]
    fn test_validate_rejects_nul() {
        assert!(ItemRequest::new("a\0b", "desc").validate().is_some());
        assert!(ItemRequest::new("pen", "blue\0pen").validate().is_some());
    }

    #[test]
    fn test_validate_valid_request() {
        assert!(ItemRequest::new("pen", "").validate().is_none());
    }
}
