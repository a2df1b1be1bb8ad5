//! The item record and its public field view.

use serde::{Deserialize, Serialize};

/// A row of the `items` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Item {
    /// Primary key, generated by Postgres on insert
    #[sqlx(rename = "itemid")]
    pub id: i64,
    /// Unique item name
    #[sqlx(rename = "itemname")]
    pub name: String,
    /// Free-form description
    #[sqlx(rename = "itemdesc")]
    pub description: String,
}

/// The `{item_name, item_desc}` pair.
///
/// Doubles as the HTTP response body for create/read/update and as the
/// field mapping stored in the cache under the item id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemView {
    pub item_name: String,
    pub item_desc: String,
}

impl ItemView {
    pub fn new(item_name: impl Into<String>, item_desc: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            item_desc: item_desc.into(),
        }
    }
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self::new(item.name.clone(), item.description.clone())
    }
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self::new(item.name, item.description)
    }
}
