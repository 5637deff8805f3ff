use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::item::{FoundItem, LostItem};

/// Row of the `item` table, limited to the columns matching needs.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Item {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDateTime>,
    pub item_type: String,
    pub status: Option<String>,
}

impl From<Item> for FoundItem {
    fn from(item: Item) -> Self {
        FoundItem::new(item.id, item.title, item.description)
    }
}

impl From<Item> for LostItem {
    fn from(item: Item) -> Self {
        LostItem {
            id: item.id,
            title: item.title,
            description: item.description,
        }
    }
}
