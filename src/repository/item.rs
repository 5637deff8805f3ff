use diesel::prelude::*;

use crate::domain::item::{FoundItem, ItemKind, ItemStatus, LostItem};
use crate::models::item::Item as DbItem;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, FoundItemReader, LostItemReader};

impl FoundItemReader for DieselRepository {
    fn list_open_found_items(&self) -> RepositoryResult<Vec<FoundItem>> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        // Single read so the matcher sees one consistent snapshot.
        // SQLite sorts NULL dates last under DESC.
        let result = items::table
            .filter(items::item_type.eq(ItemKind::Found.as_str()))
            .filter(items::status.eq(ItemStatus::Available.as_str()))
            .order((items::date.desc(), items::id.desc()))
            .select(DbItem::as_select())
            .load::<DbItem>(&mut conn)?;

        Ok(result.into_iter().map(FoundItem::from).collect())
    }
}

impl LostItemReader for DieselRepository {
    fn get_lost_item(&self, item_id: i32) -> RepositoryResult<LostItem> {
        use crate::schema::items;

        let mut conn = self.conn()?;

        let item = items::table
            .filter(items::id.eq(item_id))
            .filter(items::item_type.eq(ItemKind::Lost.as_str()))
            .select(DbItem::as_select())
            .first::<DbItem>(&mut conn)?;

        Ok(item.into())
    }
}
