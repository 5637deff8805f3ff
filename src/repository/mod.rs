use crate::db::{DbConnection, DbPool};
use crate::domain::item::{FoundItem, LostItem};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod item;

pub trait FoundItemReader {
    /// Found items that are still available, most recent first.
    fn list_open_found_items(&self) -> RepositoryResult<Vec<FoundItem>>;
}

pub trait LostItemReader {
    fn get_lost_item(&self, item_id: i32) -> RepositoryResult<LostItem>;
}

/// Diesel-backed repository over the reporting application's database.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
