//! Catalog Repository
//!
//! One generic repository serves hotels, caterings, vendors and events.
//! Deletes never cascade: bookings keep whatever references they hold.

use super::{BaseRepository, RepoError, RepoResult, parse_record_id};
use crate::db::models::CatalogRecord;
use std::marker::PhantomData;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub struct CatalogRepository<T> {
    base: BaseRepository,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for CatalogRepository<T> {
    fn clone(&self) -> Self {
        Self {
            base: self.base.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: CatalogRecord> CatalogRepository<T> {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
            _record: PhantomData,
        }
    }

    /// All entries ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<T>> {
        let sql = format!("SELECT * FROM type::table($table) ORDER BY {}", T::ORDER_BY);
        let records: Vec<T> = self
            .base
            .db()
            .query(sql)
            .bind(("table", T::TABLE))
            .await?
            .take(0)?;
        Ok(records)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<T>> {
        let thing = parse_record_id(T::TABLE, id)?;
        let record: Option<T> = self.base.db().select(thing).await?;
        Ok(record)
    }

    /// Resolve a stored reference, tolerating junk
    ///
    /// Empty, unparsable or dangling references resolve to `None`; only
    /// store failures are errors.
    pub async fn resolve(&self, reference: Option<&str>) -> RepoResult<Option<T>> {
        let Some(reference) = reference.map(str::trim).filter(|r| !r.is_empty()) else {
            return Ok(None);
        };
        match self.find_by_id(reference).await {
            Ok(found) => Ok(found),
            Err(RepoError::Validation(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn create(&self, mut record: T) -> RepoResult<T> {
        record.clear_id();
        let created: Option<T> = self.base.db().create(T::TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database(format!("Failed to create {}", T::LABEL)))
    }

    /// Merge the provided fields into an existing entry
    pub async fn update(&self, id: &str, data: T::Update) -> RepoResult<T> {
        let thing = parse_record_id(T::TABLE, id)?;
        let mut result = self
            .base
            .db()
            .query("UPDATE $thing MERGE $data RETURN AFTER")
            .bind(("thing", thing))
            .bind(("data", data))
            .await?;
        let records: Vec<T> = result.take(0)?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("{} {} not found", T::LABEL, id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let thing = parse_record_id(T::TABLE, id)?;
        let mut result = self
            .base
            .db()
            .query("DELETE $thing RETURN BEFORE")
            .bind(("thing", thing))
            .await?;
        let removed: Vec<T> = result.take(0)?;
        if removed.is_empty() {
            return Err(RepoError::NotFound(format!("{} {} not found", T::LABEL, id)));
        }
        Ok(())
    }
}
