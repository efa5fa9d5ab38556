//! Test utilities for the backend crate.
//!
//! Shared by unit tests under `src/` and integration tests under `tests/`.
//! Compiled only for tests or with the `test-support` feature.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeDelta, Utc};
use mockable::Clock;

use crate::domain::ports::{DisclosureRepository, DisclosureRepositoryError, NewDisclosureRecord};
use crate::domain::{Disclosure, DisclosureId, GriCode, MemberId};

/// Clock that only moves when told to.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance_seconds(&self, seconds: i64) {
        *self.lock_clock() += TimeDelta::seconds(seconds);
    }

    fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

#[derive(Default)]
struct Rows {
    next_id: i64,
    records: Vec<Disclosure>,
}

/// In-process disclosure store with the same uniqueness rule as the
/// database table.
#[derive(Default)]
pub struct InMemoryDisclosureRepository {
    rows: Mutex<Rows>,
    unavailable: Mutex<bool>,
}

impl InMemoryDisclosureRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with a connection error.
    pub fn set_unavailable(&self, unavailable: bool) {
        *lock(&self.unavailable) = unavailable;
    }

    /// Snapshot of all stored rows in id order.
    pub fn snapshot(&self) -> Vec<Disclosure> {
        lock(&self.rows).records.clone()
    }

    fn rows(&self) -> Result<MutexGuard<'_, Rows>, DisclosureRepositoryError> {
        if *lock(&self.unavailable) {
            return Err(DisclosureRepositoryError::connection("store offline"));
        }
        Ok(lock(&self.rows))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(_) => panic!("in-memory repository mutex"),
    }
}

#[async_trait]
impl DisclosureRepository for InMemoryDisclosureRepository {
    async fn insert(
        &self,
        record: NewDisclosureRecord,
    ) -> Result<Disclosure, DisclosureRepositoryError> {
        let mut rows = self.rows()?;
        let NewDisclosureRecord {
            member_id,
            draft,
            created_at,
        } = record;
        let taken = rows
            .records
            .iter()
            .any(|row| row.member_id == member_id && row.gri_code == draft.gri_code);
        if taken {
            return Err(DisclosureRepositoryError::duplicate_code(
                draft.gri_code.as_ref(),
            ));
        }
        rows.next_id += 1;
        let stored = Disclosure {
            id: DisclosureId::new(rows.next_id),
            member_id,
            gri_code: draft.gri_code,
            indicator: draft.indicator,
            category: draft.category,
            content: draft.content,
            created_at,
            updated_at: created_at,
        };
        rows.records.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: DisclosureId,
    ) -> Result<Option<Disclosure>, DisclosureRepositoryError> {
        let rows = self.rows()?;
        Ok(rows.records.iter().find(|row| row.id == id).cloned())
    }

    async fn find_by_member_and_code(
        &self,
        member_id: MemberId,
        code: &GriCode,
    ) -> Result<Option<Disclosure>, DisclosureRepositoryError> {
        let rows = self.rows()?;
        Ok(rows
            .records
            .iter()
            .find(|row| row.member_id == member_id && &row.gri_code == code)
            .cloned())
    }

    async fn list_by_member(
        &self,
        member_id: MemberId,
    ) -> Result<Vec<Disclosure>, DisclosureRepositoryError> {
        let rows = self.rows()?;
        Ok(rows
            .records
            .iter()
            .filter(|row| row.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        record: &Disclosure,
    ) -> Result<Option<Disclosure>, DisclosureRepositoryError> {
        let mut rows = self.rows()?;
        let Some(row) = rows.records.iter_mut().find(|row| row.id == record.id) else {
            return Ok(None);
        };
        row.content.clone_from(&record.content);
        row.updated_at = record.updated_at;
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: DisclosureId) -> Result<bool, DisclosureRepositoryError> {
        let mut rows = self.rows()?;
        let before = rows.records.len();
        rows.records.retain(|row| row.id != id);
        Ok(rows.records.len() != before)
    }
}
