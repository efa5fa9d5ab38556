//! PostgreSQL-backed `DisclosureRepository` using Diesel.
//!
//! The `gri_disclosures_member_code_key` unique constraint is the
//! authoritative duplicate check; a rejected insert is reported as
//! `DisclosureRepositoryError::DuplicateCode`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{DisclosureRepository, DisclosureRepositoryError, NewDisclosureRecord};
use crate::domain::{Disclosure, DisclosureId, GriCode, MemberId};

use super::diesel_basic_error_mapping::{
    is_unique_violation, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{DisclosureContentUpdate, DisclosureRow, NewDisclosureRow};
use super::pool::{DbPool, PoolError};
use super::schema::gri_disclosures;

/// Diesel-backed implementation of the `DisclosureRepository` port.
#[derive(Clone)]
pub struct DieselDisclosureRepository {
    pool: DbPool,
}

impl DieselDisclosureRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DisclosureRepositoryError {
    map_basic_pool_error(error, DisclosureRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> DisclosureRepositoryError {
    map_basic_diesel_error(
        error,
        DisclosureRepositoryError::query,
        DisclosureRepositoryError::connection,
    )
}

/// Convert a row to a domain disclosure.
///
/// Rows violating domain invariants can only come from out-of-band writes;
/// they surface as query errors rather than panics.
fn row_to_disclosure(row: DisclosureRow) -> Result<Disclosure, DisclosureRepositoryError> {
    let gri_code = GriCode::new(row.gri_code).map_err(|err| {
        warn!(disclosure_id = row.id, error = %err, "stored GRI code is invalid");
        DisclosureRepositoryError::query("stored GRI code is invalid")
    })?;
    Ok(Disclosure {
        id: DisclosureId::new(row.id),
        member_id: MemberId::new(row.member_id),
        gri_code,
        indicator: row.indicator,
        category: row.category,
        content: row.content,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn rows_to_disclosures(
    rows: Vec<DisclosureRow>,
) -> Result<Vec<Disclosure>, DisclosureRepositoryError> {
    rows.into_iter().map(row_to_disclosure).collect()
}

#[async_trait]
impl DisclosureRepository for DieselDisclosureRepository {
    async fn insert(
        &self,
        record: NewDisclosureRecord,
    ) -> Result<Disclosure, DisclosureRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let draft = &record.draft;
        let new_row = NewDisclosureRow {
            member_id: record.member_id.get(),
            gri_code: draft.gri_code.as_ref(),
            indicator: &draft.indicator,
            category: draft.category.as_deref(),
            content: draft.content.as_deref(),
            created_at: record.created_at,
            updated_at: record.created_at,
        };

        let row = diesel::insert_into(gri_disclosures::table)
            .values(&new_row)
            .returning(DisclosureRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    DisclosureRepositoryError::duplicate_code(draft.gri_code.as_ref())
                } else {
                    map_diesel_error(err)
                }
            })?;
        row_to_disclosure(row)
    }

    async fn find_by_id(
        &self,
        id: DisclosureId,
    ) -> Result<Option<Disclosure>, DisclosureRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<DisclosureRow> = gri_disclosures::table
            .find(id.get())
            .select(DisclosureRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_disclosure).transpose()
    }

    async fn find_by_member_and_code(
        &self,
        member_id: MemberId,
        code: &GriCode,
    ) -> Result<Option<Disclosure>, DisclosureRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<DisclosureRow> = gri_disclosures::table
            .filter(gri_disclosures::member_id.eq(member_id.get()))
            .filter(gri_disclosures::gri_code.eq(code.as_ref()))
            .select(DisclosureRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_disclosure).transpose()
    }

    async fn list_by_member(
        &self,
        member_id: MemberId,
    ) -> Result<Vec<Disclosure>, DisclosureRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DisclosureRow> = gri_disclosures::table
            .filter(gri_disclosures::member_id.eq(member_id.get()))
            .order(gri_disclosures::id.asc())
            .select(DisclosureRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows_to_disclosures(rows)
    }

    async fn update(
        &self,
        record: &Disclosure,
    ) -> Result<Option<Disclosure>, DisclosureRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = DisclosureContentUpdate {
            content: record.content.as_deref(),
            updated_at: record.updated_at,
        };

        let row: Option<DisclosureRow> = diesel::update(gri_disclosures::table.find(record.id.get()))
            .set(&changes)
            .returning(DisclosureRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_disclosure).transpose()
    }

    async fn delete(&self, id: DisclosureId) -> Result<bool, DisclosureRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(gri_disclosures::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
