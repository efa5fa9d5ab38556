//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them to
//! domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::gri_disclosures;

/// Row struct for reading from the `gri_disclosures` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = gri_disclosures)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DisclosureRow {
    pub id: i64,
    pub member_id: i64,
    pub gri_code: String,
    pub indicator: String,
    pub category: Option<String>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for new disclosure rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = gri_disclosures)]
pub(crate) struct NewDisclosureRow<'a> {
    pub member_id: i64,
    pub gri_code: &'a str,
    pub indicator: &'a str,
    pub category: Option<&'a str>,
    pub content: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Changeset for the mutable columns.
///
/// `treat_none_as_null` so clearing `content` writes NULL instead of skipping
/// the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = gri_disclosures)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct DisclosureContentUpdate<'a> {
    pub content: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}
