//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; `diesel print-schema` against a
//! migrated database regenerates it.

diesel::table! {
    /// GRI disclosure lines, one per `(member_id, gri_code)`.
    gri_disclosures (id) {
        id -> Int8,
        member_id -> Int8,
        /// GRI indicator code (max 10 characters).
        gri_code -> Varchar,
        indicator -> Varchar,
        category -> Nullable<Varchar>,
        content -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}
