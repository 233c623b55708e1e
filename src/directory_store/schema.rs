//! SQLite schema definitions for the directory database.

use crate::sqlite_column;
use crate::sqlite_persistence::{
    Column, ForeignKey, ForeignKeyOnChange, SqlType, Table, VersionedSchema,
};

// =============================================================================
// Version 1 - Owners and pets
// =============================================================================

/// Owners table. Ids are rowid-backed and assigned on insert.
const OWNERS_TABLE_V1: Table = Table {
    name: "owners",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
    ],
    indices: &[],
};

/// Deleting an owner orphans their pets instead of deleting them.
const PETS_OWNER_FK: ForeignKey = ForeignKey {
    foreign_table: "owners",
    foreign_column: "id",
    on_delete: ForeignKeyOnChange::SetNull,
};

/// Pets table. `owner_id` is nullable, a pet may exist without an owner.
const PETS_TABLE_V1: Table = Table {
    name: "pets",
    columns: &[
        sqlite_column!("id", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("name", &SqlType::Text, non_null = true),
        sqlite_column!("species", &SqlType::Text, non_null = true),
        sqlite_column!("owner_id", &SqlType::Integer, foreign_key = Some(&PETS_OWNER_FK)),
    ],
    indices: &[("idx_pets_owner_id", "owner_id")],
};

/// All versioned schemas for the directory database.
///
/// Version 1: owners and pets tables
pub const DIRECTORY_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 1,
    tables: &[OWNERS_TABLE_V1, PETS_TABLE_V1],
    migration: None, // Initial version has no migration
}];
