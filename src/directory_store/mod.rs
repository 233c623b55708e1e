mod models;
mod schema;
mod sqlite_directory_store;

pub use models::*;
pub use schema::DIRECTORY_VERSIONED_SCHEMAS;
pub use sqlite_directory_store::SqliteDirectoryStore;

use anyhow::Result;

/// Storage backend for the owner/pet directory.
///
/// Lookups are exact-match by id and return `Ok(None)` for a missing record;
/// only a failure to reach the database is an `Err`. Read operations have no
/// side effects. Data entry happens through the admin CLI (and test
/// fixtures), never through request handlers.
pub trait DirectoryStore: Send + Sync {
    // =========================================================================
    // Lookups
    // =========================================================================

    /// Get an owner by id.
    fn get_owner(&self, id: i64) -> Result<Option<Owner>>;

    /// Get a pet by id.
    fn get_pet(&self, id: i64) -> Result<Option<Pet>>;

    /// Get a pet together with its owner, if one is assigned.
    fn get_resolved_pet(&self, id: i64) -> Result<Option<ResolvedPet>>;

    /// Get an owner together with their pets, in insertion order.
    fn get_resolved_owner(&self, id: i64) -> Result<Option<ResolvedOwner>>;

    /// Get all pets assigned to an owner, in insertion order.
    fn get_owner_pets(&self, owner_id: i64) -> Result<Vec<Pet>>;

    // =========================================================================
    // Listings and counts
    // =========================================================================

    fn list_owners(&self) -> Result<Vec<Owner>>;
    fn list_pets(&self) -> Result<Vec<Pet>>;

    fn get_owners_count(&self) -> usize;
    fn get_pets_count(&self) -> usize;

    // =========================================================================
    // Data entry
    // =========================================================================

    /// Create an owner. The store assigns the id.
    fn create_owner(&self, name: &str) -> Result<Owner>;

    /// Create a pet, optionally assigned to an existing owner. The store
    /// assigns the id; a dangling `owner_id` is rejected.
    fn create_pet(&self, name: &str, species: &str, owner_id: Option<i64>) -> Result<Pet>;

    /// Assign a pet to an owner, or clear the assignment with `None`.
    fn set_pet_owner(&self, pet_id: i64, owner_id: Option<i64>) -> Result<()>;

    /// Delete an owner. Their pets stay and become unassigned.
    /// Returns false if no such owner existed.
    fn delete_owner(&self, id: i64) -> Result<bool>;

    /// Delete a pet. Returns false if no such pet existed.
    fn delete_pet(&self, id: i64) -> Result<bool>;
}
