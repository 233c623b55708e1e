//! Test fixture creation for the directory database

use super::constants::*;
use anyhow::Result;
use pet_directory_server::directory_store::{DirectoryStore, SqliteDirectoryStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary directory database seeded with three owners (Ben with
/// one pet, Alice with none, Carol with two) and an unassigned pet.
/// Returns (temp_dir, db_path).
pub fn create_test_directory() -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let db_path = dir.path().join("directory.db");

    {
        let store = SqliteDirectoryStore::new(&db_path)?;

        let ben = store.create_owner(OWNER_BEN_NAME)?;
        let alice = store.create_owner(OWNER_ALICE_NAME)?;
        let carol = store.create_owner(OWNER_CAROL_NAME)?;
        assert_eq!(ben.id, OWNER_BEN_ID);
        assert_eq!(alice.id, OWNER_ALICE_ID);
        assert_eq!(carol.id, OWNER_CAROL_ID);

        let ben_pet = store.create_pet(PET_BEN_NAME, PET_BEN_SPECIES, Some(ben.id))?;
        let whiskers = store.create_pet(PET_WHISKERS_NAME, PET_WHISKERS_SPECIES, None)?;
        assert_eq!(ben_pet.id, PET_BEN_ID);
        assert_eq!(whiskers.id, PET_WHISKERS_ID);

        store.create_pet(PET_REX_NAME, PET_REX_SPECIES, Some(carol.id))?;
        store.create_pet(PET_POLLY_NAME, PET_POLLY_SPECIES, Some(carol.id))?;
    }

    Ok((dir, db_path))
}
