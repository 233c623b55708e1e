use super::models::{Owner, Pet, ResolvedOwner, ResolvedPet};
use super::schema::DIRECTORY_VERSIONED_SCHEMAS;
use super::DirectoryStore;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{bail, Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

pub struct SqliteDirectoryStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDirectoryStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = db_path.as_ref();
        let is_new_db = !path.exists();

        let mut conn = Connection::open(path).context("Failed to open directory database")?;
        conn.execute("PRAGMA foreign_keys = ON;", [])?;

        if is_new_db {
            // Fresh database - create with latest schema
            info!("Creating new directory database at {:?}", path);
            DIRECTORY_VERSIONED_SCHEMAS.last().unwrap().create(&conn)?;
        } else {
            // Existing database - check version and migrate if needed
            let raw_version: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
            let db_version = raw_version - BASE_DB_VERSION as i64;

            if db_version < 1 {
                bail!(
                    "Directory database version {} is invalid (expected >= 1)",
                    db_version
                );
            }

            let current_schema_version = DIRECTORY_VERSIONED_SCHEMAS.last().unwrap().version as i64;

            let version_index = DIRECTORY_VERSIONED_SCHEMAS
                .iter()
                .position(|s| s.version == db_version as usize)
                .with_context(|| format!("Unknown directory database version {}", db_version))?;
            DIRECTORY_VERSIONED_SCHEMAS[version_index]
                .validate(&conn)
                .with_context(|| {
                    format!(
                        "Directory database schema validation failed for version {}",
                        db_version
                    )
                })?;

            if db_version < current_schema_version {
                info!(
                    "Migrating directory database from version {} to {}",
                    db_version, current_schema_version
                );
                Self::migrate_if_needed(&mut conn, db_version as usize)?;
            }
        }

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Opens a private in-memory directory, used by tests and router
    /// construction without a database file.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        DIRECTORY_VERSIONED_SCHEMAS.last().unwrap().create(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn migrate_if_needed(conn: &mut Connection, from_version: usize) -> Result<()> {
        let tx = conn.transaction()?;
        let mut latest_from = from_version;
        for schema in DIRECTORY_VERSIONED_SCHEMAS.iter().skip(from_version) {
            if schema.version > from_version {
                info!(
                    "Running directory database migration from version {} to {}",
                    latest_from, schema.version
                );
                if let Some(migration_fn) = schema.migration {
                    migration_fn(&tx).with_context(|| {
                        format!("Failed to run migration to version {}", schema.version)
                    })?;
                }
                latest_from = schema.version;
            }
        }
        tx.execute(
            &format!("PRAGMA user_version = {}", BASE_DB_VERSION + latest_from),
            [],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn row_to_owner(row: &rusqlite::Row) -> rusqlite::Result<Owner> {
        Ok(Owner {
            id: row.get("id")?,
            name: row.get("name")?,
        })
    }

    fn row_to_pet(row: &rusqlite::Row) -> rusqlite::Result<Pet> {
        Ok(Pet {
            id: row.get("id")?,
            name: row.get("name")?,
            species: row.get("species")?,
            owner_id: row.get("owner_id")?,
        })
    }

    fn count(&self, table: &str) -> usize {
        let conn = self.conn.lock().unwrap();
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| {
            r.get::<_, i64>(0)
        })
        .unwrap_or(0) as usize
    }
}

impl DirectoryStore for SqliteDirectoryStore {
    fn get_owner(&self, id: i64) -> Result<Option<Owner>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT id, name FROM owners WHERE id = ?1",
            params![id],
            Self::row_to_owner,
        )
        .optional()
        .context("Owner lookup failed")
    }

    fn get_pet(&self, id: i64) -> Result<Option<Pet>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT id, name, species, owner_id FROM pets WHERE id = ?1",
            params![id],
            Self::row_to_pet,
        )
        .optional()
        .context("Pet lookup failed")
    }

    fn get_resolved_pet(&self, id: i64) -> Result<Option<ResolvedPet>> {
        let conn = self.conn.lock().unwrap();
        conn.query_row(
            "SELECT p.id, p.name, p.species, p.owner_id, o.name
             FROM pets p LEFT JOIN owners o ON o.id = p.owner_id
             WHERE p.id = ?1",
            params![id],
            |row| {
                let pet = Pet {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    species: row.get(2)?,
                    owner_id: row.get(3)?,
                };
                let owner = match (pet.owner_id, row.get::<_, Option<String>>(4)?) {
                    (Some(owner_id), Some(name)) => Some(Owner { id: owner_id, name }),
                    _ => None,
                };
                Ok(ResolvedPet { pet, owner })
            },
        )
        .optional()
        .context("Pet lookup failed")
    }

    fn get_resolved_owner(&self, id: i64) -> Result<Option<ResolvedOwner>> {
        let conn = self.conn.lock().unwrap();
        let owner = conn
            .query_row(
                "SELECT id, name FROM owners WHERE id = ?1",
                params![id],
                Self::row_to_owner,
            )
            .optional()
            .context("Owner lookup failed")?;
        let owner = match owner {
            Some(owner) => owner,
            None => return Ok(None),
        };

        let mut stmt = conn.prepare(
            "SELECT id, name, species, owner_id FROM pets WHERE owner_id = ?1 ORDER BY id",
        )?;
        let pets = stmt
            .query_map(params![id], Self::row_to_pet)?
            .collect::<Result<Vec<_>, _>>()
            .context("Owner pets lookup failed")?;

        Ok(Some(ResolvedOwner { owner, pets }))
    }

    fn get_owner_pets(&self, owner_id: i64) -> Result<Vec<Pet>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, name, species, owner_id FROM pets WHERE owner_id = ?1 ORDER BY id",
        )?;
        let pets = stmt
            .query_map(params![owner_id], Self::row_to_pet)?
            .collect::<Result<Vec<_>, _>>()
            .context("Owner pets lookup failed")?;
        Ok(pets)
    }

    fn list_owners(&self) -> Result<Vec<Owner>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, name FROM owners ORDER BY id")?;
        let owners = stmt
            .query_map([], Self::row_to_owner)?
            .collect::<Result<Vec<_>, _>>()
            .context("Owner listing failed")?;
        Ok(owners)
    }

    fn list_pets(&self) -> Result<Vec<Pet>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, name, species, owner_id FROM pets ORDER BY id")?;
        let pets = stmt
            .query_map([], Self::row_to_pet)?
            .collect::<Result<Vec<_>, _>>()
            .context("Pet listing failed")?;
        Ok(pets)
    }

    fn get_owners_count(&self) -> usize {
        self.count("owners")
    }

    fn get_pets_count(&self) -> usize {
        self.count("pets")
    }

    fn create_owner(&self, name: &str) -> Result<Owner> {
        let conn = self.conn.lock().unwrap();
        conn.execute("INSERT INTO owners (name) VALUES (?1)", params![name])
            .context("Failed to insert owner")?;
        Ok(Owner {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    fn create_pet(&self, name: &str, species: &str, owner_id: Option<i64>) -> Result<Pet> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO pets (name, species, owner_id) VALUES (?1, ?2, ?3)",
            params![name, species, owner_id],
        )
        .context("Failed to insert pet")?;
        Ok(Pet {
            id: conn.last_insert_rowid(),
            name: name.to_string(),
            species: species.to_string(),
            owner_id,
        })
    }

    fn set_pet_owner(&self, pet_id: i64, owner_id: Option<i64>) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        let updated = conn
            .execute(
                "UPDATE pets SET owner_id = ?1 WHERE id = ?2",
                params![owner_id, pet_id],
            )
            .context("Failed to update pet owner")?;
        if updated == 0 {
            bail!("No pet with id {}", pet_id);
        }
        Ok(())
    }

    fn delete_owner(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn
            .execute("DELETE FROM owners WHERE id = ?1", params![id])
            .context("Failed to delete owner")?;
        Ok(deleted > 0)
    }

    fn delete_pet(&self, id: i64) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let deleted = conn
            .execute("DELETE FROM pets WHERE id = ?1", params![id])
            .context("Failed to delete pet")?;
        Ok(deleted > 0)
    }
}
