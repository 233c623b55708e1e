//! Admin tool for the directory database.
//!
//! The serving process only reads; all record creation and mutation goes
//! through this binary.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pet_directory_server::directory_store::{DirectoryStore, SqliteDirectoryStore};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to the SQLite directory database file.
    #[clap(value_parser = parse_path)]
    pub directory_db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Creates an owner with the given name.
    AddOwner { name: String },

    /// Creates a pet, optionally assigned to an existing owner.
    AddPet {
        name: String,
        species: String,
        #[clap(long)]
        owner_id: Option<i64>,
    },

    /// Assigns a pet to an owner.
    Assign { pet_id: i64, owner_id: i64 },

    /// Clears a pet's owner assignment.
    Unassign { pet_id: i64 },

    /// Deletes an owner; their pets stay and become unassigned.
    DeleteOwner { id: i64 },

    /// Deletes a pet.
    DeletePet { id: i64 },

    /// Shows an owner and their pets.
    ShowOwner { id: i64 },

    /// Shows a pet and its owner.
    ShowPet { id: i64 },

    /// Lists all owners and pets.
    List,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();
    let store = SqliteDirectoryStore::new(&cli_args.directory_db)?;

    match cli_args.command {
        Command::AddOwner { name } => {
            let owner = store.create_owner(&name)?;
            println!("Created owner {} with id {}", owner.name, owner.id);
        }
        Command::AddPet {
            name,
            species,
            owner_id,
        } => {
            if let Some(owner_id) = owner_id {
                if store.get_owner(owner_id)?.is_none() {
                    bail!("No owner with id {}", owner_id);
                }
            }
            let pet = store.create_pet(&name, &species, owner_id)?;
            println!("Created pet {} with id {}", pet.name, pet.id);
        }
        Command::Assign { pet_id, owner_id } => {
            if store.get_owner(owner_id)?.is_none() {
                bail!("No owner with id {}", owner_id);
            }
            store.set_pet_owner(pet_id, Some(owner_id))?;
            println!("Assigned pet {} to owner {}", pet_id, owner_id);
        }
        Command::Unassign { pet_id } => {
            store.set_pet_owner(pet_id, None)?;
            println!("Cleared owner of pet {}", pet_id);
        }
        Command::DeleteOwner { id } => {
            if !store.delete_owner(id)? {
                bail!("No owner with id {}", id);
            }
            println!("Deleted owner {}", id);
        }
        Command::DeletePet { id } => {
            if !store.delete_pet(id)? {
                bail!("No pet with id {}", id);
            }
            println!("Deleted pet {}", id);
        }
        Command::ShowOwner { id } => match store.get_resolved_owner(id)? {
            Some(resolved) => println!("{}", serde_json::to_string_pretty(&resolved)?),
            None => bail!("No owner with id {}", id),
        },
        Command::ShowPet { id } => match store.get_resolved_pet(id)? {
            Some(resolved) => println!("{}", serde_json::to_string_pretty(&resolved)?),
            None => bail!("No pet with id {}", id),
        },
        Command::List => {
            let listing = serde_json::json!({
                "owners": store.list_owners()?,
                "pets": store.list_pets()?,
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }

    Ok(())
}
