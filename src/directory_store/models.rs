use serde::{Deserialize, Serialize};

/// A person that may have zero or more pets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: i64,
    pub name: String,
}

/// An animal with at most one owner. `owner_id`, when present, always
/// resolves to an existing owner (enforced by the database).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: String,
    pub owner_id: Option<i64>,
}

/// A pet with its owner relationship resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPet {
    pub pet: Pet,
    pub owner: Option<Owner>,
}

/// An owner with their pets resolved, in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOwner {
    pub owner: Owner,
    pub pets: Vec<Pet>,
}
