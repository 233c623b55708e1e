//! HTML fragment rendering for the directory views.
//!
//! Renderers are plain functions over typed records and return the response
//! body only; status codes are the router's concern.

use crate::directory_store::{ResolvedOwner, ResolvedPet};

pub fn render_welcome() -> String {
    "<h1>Welcome to the pet/owner directory!</h1>".to_string()
}

/// Pet detail fragment: name, species and owner line. A pet without an
/// owner renders as unassigned.
pub fn render_pet(resolved: &ResolvedPet) -> String {
    let owner_line = match &resolved.owner {
        Some(owner) => format!("<h2>Pet Owner is {}</h2>", owner.name),
        None => "<h2>Pet Owner is unassigned</h2>".to_string(),
    };
    format!(
        "<h1>Information for {}</h1>\n<h2>Pet Species is {}</h2>\n{}",
        resolved.pet.name, resolved.pet.species, owner_line
    )
}

/// Owner detail fragment: owner name followed by one line per pet, or an
/// explicit no-pets notice.
pub fn render_owner(resolved: &ResolvedOwner) -> String {
    let mut body = format!("<h1>Information for {}</h1>", resolved.owner.name);
    if resolved.pets.is_empty() {
        body.push_str("\n<h2>Has no pets at this time.</h2>");
    } else {
        for pet in &resolved.pets {
            body.push_str(&format!(
                "\n<h2>Has pet {} named {}.</h2>",
                pet.species, pet.name
            ));
        }
    }
    body
}

pub fn render_not_found(kind: &str) -> String {
    format!("<h1>404 {} not found</h1>", kind)
}
