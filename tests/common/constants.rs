//! Shared constants for end-to-end tests
//!
//! When the fixture data changes, update only this file.

// ============================================================================
// Fixture Owners
// ============================================================================

/// Owner with exactly one pet
pub const OWNER_BEN_ID: i64 = 1;
pub const OWNER_BEN_NAME: &str = "Ben";

/// Owner with no pets
pub const OWNER_ALICE_ID: i64 = 2;
pub const OWNER_ALICE_NAME: &str = "Alice";

/// Owner with two pets
pub const OWNER_CAROL_ID: i64 = 3;
pub const OWNER_CAROL_NAME: &str = "Carol";

// ============================================================================
// Fixture Pets
// ============================================================================

/// Ben's dog (pet and owner share the name on purpose)
pub const PET_BEN_ID: i64 = 1;
pub const PET_BEN_NAME: &str = "Ben";
pub const PET_BEN_SPECIES: &str = "Dog";

/// Pet without an owner
pub const PET_WHISKERS_ID: i64 = 2;
pub const PET_WHISKERS_NAME: &str = "Whiskers";
pub const PET_WHISKERS_SPECIES: &str = "Cat";

/// Carol's first pet
pub const PET_REX_NAME: &str = "Rex";
pub const PET_REX_SPECIES: &str = "Dog";

/// Carol's second pet
pub const PET_POLLY_NAME: &str = "Polly";
pub const PET_POLLY_SPECIES: &str = "Parrot";

/// An id no fixture record uses
pub const UNKNOWN_ID: i64 = 99;

// ============================================================================
// Timeouts
// ============================================================================

pub const REQUEST_TIMEOUT_SECS: u64 = 5;
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 25;
