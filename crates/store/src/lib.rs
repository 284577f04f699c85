//! In-memory storage for Respira+
//!
//! Profiles sit behind the [`ProfileRepository`] trait so a persistent
//! backend can replace [`MemoryRepository`] without touching callers.

pub mod accounts;
pub mod profiles;

pub use accounts::{Account, Accounts};
pub use profiles::{MemoryRepository, ProfileRepository, Profiles};
