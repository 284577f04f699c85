//! API routes

pub mod accounts;
pub mod calculate;
pub mod catalog;
pub mod health;
pub mod me;
