//! Emission calculation, catalog and user progress tracking

pub mod calculator;
pub mod catalog;
pub mod profile;
pub mod tracker;

#[cfg(test)]
mod calculator_test;

pub use calculator::{emission_factors, Calculator};
pub use profile::{UserProfile, UserStatistics};
pub use tracker::{ActivityLog, FootprintReport, Tracker};
