//! Footprint tracking across categories
//!
//! Runs a batch of activities through a fresh calculation and optionally
//! records the outcome on a user profile.

use chrono::{DateTime, Utc};
use common::models::Breakdown;
use common::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculator::Calculator;
use crate::profile::UserProfile;

/// Activities for one footprint calculation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityLog {
    /// (transport type, distance in km)
    #[serde(default)]
    pub transportation: Vec<(String, f64)>,
    /// (energy type, kWh or liters)
    #[serde(default)]
    pub energy: Vec<(String, f64)>,
    /// (diet type, days)
    #[serde(default)]
    pub food: Option<(String, u32)>,
}

/// Result of a footprint calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintReport {
    pub total_emissions_kg: f64,
    pub breakdown: Breakdown,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Tracker {
    calculator: Calculator,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate the footprint of `log`, starting from zero
    pub fn calculate(&mut self, log: &ActivityLog) -> Result<FootprintReport> {
        self.calculator.reset();

        for (transport_type, distance) in &log.transportation {
            self.calculator
                .calculate_transportation(transport_type, *distance)?;
        }

        for (energy_type, consumption) in &log.energy {
            self.calculator.calculate_energy(energy_type, *consumption)?;
        }

        if let Some((diet_type, days)) = &log.food {
            self.calculator.calculate_food(diet_type, *days)?;
        }

        Ok(FootprintReport {
            total_emissions_kg: self.calculator.get_total_emissions(),
            breakdown: self.calculator.get_breakdown(),
            date: Utc::now(),
        })
    }

    /// Calculate and append the result to the profile's emission history
    pub fn calculate_and_record(
        &mut self,
        log: &ActivityLog,
        profile: &mut UserProfile,
    ) -> Result<FootprintReport> {
        let report = self.calculate(log)?;
        profile.add_emission_record(report.date, report.total_emissions_kg, report.breakdown);

        info!(
            "📝 Recorded {:.2} kg CO2e for {}",
            report.total_emissions_kg,
            profile.user_id()
        );
        Ok(report)
    }
}
