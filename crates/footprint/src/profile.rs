//! User progress tracking

use chrono::{DateTime, Duration, Utc};
use common::models::{Breakdown, EmissionRecord, Mission, MissionRecord, MissionStatus};
use common::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A user's emission history, points and missions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    user_id: String,
    name: String,
    #[serde(default)]
    total_points: u64,
    #[serde(default)]
    emissions_history: Vec<EmissionRecord>,
    #[serde(default)]
    completed_missions: Vec<MissionRecord>,
    #[serde(default)]
    active_missions: Vec<MissionRecord>,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

/// Statistics summary for a profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStatistics {
    pub user_id: String,
    pub name: String,
    pub total_points: u64,
    pub total_emissions_kg: f64,
    pub total_co2_saved_kg: f64,
    /// Emissions minus savings; negative when missions outweigh the footprint
    pub net_impact_kg: f64,
    pub missions_completed: usize,
    pub active_missions: usize,
    pub recent_30_days_emissions: f64,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            total_points: 0,
            emissions_history: Vec::new(),
            completed_missions: Vec::new(),
            active_missions: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_points(&self) -> u64 {
        self.total_points
    }

    pub fn emissions_history(&self) -> &[EmissionRecord] {
        &self.emissions_history
    }

    pub fn active_missions(&self) -> &[MissionRecord] {
        &self.active_missions
    }

    pub fn completed_missions(&self) -> &[MissionRecord] {
        &self.completed_missions
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn add_emission_record(
        &mut self,
        date: DateTime<Utc>,
        total_emissions_kg: f64,
        breakdown: Breakdown,
    ) {
        self.emissions_history.push(EmissionRecord {
            date,
            total_emissions_kg,
            breakdown,
        });
    }

    /// Start a mission. Starting the same mission twice tracks it twice.
    pub fn start_mission(&mut self, mission: &Mission) {
        info!("🎯 {} started mission {} ({})", self.user_id, mission.id, mission.title);
        self.active_missions
            .push(MissionRecord::start(mission, Utc::now()));
    }

    /// Complete the first active record for `mission_id`.
    ///
    /// Returns false and leaves the profile untouched when nothing matches.
    pub fn complete_mission(&mut self, mission_id: u32) -> bool {
        let Some(index) = self
            .active_missions
            .iter()
            .position(|m| m.mission_id == mission_id)
        else {
            return false;
        };

        let mut record = self.active_missions.remove(index);
        record.status = MissionStatus::Completed;
        record.completed_at = Some(Utc::now());
        self.total_points += u64::from(record.points);

        info!(
            "🏆 {} completed mission {} (+{} points)",
            self.user_id, record.mission_id, record.points
        );
        self.completed_missions.push(record);
        true
    }

    pub fn get_total_emissions(&self) -> f64 {
        self.emissions_history
            .iter()
            .map(|r| r.total_emissions_kg)
            .sum()
    }

    /// Records dated within the last `days` days.
    ///
    /// A look-back past the representable range returns every record; a
    /// look-ahead past it returns none.
    pub fn get_emissions_by_period(&self, days: i64) -> Vec<&EmissionRecord> {
        let cutoff = Duration::try_days(days).and_then(|d| Utc::now().checked_sub_signed(d));
        match cutoff {
            Some(cutoff) => self.emissions_since(cutoff),
            None if days > 0 => self.emissions_history.iter().collect(),
            None => Vec::new(),
        }
    }

    pub fn emissions_since(&self, cutoff: DateTime<Utc>) -> Vec<&EmissionRecord> {
        self.emissions_history
            .iter()
            .filter(|r| r.date >= cutoff)
            .collect()
    }

    pub fn get_total_co2_saved(&self) -> f64 {
        self.completed_missions
            .iter()
            .map(|m| m.co2_savings_kg)
            .sum()
    }

    pub fn get_statistics(&self) -> UserStatistics {
        let total_emissions_kg = self.get_total_emissions();
        let total_co2_saved_kg = self.get_total_co2_saved();
        let recent_30_days_emissions = self
            .get_emissions_by_period(30)
            .iter()
            .map(|r| r.total_emissions_kg)
            .sum();

        UserStatistics {
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            total_points: self.total_points,
            total_emissions_kg,
            total_co2_saved_kg,
            net_impact_kg: total_emissions_kg - total_co2_saved_kg,
            missions_completed: self.completed_missions.len(),
            active_missions: self.active_missions.len(),
            recent_30_days_emissions,
            created_at: self.created_at,
        }
    }

    pub fn to_dict(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Rebuild a profile; anything but `user_id` and `name` may be omitted
    pub fn from_dict(data: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(data)?)
    }
}
