//! Domain models

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// Activity category shared by the calculator and the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transportation,
    Energy,
    Food,
    /// Only used by catalog entries; never carries emissions
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transportation => "transportation",
            Self::Energy => "energy",
            Self::Food => "food",
            Self::General => "general",
        }
    }

    /// Noun used when reporting an unknown activity in this category
    pub fn activity_label(&self) -> &'static str {
        match self {
            Self::Transportation => "transport",
            Self::Energy => "energy",
            Self::Food => "diet",
            Self::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transportation" => Ok(Self::Transportation),
            "energy" => Ok(Self::Energy),
            "food" => Ok(Self::Food),
            "general" => Ok(Self::General),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// Means of transport, factors in kg CO2e per km
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportType {
    CarGasoline,
    CarDiesel,
    CarElectric,
    Bus,
    Train,
    PlaneShort,
    PlaneLong,
    Bike,
    Walk,
}

impl TransportType {
    pub const ALL: [TransportType; 9] = [
        Self::CarGasoline,
        Self::CarDiesel,
        Self::CarElectric,
        Self::Bus,
        Self::Train,
        Self::PlaneShort,
        Self::PlaneLong,
        Self::Bike,
        Self::Walk,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::CarGasoline => "car_gasoline_km",
            Self::CarDiesel => "car_diesel_km",
            Self::CarElectric => "car_electric_km",
            Self::Bus => "bus_km",
            Self::Train => "train_km",
            Self::PlaneShort => "plane_short_km",
            Self::PlaneLong => "plane_long_km",
            Self::Bike => "bike_km",
            Self::Walk => "walk_km",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Self::CarGasoline => 0.192,
            Self::CarDiesel => 0.171,
            Self::CarElectric => 0.053,
            Self::Bus => 0.089,
            Self::Train => 0.041,
            Self::PlaneShort => 0.255, // flights < 1500km
            Self::PlaneLong => 0.195,
            Self::Bike | Self::Walk => 0.0,
        }
    }
}

impl FromStr for TransportType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base = s.strip_suffix("_km").unwrap_or(s);
        match base {
            "car_gasoline" => Ok(Self::CarGasoline),
            "car_diesel" => Ok(Self::CarDiesel),
            "car_electric" => Ok(Self::CarElectric),
            "bus" => Ok(Self::Bus),
            "train" => Ok(Self::Train),
            "plane_short" => Ok(Self::PlaneShort),
            "plane_long" => Ok(Self::PlaneLong),
            "bike" => Ok(Self::Bike),
            "walk" => Ok(Self::Walk),
            _ => Err(Error::UnknownActivityType {
                category: Category::Transportation,
                activity: s.to_string(),
            }),
        }
    }
}

/// Household energy sources, factors per kWh or per liter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyType {
    Electricity,
    NaturalGas,
    HeatingOil,
}

impl EnergyType {
    pub const ALL: [EnergyType; 3] = [Self::Electricity, Self::NaturalGas, Self::HeatingOil];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Electricity => "electricity_kwh",
            Self::NaturalGas => "natural_gas_kwh",
            Self::HeatingOil => "heating_oil_liter",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Self::Electricity => 0.233, // global grid average
            Self::NaturalGas => 0.185,
            Self::HeatingOil => 2.52,
        }
    }
}

impl FromStr for EnergyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electricity_kwh" | "electricity" => Ok(Self::Electricity),
            "natural_gas_kwh" | "natural_gas" => Ok(Self::NaturalGas),
            "heating_oil_liter" | "heating_oil" => Ok(Self::HeatingOil),
            _ => Err(Error::UnknownActivityType {
                category: Category::Energy,
                activity: s.to_string(),
            }),
        }
    }
}

/// Diet profiles, factors in kg CO2e per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietType {
    MeatHeavy,
    MeatMedium,
    MeatLow,
    Pescatarian,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub const ALL: [DietType; 6] = [
        Self::MeatHeavy,
        Self::MeatMedium,
        Self::MeatLow,
        Self::Pescatarian,
        Self::Vegetarian,
        Self::Vegan,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::MeatHeavy => "meat_heavy_day",
            Self::MeatMedium => "meat_medium_day",
            Self::MeatLow => "meat_low_day",
            Self::Pescatarian => "pescatarian_day",
            Self::Vegetarian => "vegetarian_day",
            Self::Vegan => "vegan_day",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Self::MeatHeavy => 7.19,
            Self::MeatMedium => 5.63,
            Self::MeatLow => 4.67,
            Self::Pescatarian => 3.91,
            Self::Vegetarian => 3.81,
            Self::Vegan => 2.89,
        }
    }
}

impl FromStr for DietType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base = s.strip_suffix("_day").unwrap_or(s);
        match base {
            "meat_heavy" => Ok(Self::MeatHeavy),
            "meat_medium" => Ok(Self::MeatMedium),
            "meat_low" => Ok(Self::MeatLow),
            "pescatarian" => Ok(Self::Pescatarian),
            "vegetarian" => Ok(Self::Vegetarian),
            "vegan" => Ok(Self::Vegan),
            _ => Err(Error::UnknownActivityType {
                category: Category::Food,
                activity: s.to_string(),
            }),
        }
    }
}

/// One row of the emission factor table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmissionFactor {
    pub category: Category,
    pub activity: &'static str,
    /// kg CO2e per unit
    pub factor: f64,
}

/// Per-category emission subtotals in kg CO2e
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    #[serde(default)]
    pub transportation: f64,
    #[serde(default)]
    pub energy: f64,
    #[serde(default)]
    pub food: f64,
}

impl Breakdown {
    pub fn total(&self) -> f64 {
        self.transportation + self.energy + self.food
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A sustainability tip from the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tip {
    pub id: u32,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Impact,
}

/// A mission definition from the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mission {
    pub id: u32,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_days: u32,
    pub points: u32,
    pub co2_savings_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionStatus {
    Active,
    Completed,
}

/// A mission a user has started, copied from its definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRecord {
    pub mission_id: u32,
    pub title: String,
    pub started_at: DateTime<Utc>,
    pub duration_days: u32,
    pub points: u32,
    pub co2_savings_kg: f64,
    pub status: MissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl MissionRecord {
    pub fn start(mission: &Mission, started_at: DateTime<Utc>) -> Self {
        Self {
            mission_id: mission.id,
            title: mission.title.to_string(),
            started_at,
            duration_days: mission.duration_days,
            points: mission.points,
            co2_savings_kg: mission.co2_savings_kg,
            status: MissionStatus::Active,
            completed_at: None,
        }
    }
}

/// A recorded footprint calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionRecord {
    pub date: DateTime<Utc>,
    pub total_emissions_kg: f64,
    pub breakdown: Breakdown,
}
