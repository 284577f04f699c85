//! Carbon footprint calculator
//!
//! Each operation multiplies an activity quantity by its fixed emission
//! factor and adds the result to the matching category subtotal. The total
//! is always the sum of the subtotals.

use common::models::{Breakdown, Category, DietType, EmissionFactor, EnergyType, TransportType};
use common::{Error, Result};
use tracing::debug;

/// The full emission factor table
pub fn emission_factors() -> Vec<EmissionFactor> {
    let transport = TransportType::ALL.iter().map(|t| EmissionFactor {
        category: Category::Transportation,
        activity: t.key(),
        factor: t.factor(),
    });
    let energy = EnergyType::ALL.iter().map(|e| EmissionFactor {
        category: Category::Energy,
        activity: e.key(),
        factor: e.factor(),
    });
    let food = DietType::ALL.iter().map(|d| EmissionFactor {
        category: Category::Food,
        activity: d.key(),
        factor: d.factor(),
    });

    transport.chain(energy).chain(food).collect()
}

/// Accumulates emissions across calls until reset
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    breakdown: Breakdown,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emissions for `distance` km travelled by `transport_type`
    pub fn calculate_transportation(&mut self, transport_type: &str, distance: f64) -> Result<f64> {
        let transport: TransportType = transport_type.parse()?;
        self.add_transportation(transport, distance)
    }

    /// Emissions for `consumption` kWh (or liters) of `energy_type`
    pub fn calculate_energy(&mut self, energy_type: &str, consumption: f64) -> Result<f64> {
        let energy: EnergyType = energy_type.parse()?;
        self.add_energy(energy, consumption)
    }

    /// Emissions for `days` days on `diet_type`
    pub fn calculate_food(&mut self, diet_type: &str, days: u32) -> Result<f64> {
        let diet: DietType = diet_type.parse()?;
        Ok(self.add_food(diet, days))
    }

    pub fn add_transportation(&mut self, transport: TransportType, distance: f64) -> Result<f64> {
        check_quantity(distance)?;
        let emissions = transport.factor() * distance;
        self.breakdown.transportation += emissions;
        debug!("{} x {} km = {} kg CO2e", transport.key(), distance, emissions);
        Ok(emissions)
    }

    pub fn add_energy(&mut self, energy: EnergyType, consumption: f64) -> Result<f64> {
        check_quantity(consumption)?;
        let emissions = energy.factor() * consumption;
        self.breakdown.energy += emissions;
        debug!("{} x {} = {} kg CO2e", energy.key(), consumption, emissions);
        Ok(emissions)
    }

    pub fn add_food(&mut self, diet: DietType, days: u32) -> f64 {
        let emissions = diet.factor() * f64::from(days);
        self.breakdown.food += emissions;
        debug!("{} x {} days = {} kg CO2e", diet.key(), days, emissions);
        emissions
    }

    pub fn get_total_emissions(&self) -> f64 {
        self.breakdown.total()
    }

    pub fn get_breakdown(&self) -> Breakdown {
        self.breakdown
    }

    pub fn reset(&mut self) {
        self.breakdown = Breakdown::default();
    }
}

fn check_quantity(quantity: f64) -> Result<()> {
    if quantity.is_finite() && quantity >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidQuantity(quantity))
    }
}
