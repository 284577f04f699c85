//! Calculator routes
//!
//! Every request gets its own calculator; nothing is shared between calls.

use axum::Json;
use common::models::{Category, EmissionFactor};
use footprint::{emission_factors, ActivityLog, Calculator, FootprintReport, Tracker};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;

#[derive(Debug, Deserialize)]
pub struct TransportRequest {
    pub transport_type: String,
    pub distance_km: f64,
}

#[derive(Debug, Deserialize)]
pub struct EnergyRequest {
    pub energy_type: String,
    pub consumption: f64,
}

#[derive(Debug, Deserialize)]
pub struct FoodRequest {
    pub diet_type: String,
    pub days: u32,
}

#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub emissions_kg: f64,
    pub category: Category,
}

pub async fn transport(Json(req): Json<TransportRequest>) -> ApiResult<Json<CalculationResponse>> {
    let emissions_kg =
        Calculator::new().calculate_transportation(&req.transport_type, req.distance_km)?;

    Ok(Json(CalculationResponse {
        emissions_kg,
        category: Category::Transportation,
    }))
}

pub async fn energy(Json(req): Json<EnergyRequest>) -> ApiResult<Json<CalculationResponse>> {
    let emissions_kg = Calculator::new().calculate_energy(&req.energy_type, req.consumption)?;

    Ok(Json(CalculationResponse {
        emissions_kg,
        category: Category::Energy,
    }))
}

pub async fn food(Json(req): Json<FoodRequest>) -> ApiResult<Json<CalculationResponse>> {
    let emissions_kg = Calculator::new().calculate_food(&req.diet_type, req.days)?;

    Ok(Json(CalculationResponse {
        emissions_kg,
        category: Category::Food,
    }))
}

/// Calculate a multi-category footprint without recording it
pub async fn footprint(Json(log): Json<ActivityLog>) -> ApiResult<Json<FootprintReport>> {
    let report = Tracker::new().calculate(&log)?;
    debug!("Footprint: {:.2} kg CO2e", report.total_emissions_kg);
    Ok(Json(report))
}

pub async fn factors() -> Json<Vec<EmissionFactor>> {
    Json(emission_factors())
}
