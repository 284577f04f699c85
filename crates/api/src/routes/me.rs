//! Routes for the authenticated user's own profile

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use common::models::{EmissionRecord, MissionRecord};
use footprint::{catalog, ActivityLog, FootprintReport, Tracker, UserStatistics};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::error::{ApiError, ApiResult, OptionExt};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    30
}

#[derive(Debug, Serialize)]
pub struct CompletionResponse {
    pub mission: MissionRecord,
    pub total_points: u64,
}

/// Resolve the bearer token in `Authorization` to a user id
fn authenticate(state: &AppState, headers: &HeaderMap) -> ApiResult<String> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| {
            warn!("Missing bearer token");
            ApiError::Unauthorized("Missing bearer token".to_string())
        })?;

    Ok(auth::verify_token(token, &state.config.auth_secret)?)
}

/// Full profile export
pub async fn profile(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<serde_json::Value>> {
    let user_id = authenticate(&state, &headers)?;
    let profile = state.profiles.get(&user_id).await?;
    Ok(Json(profile.to_dict()?))
}

pub async fn stats(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<Json<UserStatistics>> {
    let user_id = authenticate(&state, &headers)?;
    let profile = state.profiles.get(&user_id).await?;
    Ok(Json(profile.get_statistics()))
}

/// Emission records from the last `days` days (default 30)
pub async fn emissions(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<PeriodQuery>,
) -> ApiResult<Json<Vec<EmissionRecord>>> {
    let user_id = authenticate(&state, &headers)?;
    let profile = state.profiles.get(&user_id).await?;

    let records = profile
        .get_emissions_by_period(query.days)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(records))
}

/// Calculate a footprint and append it to the user's history
pub async fn record_footprint(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(log): Json<ActivityLog>,
) -> ApiResult<(StatusCode, Json<FootprintReport>)> {
    let user_id = authenticate(&state, &headers)?;

    let report = state
        .profiles
        .update(&user_id, |profile| {
            Tracker::new().calculate_and_record(&log, profile)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(report)))
}

pub async fn start_mission(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(mission_id): Path<u32>,
) -> ApiResult<(StatusCode, Json<MissionRecord>)> {
    let user_id = authenticate(&state, &headers)?;
    let mission =
        catalog::mission_by_id(mission_id).not_found(format!("Mission {} not found", mission_id))?;

    let record = state
        .profiles
        .update(&user_id, |profile| {
            profile.start_mission(&mission);
            profile
                .active_missions()
                .last()
                .cloned()
                .ok_or_else(|| common::Error::Internal("started mission missing".to_string()))
        })
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn complete_mission(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(mission_id): Path<u32>,
) -> ApiResult<Json<CompletionResponse>> {
    let user_id = authenticate(&state, &headers)?;

    let response = state
        .profiles
        .update(&user_id, |profile| {
            if !profile.complete_mission(mission_id) {
                return Err(common::Error::NotFound(format!(
                    "Active mission {}",
                    mission_id
                )));
            }
            let mission = profile
                .completed_missions()
                .last()
                .cloned()
                .ok_or_else(|| common::Error::Internal("completed mission missing".to_string()))?;

            Ok(CompletionResponse {
                mission,
                total_points: profile.total_points(),
            })
        })
        .await?;

    Ok(Json(response))
}
