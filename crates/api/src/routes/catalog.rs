//! Tip and mission catalog routes

use axum::{
    extract::{Path, Query, State},
    Json,
};
use common::models::{Category, Mission, Tip};
use footprint::catalog;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{ApiResult, OptionExt};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TipsQuery {
    pub category: Option<String>,
    /// Return a random sample instead of the full list
    #[serde(default)]
    pub random: bool,
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct MissionsQuery {
    pub category: Option<String>,
}

/// List tips. A category filter wins over random sampling.
pub async fn tips(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TipsQuery>,
) -> ApiResult<Json<Vec<Tip>>> {
    if let Some(category) = query.category {
        let category: Category = category.parse()?;
        return Ok(Json(catalog::tips_by_category(Some(category))));
    }

    if query.random || query.count.is_some() {
        let count = query.count.unwrap_or(state.config.tips_count);
        return Ok(Json(catalog::random_tips(count)));
    }

    Ok(Json(catalog::tips_by_category(None)))
}

pub async fn tip(Path(id): Path<u32>) -> ApiResult<Json<Tip>> {
    let tip = catalog::tip_by_id(id).not_found(format!("Tip {} not found", id))?;
    Ok(Json(tip))
}

pub async fn missions(Query(query): Query<MissionsQuery>) -> ApiResult<Json<Vec<Mission>>> {
    let missions = match query.category {
        Some(category) => catalog::missions_by_category(category.parse()?),
        None => catalog::missions(),
    };
    Ok(Json(missions))
}

pub async fn mission(Path(id): Path<u32>) -> ApiResult<Json<Mission>> {
    let mission = catalog::mission_by_id(id).not_found(format!("Mission {} not found", id))?;
    Ok(Json(mission))
}
