//! Read-only reference data for the front-end.
//!
//! GET /regions - Region catalog in display order
//! GET /pricing - Price table for one region (`?region=<code>`, default us-east-1)
//! GET /presets - Canned workloads that can be posted to /compare as-is

use std::str::FromStr;

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::AppError;
use crate::models::presets;
use crate::pricing::{compute_pricing, PricingData};
use crate::regions::{catalog, AwsRegion, RegionInfo};

/// Build the catalog router.
pub fn router() -> Router {
    Router::new()
        .route("/regions", get(list_regions))
        .route("/pricing", get(get_pricing))
        .route("/presets", get(list_presets))
}

#[derive(Debug, Deserialize)]
pub struct PricingQuery {
    pub region: Option<String>,
}

async fn list_regions() -> Json<Vec<RegionInfo>> {
    Json(catalog())
}

async fn get_pricing(Query(query): Query<PricingQuery>) -> Result<Json<PricingData>, AppError> {
    let region = match query.region {
        Some(code) => AwsRegion::from_str(&code).map_err(|_| AppError::UnknownRegion(code))?,
        None => AwsRegion::default(),
    };
    debug!("Pricing requested for {}", region);
    Ok(Json(compute_pricing(region)))
}

/// Presets keyed by name, matching the form's preset picker.
async fn list_presets() -> Result<Json<Map<String, Value>>, AppError> {
    let mut by_key = Map::new();
    for preset in presets() {
        let body = serde_json::to_value(&preset)
            .map_err(|e| AppError::Internal(format!("preset {}: {}", preset.key, e)))?;
        by_key.insert(preset.key.to_string(), body);
    }
    Ok(Json(by_key))
}
