//! Workload comparison route.
//!
//! POST /compare - Recommend SQS or Kafka for a workload and price both

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tracing::info;

use crate::error::AppError;
use crate::models::ComparisonResult;
use crate::pricing::{best_region_for, compute_pricing};
use crate::recommendation::recommend;
use crate::requirements::normalize;

/// Build the compare router.
pub fn router() -> Router {
    Router::new().route("/compare", post(compare))
}

/// Compare the two services for the posted workload.
///
/// 1. Parse the raw body as a JSON object
/// 2. Normalize form values into typed requirements
/// 3. Price both services in the requested region and suggest a region
/// 4. Run the recommendation rules and merge everything into one response
///
/// The body is read as bytes, and the extractor's own rejection (oversized or
/// unreadable body) is taken as a value, so every bad payload surfaces as the
/// same `{ error }` response instead of axum's plain-text rejection.
async fn compare(
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ComparisonResult>, AppError> {
    let body = body.map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;
    let payload: Value = serde_json::from_slice(&body)?;
    let form = payload
        .as_object()
        .ok_or_else(|| AppError::MalformedBody("expected a JSON object".to_string()))?;

    let requirements = normalize(form)?;
    let pricing = compute_pricing(requirements.region);
    let best_region = best_region_for(requirements.messages_per_month);
    let recommendation = recommend(&requirements);

    info!(
        "Recommended {} for {} messages/month in {} (rule: {})",
        recommendation.service,
        requirements.messages_per_month,
        requirements.region,
        recommendation.matched_rule
    );

    Ok(Json(ComparisonResult::new(
        recommendation,
        pricing,
        best_region,
    )))
}
