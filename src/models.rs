//! Response models and workload presets.
//!
//! Field names are camelCase to match what the browser front-end consumes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::pricing::{BestRegionSuggestion, PricingData};
use crate::recommendation::radar::RadarEntry;
use crate::recommendation::{QueueType, Recommendation, ServiceChoice};

// ============================================================================
// Response Models
// ============================================================================

/// Full response for `POST /compare`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub recommendation: ServiceChoice,
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queue_type: Option<QueueType>,
    pub matched_rule: &'static str,
    pub radar_data: Vec<RadarEntry>,
    pub pricing: PricingData,
    pub best_region: BestRegionSuggestion,
    /// Lets the client file the result in its saved-analysis history.
    pub analysis_id: Uuid,
    pub generated_at: DateTime<Utc>,
}

impl ComparisonResult {
    pub fn new(
        recommendation: Recommendation,
        pricing: PricingData,
        best_region: BestRegionSuggestion,
    ) -> Self {
        Self {
            recommendation: recommendation.service,
            explanation: recommendation.explanation,
            queue_type: recommendation.queue_type,
            matched_rule: recommendation.matched_rule,
            radar_data: recommendation.radar_data,
            pricing,
            best_region,
            analysis_id: Uuid::new_v4(),
            generated_at: Utc::now(),
        }
    }
}

/// Response for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

// ============================================================================
// Presets
// ============================================================================

/// A canned workload, shaped exactly like a `/compare` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadPreset {
    #[serde(skip)]
    pub key: &'static str,
    pub messages_per_month: &'static str,
    pub require_ordering: &'static str,
    pub message_loss_tolerance: &'static str,
    pub replay_needed: &'static str,
    pub monthly_budget: &'static str,
    pub environment: &'static str,
}

/// Starting points offered by the comparison form, keyed by preset name.
pub fn presets() -> Vec<WorkloadPreset> {
    vec![
        WorkloadPreset {
            key: "microservices",
            messages_per_month: "5000000",
            require_ordering: "no",
            message_loss_tolerance: "medium",
            replay_needed: "no",
            monthly_budget: "200",
            environment: "aws",
        },
        WorkloadPreset {
            key: "eventStreaming",
            messages_per_month: "50000000",
            require_ordering: "yes",
            message_loss_tolerance: "low",
            replay_needed: "yes",
            monthly_budget: "1000",
            environment: "aws",
        },
        WorkloadPreset {
            key: "costEffective",
            messages_per_month: "1000000",
            require_ordering: "no",
            message_loss_tolerance: "high",
            replay_needed: "no",
            monthly_budget: "50",
            environment: "aws",
        },
        WorkloadPreset {
            key: "highThroughput",
            messages_per_month: "100000000",
            require_ordering: "yes",
            message_loss_tolerance: "low",
            replay_needed: "yes",
            monthly_budget: "2000",
            environment: "aws",
        },
    ]
}
