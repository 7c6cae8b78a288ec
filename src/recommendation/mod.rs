//! # Recommendation Engine
//!
//! Maps normalized [`Requirements`] to a service choice between Amazon SQS and
//! Apache Kafka on MSK, with an explanation and radar chart scores.
//!
//! The engine is pure and total: every input, including an all-zero request,
//! yields a recommendation. Decision order lives in [`rules`].

pub mod radar;
pub mod rules;

use serde::Serialize;
use strum::Display;
use tracing::debug;

use crate::requirements::Requirements;
use radar::RadarEntry;

/// The recommended managed messaging service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum ServiceChoice {
    #[serde(rename = "Amazon SQS")]
    #[strum(serialize = "Amazon SQS")]
    Sqs,
    #[serde(rename = "Apache Kafka (MSK)")]
    #[strum(serialize = "Apache Kafka (MSK)")]
    Kafka,
}

/// SQS queue flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
pub enum QueueType {
    #[serde(rename = "FIFO")]
    #[strum(serialize = "FIFO")]
    Fifo,
    Standard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub service: ServiceChoice,
    /// Set only when SQS is recommended.
    pub queue_type: Option<QueueType>,
    pub explanation: String,
    pub matched_rule: &'static str,
    pub radar_data: Vec<RadarEntry>,
}

pub fn recommend(req: &Requirements) -> Recommendation {
    let rule = rules::first_match(req);
    let queue_type = rule.outcome.queue_type();

    debug!(
        rule = rule.name,
        messages_per_month = req.messages_per_month,
        "Recommendation rule matched"
    );

    let explanation = match queue_type {
        Some(queue_type) => format!(
            "Recommended queue type: **{}**\n\n{}",
            queue_type, rule.rationale
        ),
        None => rule.rationale.to_string(),
    };

    Recommendation {
        service: rule.outcome.service(),
        queue_type,
        explanation,
        matched_rule: rule.name,
        radar_data: radar::radar_data(req),
    }
}
