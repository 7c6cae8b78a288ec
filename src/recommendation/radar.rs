//! Radar chart scores comparing SQS and Kafka.
//!
//! Scores are illustrative constants on a 0-10 scale. Only Kafka's cost
//! efficiency reacts to the workload, improving at extreme volume where the
//! fixed cluster cost is amortized.

use serde::Serialize;

use super::rules::EXTREME_VOLUME_THRESHOLD;
use crate::requirements::Requirements;

pub const MAX_SCORE: u8 = 10;

const SQS_COST: u8 = 9;
const KAFKA_COST_AT_SCALE: u8 = 7;
const KAFKA_COST_DEFAULT: u8 = 4;

// (sqs, kafka) for the metrics whose scores never change
const THROUGHPUT: (u8, u8) = (7, 10);
const LATENCY: (u8, u8) = (8, 7);
const OPERATIONAL_SIMPLICITY: (u8, u8) = (10, 4);
const MESSAGE_REPLAY: (u8, u8) = (2, 10);
const DURABILITY: (u8, u8) = (8, 9);

/// One axis of the radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RadarEntry {
    pub metric: &'static str,
    pub sqs: u8,
    pub kafka: u8,
}

/// Metric names in chart order.
pub const METRICS: [&str; 6] = [
    "Cost Efficiency",
    "Throughput",
    "Latency",
    "Operational Simplicity",
    "Message Replay",
    "Durability",
];

pub fn radar_data(req: &Requirements) -> Vec<RadarEntry> {
    let kafka_cost = if req.messages_per_month > EXTREME_VOLUME_THRESHOLD {
        KAFKA_COST_AT_SCALE
    } else {
        KAFKA_COST_DEFAULT
    };

    let scores: [(u8, u8); 6] = [
        (SQS_COST, kafka_cost),
        THROUGHPUT,
        LATENCY,
        OPERATIONAL_SIMPLICITY,
        MESSAGE_REPLAY,
        DURABILITY,
    ];

    METRICS
        .iter()
        .zip(scores)
        .map(|(&metric, (sqs, kafka))| RadarEntry { metric, sqs, kafka })
        .collect()
}
