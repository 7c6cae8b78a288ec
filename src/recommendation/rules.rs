//! Ordered decision rules for the recommendation engine.
//!
//! Rules are evaluated top to bottom and the first match wins. Hard
//! requirements (replay, ordering with replay, extreme volume, portability)
//! come before soft preferences (simplicity, budget, durability). The last
//! rule always matches.

use super::{QueueType, ServiceChoice};
use crate::requirements::{LossTolerance, Requirements};

/// Replay above this volume calls for a retained log.
pub const REPLAY_VOLUME_THRESHOLD: u64 = 10_000_000;
/// Above this volume a fixed-cost cluster beats per-request pricing.
pub const EXTREME_VOLUME_THRESHOLD: u64 = 100_000_000;
/// Multicloud workloads above this volume should stay portable.
pub const MULTICLOUD_VOLUME_THRESHOLD: u64 = 5_000_000;
/// SQS-leaning rules apply below this volume; the durability rule above it.
pub const QUEUE_VOLUME_CEILING: u64 = 50_000_000;
/// Monthly budgets (USD) below this favor the SQS free tier.
pub const TIGHT_BUDGET_USD: u64 = 100;

/// What a rule recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Kafka,
    Sqs(QueueType),
}

impl Outcome {
    pub fn service(self) -> ServiceChoice {
        match self {
            Outcome::Kafka => ServiceChoice::Kafka,
            Outcome::Sqs(_) => ServiceChoice::Sqs,
        }
    }

    pub fn queue_type(self) -> Option<QueueType> {
        match self {
            Outcome::Kafka => None,
            Outcome::Sqs(queue_type) => Some(queue_type),
        }
    }
}

type Predicate = fn(&Requirements) -> bool;

/// A named guard with the outcome and rationale it produces.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub applies: Predicate,
    pub outcome: Outcome,
    pub rationale: &'static str,
}

impl Rule {
    const fn new(
        name: &'static str,
        applies: Predicate,
        outcome: Outcome,
        rationale: &'static str,
    ) -> Self {
        Self {
            name,
            applies,
            outcome,
            rationale,
        }
    }
}

// ============================================================================
// Hard requirements
// ============================================================================

fn replay_at_scale(req: &Requirements) -> bool {
    req.replay_needed && req.messages_per_month > REPLAY_VOLUME_THRESHOLD
}

fn ordered_replay(req: &Requirements) -> bool {
    req.require_ordering && req.replay_needed
}

fn extreme_volume(req: &Requirements) -> bool {
    req.messages_per_month > EXTREME_VOLUME_THRESHOLD
}

fn multicloud_portability(req: &Requirements) -> bool {
    req.is_multicloud()
        && (req.messages_per_month > MULTICLOUD_VOLUME_THRESHOLD || req.replay_needed)
}

// ============================================================================
// Soft preferences
// ============================================================================

fn ordered_queue(req: &Requirements) -> bool {
    req.require_ordering && !req.replay_needed && req.messages_per_month < QUEUE_VOLUME_CEILING
}

fn tight_budget(req: &Requirements) -> bool {
    req.monthly_budget < TIGHT_BUDGET_USD && req.messages_per_month < QUEUE_VOLUME_CEILING
}

fn durable_high_volume(req: &Requirements) -> bool {
    req.loss_tolerance == Some(LossTolerance::Low)
        && req.messages_per_month > QUEUE_VOLUME_CEILING
}

fn always(_: &Requirements) -> bool {
    true
}

static RULES: [Rule; 8] = [
    Rule::new(
        "replay_at_scale",
        replay_at_scale,
        Outcome::Kafka,
        "You need message replay at high volume. Kafka keeps a durable, replayable log with \
         retention you control, up to unlimited, so consumers can rewind to any offset. That \
         makes it the natural fit for event sourcing and audit trails.",
    ),
    Rule::new(
        "ordered_replay",
        ordered_replay,
        Outcome::Kafka,
        "You need strict ordering together with replay. Kafka guarantees order within each \
         partition and lets consumers re-read the log at any time, the foundation for CQRS \
         and event streaming architectures.",
    ),
    Rule::new(
        "extreme_volume",
        extreme_volume,
        Outcome::Kafka,
        "At more than 100 million messages per month, per-request pricing adds up quickly. \
         An MSK cluster has a fixed infrastructure cost, so the price per message keeps \
         falling as volume grows.",
    ),
    Rule::new(
        "multicloud_portability",
        multicloud_portability,
        Outcome::Kafka,
        "For a multicloud environment Kafka is the portable option. MSK is managed by AWS, \
         but the same Kafka APIs run on any provider or on-premises, which keeps migration \
         and cross-cloud replication straightforward.",
    ),
    Rule::new(
        "ordered_queue",
        ordered_queue,
        Outcome::Sqs(QueueType::Fifo),
        "You need ordering without replay. SQS FIFO queues deliver messages exactly once and \
         in order, handling up to ~70,000 messages per second with batching in high \
         throughput mode (vs ~3,000 per second for standard FIFO). That is far simpler to \
         operate than a Kafka cluster.",
    ),
    Rule::new(
        "tight_budget",
        tight_budget,
        Outcome::Sqs(QueueType::Standard),
        "With a monthly budget under $100, SQS is the economical choice. The first million \
         requests each month are free and you pay only for what you use, while an MSK \
         cluster costs several hundred dollars a month before the first message.",
    ),
    Rule::new(
        "durable_high_volume",
        durable_high_volume,
        Outcome::Kafka,
        "High volume with low tolerance for message loss favors Kafka. Its replicated log \
         acknowledges writes only after they reach multiple brokers across availability \
         zones, giving stronger durability guarantees for critical data.",
    ),
    Rule::new(
        "default",
        always,
        Outcome::Sqs(QueueType::Standard),
        "SQS fits these requirements best. It is fully managed and serverless with virtually \
         unlimited throughput and at-least-once delivery, and you pay per use with no brokers \
         to run.",
    ),
];

/// All rules in evaluation order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Returns the first rule whose guard matches.
pub fn first_match(req: &Requirements) -> &'static Rule {
    let rules = rules();
    rules
        .iter()
        .find(|rule| (rule.applies)(req))
        .unwrap_or(&rules[rules.len() - 1])
}
