//! Request boundary for workload requirements.
//!
//! The front-end posts loosely typed form values: numbers as strings, booleans
//! as `"yes"`/`"no"`. [`normalize`] turns that untrusted JSON object into a
//! strictly typed [`Requirements`] so the recommendation engine never compares
//! strings.
//!
//! Numeric fields are deliberately lenient: anything that does not start with
//! an integer becomes 0 rather than an error, so a sloppy form value still
//! yields a recommendation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

use crate::error::AppError;
use crate::regions::AwsRegion;

/// How much message loss the workload can tolerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LossTolerance {
    Low,
    Medium,
    High,
}

/// Where the workload runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Aws,
    Multicloud,
}

/// Normalized workload requirements consumed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Requirements {
    pub messages_per_month: u64,
    pub require_ordering: bool,
    pub replay_needed: bool,
    /// `None` when the client sent nothing or an unrecognized value.
    pub loss_tolerance: Option<LossTolerance>,
    pub environment: Environment,
    pub monthly_budget: u64,
    pub region: AwsRegion,
}

impl Requirements {
    pub fn is_multicloud(&self) -> bool {
        self.environment == Environment::Multicloud
    }
}

/// Builds [`Requirements`] from a request body object.
///
/// Only the region can fail: an explicit code outside the catalog is rejected
/// instead of being priced with an arbitrary multiplier.
pub fn normalize(body: &Map<String, Value>) -> Result<Requirements, AppError> {
    let region = match body.get("region") {
        None | Some(Value::Null) => AwsRegion::default(),
        Some(Value::String(code)) => {
            AwsRegion::from_str(code).map_err(|_| AppError::UnknownRegion(code.clone()))?
        }
        Some(other) => return Err(AppError::UnknownRegion(other.to_string())),
    };

    Ok(Requirements {
        messages_per_month: lenient_count(body.get("messagesPerMonth")),
        require_ordering: is_yes(body.get("requireOrdering")),
        replay_needed: is_yes(body.get("replayNeeded")),
        loss_tolerance: body
            .get("messageLossTolerance")
            .and_then(Value::as_str)
            .and_then(|s| LossTolerance::from_str(s).ok()),
        environment: match body.get("environment").and_then(Value::as_str) {
            Some("multicloud") => Environment::Multicloud,
            _ => Environment::Aws,
        },
        monthly_budget: lenient_count(body.get("monthlyBudget")),
        region,
    })
}

/// Form booleans are the literal string `"yes"`; everything else is false.
fn is_yes(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if s == "yes")
}

/// Reads a non-negative count, substituting 0 for anything unusable.
pub fn lenient_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(s)) => parse_leading_int(s)
            .map_or(0, |n| u64::try_from(n.max(0)).unwrap_or(u64::MAX)),
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        _ => 0,
    }
}

/// Parses the integer prefix of `s`: optional whitespace, optional sign, then
/// digits. Trailing characters are ignored, so `"12abc"` is 12 and `"1e6"` is 1.
fn parse_leading_int(s: &str) -> Option<i128> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // Saturate absurdly long inputs instead of failing
    let magnitude = rest[..digits_end].parse::<i128>().unwrap_or(i128::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
