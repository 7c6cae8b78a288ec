//! AWS region catalog.
//!
//! The catalog is a fixed set of 9 regions. Each entry carries display data for
//! the front-end and the multipliers applied to us-east-1 base prices.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// An AWS region supported by the pricing calculator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum AwsRegion {
    #[default]
    #[serde(rename = "us-east-1")]
    #[strum(serialize = "us-east-1")]
    UsEast1,
    #[serde(rename = "us-east-2")]
    #[strum(serialize = "us-east-2")]
    UsEast2,
    #[serde(rename = "us-west-1")]
    #[strum(serialize = "us-west-1")]
    UsWest1,
    #[serde(rename = "us-west-2")]
    #[strum(serialize = "us-west-2")]
    UsWest2,
    #[serde(rename = "eu-west-1")]
    #[strum(serialize = "eu-west-1")]
    EuWest1,
    #[serde(rename = "eu-central-1")]
    #[strum(serialize = "eu-central-1")]
    EuCentral1,
    #[serde(rename = "ap-southeast-1")]
    #[strum(serialize = "ap-southeast-1")]
    ApSoutheast1,
    #[serde(rename = "ap-northeast-1")]
    #[strum(serialize = "ap-northeast-1")]
    ApNortheast1,
    #[serde(rename = "sa-east-1")]
    #[strum(serialize = "sa-east-1")]
    SaEast1,
}

/// Display data for a region, echoed back in pricing responses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegionInfo {
    pub code: AwsRegion,
    pub name: &'static str,
    pub location: &'static str,
}

/// Scaling factors applied to us-east-1 base prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionalMultiplier {
    pub sqs: f64,
    pub broker: f64,
    pub storage: f64,
}

impl AwsRegion {
    /// All regions in catalog order.
    pub fn all() -> impl Iterator<Item = AwsRegion> {
        Self::iter()
    }

    pub fn info(self) -> RegionInfo {
        let (name, location) = match self {
            AwsRegion::UsEast1 => ("US East (N. Virginia)", "🇺🇸 Virginia"),
            AwsRegion::UsEast2 => ("US East (Ohio)", "🇺🇸 Ohio"),
            AwsRegion::UsWest1 => ("US West (N. California)", "🇺🇸 California"),
            AwsRegion::UsWest2 => ("US West (Oregon)", "🇺🇸 Oregon"),
            AwsRegion::EuWest1 => ("Europe (Ireland)", "🇮🇪 Ireland"),
            AwsRegion::EuCentral1 => ("Europe (Frankfurt)", "🇩🇪 Germany"),
            AwsRegion::ApSoutheast1 => ("Asia Pacific (Singapore)", "🇸🇬 Singapore"),
            AwsRegion::ApNortheast1 => ("Asia Pacific (Tokyo)", "🇯🇵 Japan"),
            AwsRegion::SaEast1 => ("South America (São Paulo)", "🇧🇷 Brazil"),
        };
        RegionInfo {
            code: self,
            name,
            location,
        }
    }

    pub fn multiplier(self) -> RegionalMultiplier {
        let (sqs, broker, storage) = match self {
            AwsRegion::UsEast1 | AwsRegion::UsEast2 | AwsRegion::UsWest2 => (1.0, 1.0, 1.0),
            AwsRegion::UsWest1 => (1.0, 1.048, 1.025),
            AwsRegion::EuWest1 => (1.0, 1.048, 1.0),
            AwsRegion::EuCentral1 => (1.0, 1.095, 1.05),
            AwsRegion::ApSoutheast1 => (1.0, 1.095, 1.025),
            AwsRegion::ApNortheast1 => (1.0, 1.143, 1.05),
            AwsRegion::SaEast1 => (1.5, 1.5, 1.5),
        };
        RegionalMultiplier {
            sqs,
            broker,
            storage,
        }
    }
}

/// Region info for every catalog entry, in catalog order.
pub fn catalog() -> Vec<RegionInfo> {
    AwsRegion::all().map(AwsRegion::info).collect()
}
