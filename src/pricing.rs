//! Monthly cost estimates for Amazon SQS and Amazon MSK.
//!
//! Prices are us-east-1 list prices scaled by the regional multipliers in
//! [`crate::regions`]. SQS is priced per request; MSK is priced as a fixed
//! 3-broker cluster plus storage, so its cost is dominated by the fixed term.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::regions::{AwsRegion, RegionInfo};

/// SQS Standard price per million requests (us-east-1).
pub const SQS_PRICE_PER_MILLION: f64 = 0.40;
/// kafka.m5.large broker price per hour (us-east-1).
pub const MSK_BROKER_HOURLY_RATE: f64 = 0.21;
/// MSK storage price per GB-month (us-east-1).
pub const MSK_STORAGE_GB_MONTH: f64 = 0.10;
/// Minimum broker count for a highly available cluster.
pub const MSK_BROKER_COUNT: f64 = 3.0;
pub const HOURS_PER_MONTH: f64 = 730.0;

/// Above this volume the suggestion optimizes for MSK cost instead of SQS.
const HIGH_VOLUME_THRESHOLD: u64 = 100_000_000;

/// Fixed monthly message volumes used for the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeTier {
    OneMillion,
    TenMillion,
    HundredMillion,
}

impl VolumeTier {
    pub const ALL: [VolumeTier; 3] = [
        VolumeTier::OneMillion,
        VolumeTier::TenMillion,
        VolumeTier::HundredMillion,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VolumeTier::OneMillion => "1M",
            VolumeTier::TenMillion => "10M",
            VolumeTier::HundredMillion => "100M",
        }
    }

    pub fn millions(self) -> f64 {
        match self {
            VolumeTier::OneMillion => 1.0,
            VolumeTier::TenMillion => 10.0,
            VolumeTier::HundredMillion => 100.0,
        }
    }

    /// Estimated MSK storage for the tier.
    ///
    /// Assumes ~1KB messages, 7-day retention and replication factor 3. This is
    /// a lookup, not a function of the requested volume.
    pub fn storage_gb(self) -> f64 {
        match self {
            VolumeTier::OneMillion => 10.0,
            VolumeTier::TenMillion => 100.0,
            VolumeTier::HundredMillion => 500.0,
        }
    }
}

/// Unformatted monthly costs at each tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierCosts {
    pub one_million: f64,
    pub ten_million: f64,
    pub hundred_million: f64,
}

impl TierCosts {
    fn from_fn(f: impl Fn(VolumeTier) -> f64) -> Self {
        let [one_million, ten_million, hundred_million] = VolumeTier::ALL.map(f);
        Self {
            one_million,
            ten_million,
            hundred_million,
        }
    }

    pub fn get(&self, tier: VolumeTier) -> f64 {
        match tier {
            VolumeTier::OneMillion => self.one_million,
            VolumeTier::TenMillion => self.ten_million,
            VolumeTier::HundredMillion => self.hundred_million,
        }
    }

    pub fn formatted(&self) -> TierPrices {
        TierPrices {
            one_million: format_usd(self.one_million),
            ten_million: format_usd(self.ten_million),
            hundred_million: format_usd(self.hundred_million),
        }
    }
}

/// Costs for both services in one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceCosts {
    pub sqs: TierCosts,
    pub kafka: TierCosts,
}

/// Currency-formatted tier costs as returned to clients.
///
/// Serializes as a map keyed by tier label (`"1M"`, `"10M"`, `"100M"`).
#[derive(Debug, Clone, PartialEq)]
pub struct TierPrices {
    pub one_million: String,
    pub ten_million: String,
    pub hundred_million: String,
}

impl TierPrices {
    pub fn get(&self, tier: VolumeTier) -> &str {
        match tier {
            VolumeTier::OneMillion => &self.one_million,
            VolumeTier::TenMillion => &self.ten_million,
            VolumeTier::HundredMillion => &self.hundred_million,
        }
    }
}

impl Serialize for TierPrices {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(VolumeTier::ALL.len()))?;
        for tier in VolumeTier::ALL {
            map.serialize_entry(tier.label(), self.get(tier))?;
        }
        map.end()
    }
}

/// Price table for both services in a region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingData {
    pub sqs: TierPrices,
    pub kafka: TierPrices,
    pub region: RegionInfo,
}

/// Suggested region for a workload and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestRegionSuggestion {
    pub region: RegionInfo,
    pub reason: String,
}

/// Formats a dollar amount as `$<n>.<nn>`.
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", amount)
}

pub fn sqs_price_per_million(region: AwsRegion) -> f64 {
    SQS_PRICE_PER_MILLION * region.multiplier().sqs
}

/// Monthly cost of the 3-broker cluster, before storage.
pub fn msk_fixed_monthly_cost(region: AwsRegion) -> f64 {
    let hourly = MSK_BROKER_HOURLY_RATE * region.multiplier().broker;
    MSK_BROKER_COUNT * hourly * HOURS_PER_MONTH
}

pub fn msk_storage_gb_month(region: AwsRegion) -> f64 {
    MSK_STORAGE_GB_MONTH * region.multiplier().storage
}

pub fn service_costs(region: AwsRegion) -> ServiceCosts {
    let sqs_unit = sqs_price_per_million(region);
    let msk_fixed = msk_fixed_monthly_cost(region);
    let storage_rate = msk_storage_gb_month(region);

    ServiceCosts {
        sqs: TierCosts::from_fn(|tier| sqs_unit * tier.millions()),
        kafka: TierCosts::from_fn(|tier| msk_fixed + tier.storage_gb() * storage_rate),
    }
}

/// Builds the price table shown next to a recommendation.
pub fn compute_pricing(region: AwsRegion) -> PricingData {
    let costs = service_costs(region);
    PricingData {
        sqs: costs.sqs.formatted(),
        kafka: costs.kafka.formatted(),
        region: region.info(),
    }
}

/// Picks the cheapest catalog region for the workload's likely service.
///
/// High-volume workloads are compared on MSK cost at the 100M tier; everything
/// else on the SQS request price. Ties resolve to the earlier catalog entry.
pub fn best_region_for(messages_per_month: u64) -> BestRegionSuggestion {
    let high_volume = messages_per_month > HIGH_VOLUME_THRESHOLD;

    let cost_of = |region: AwsRegion| {
        if high_volume {
            service_costs(region).kafka.get(VolumeTier::HundredMillion)
        } else {
            sqs_price_per_million(region)
        }
    };

    let region = AwsRegion::all()
        .map(|region| (region, cost_of(region)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(region, _)| region)
        .unwrap_or_default();

    let reason = if high_volume {
        "Lowest MSK broker and storage multipliers, which dominate cost for high-volume workloads"
    } else {
        "Lowest SQS request price; SQS costs the same across most US regions"
    };

    BestRegionSuggestion {
        region: region.info(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_usd(s: &str) -> f64 {
        s.strip_prefix('$').unwrap().parse().unwrap()
    }

    #[test]
    fn us_east_1_price_table() {
        let pricing = compute_pricing(AwsRegion::UsEast1);
        assert_eq!(pricing.sqs.one_million, "$0.40");
        assert_eq!(pricing.sqs.ten_million, "$4.00");
        assert_eq!(pricing.sqs.hundred_million, "$40.00");
        assert_eq!(pricing.kafka.one_million, "$460.90");
        assert_eq!(pricing.kafka.ten_million, "$469.90");
        assert_eq!(pricing.kafka.hundred_million, "$509.90");
        assert_eq!(pricing.region.code, AwsRegion::UsEast1);
    }

    #[test]
    fn sqs_cost_is_linear_in_tier() {
        for region in AwsRegion::all() {
            let sqs = service_costs(region).sqs;
            assert!((sqs.ten_million - 10.0 * sqs.one_million).abs() < 1e-9);
            assert!((sqs.hundred_million - 100.0 * sqs.one_million).abs() < 1e-9);
        }
    }

    #[test]
    fn kafka_cost_increases_but_not_linearly() {
        for region in AwsRegion::all() {
            let kafka = service_costs(region).kafka;
            assert!(kafka.one_million < kafka.ten_million);
            assert!(kafka.ten_million < kafka.hundred_million);
            assert!(kafka.hundred_million < 10.0 * kafka.one_million);
        }
    }

    #[test]
    fn sa_east_1_scales_broker_and_storage_terms() {
        let base = service_costs(AwsRegion::UsEast1);
        let sa = service_costs(AwsRegion::SaEast1);

        let fixed_ratio =
            msk_fixed_monthly_cost(AwsRegion::SaEast1) / msk_fixed_monthly_cost(AwsRegion::UsEast1);
        let storage_ratio =
            msk_storage_gb_month(AwsRegion::SaEast1) / msk_storage_gb_month(AwsRegion::UsEast1);
        assert!((fixed_ratio - 1.5).abs() < 1e-12);
        assert!((storage_ratio - 1.5).abs() < 1e-12);

        for tier in VolumeTier::ALL {
            assert!((sa.kafka.get(tier) - 1.5 * base.kafka.get(tier)).abs() < 1e-9);
            assert!((sa.sqs.get(tier) - 1.5 * base.sqs.get(tier)).abs() < 1e-9);
        }

        let pricing = compute_pricing(AwsRegion::SaEast1);
        assert_eq!(pricing.kafka.one_million, "$691.35");
        assert_eq!(pricing.kafka.hundred_million, "$764.85");
        assert_eq!(pricing.sqs.ten_million, "$6.00");
    }

    #[test]
    fn broker_only_multiplier_leaves_storage_unscaled() {
        // eu-west-1 scales brokers by 1.048 but keeps us-east-1 storage pricing
        let base = service_costs(AwsRegion::UsEast1);
        let eu = service_costs(AwsRegion::EuWest1);
        let fixed_delta = msk_fixed_monthly_cost(AwsRegion::EuWest1)
            - msk_fixed_monthly_cost(AwsRegion::UsEast1);
        for tier in VolumeTier::ALL {
            assert!((eu.kafka.get(tier) - base.kafka.get(tier) - fixed_delta).abs() < 1e-9);
        }
    }

    #[test]
    fn formatted_costs_round_trip() {
        for region in AwsRegion::all() {
            let costs = service_costs(region);
            let pricing = compute_pricing(region);
            let pairs = [
                (&pricing.sqs.one_million, costs.sqs.one_million),
                (&pricing.sqs.ten_million, costs.sqs.ten_million),
                (&pricing.sqs.hundred_million, costs.sqs.hundred_million),
                (&pricing.kafka.one_million, costs.kafka.one_million),
                (&pricing.kafka.ten_million, costs.kafka.ten_million),
                (&pricing.kafka.hundred_million, costs.kafka.hundred_million),
            ];
            for (formatted, value) in pairs {
                let (_, decimals) = formatted.split_once('.').unwrap();
                assert_eq!(decimals.len(), 2, "{formatted}");
                assert!(
                    (parse_usd(formatted) - value).abs() <= 0.01,
                    "{formatted} vs {value}"
                );
            }
        }
    }

    #[test]
    fn tier_prices_serialize_with_tier_labels() {
        let pricing = compute_pricing(AwsRegion::UsWest2);
        let json = serde_json::to_value(&pricing).unwrap();
        for tier in VolumeTier::ALL {
            assert_eq!(json["sqs"][tier.label()], pricing.sqs.get(tier));
            assert_eq!(json["kafka"][tier.label()], pricing.kafka.get(tier));
        }
        assert_eq!(json["sqs"].as_object().unwrap().len(), 3);
        assert_eq!(json["region"]["code"], "us-west-2");

        let text = serde_json::to_string(&pricing.sqs).unwrap();
        assert_eq!(text, r#"{"1M":"$0.40","10M":"$4.00","100M":"$40.00"}"#);
    }

    #[test]
    fn best_region_resolves_to_us_east_1_on_both_branches() {
        let low = best_region_for(1_000_000);
        let high = best_region_for(500_000_000);
        assert_eq!(low.region.code, AwsRegion::UsEast1);
        assert_eq!(high.region.code, AwsRegion::UsEast1);
        assert!(low.reason.contains("SQS"));
        assert!(high.reason.contains("MSK"));
    }

    #[test]
    fn best_region_threshold_is_exclusive() {
        assert!(best_region_for(100_000_000).reason.contains("SQS"));
        assert!(best_region_for(100_000_001).reason.contains("MSK"));
    }
}
