//! HTTP route modules.
//!
//! - `compare`: the recommendation endpoint
//! - `catalog`: regions, per-region pricing and workload presets
//! - `health`: liveness probe

pub mod catalog;
pub mod compare;
pub mod health;
