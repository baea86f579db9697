//! Cardiovascular risk scoring and longitudinal trend detection.
//!
//! The domain logic lives in [`scores::risk`] and [`scores::trend`]; both are
//! pure functions over borrowed [`schema::v1::Vitals`] /
//! [`schema::v1::HealthRecord`] values. The remaining modules form the batch
//! pipeline behind the `cardio-sentinel` binary.

pub mod cli;
pub mod config;
pub mod ctx;
pub mod io;
pub mod math;
pub mod pipeline;
pub mod schema;
pub mod scores;
