pub mod estimate;
pub mod measure;
pub mod pricing;

pub use crate::domain::model::{Estimate, EstimateRequest};
