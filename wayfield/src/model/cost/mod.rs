mod cost_field;
mod cost_field_error;
mod custom_cost_config;
mod custom_cost_field;
mod observations;

pub use cost_field::CostField;
pub use cost_field_error::CostFieldError;
pub use custom_cost_config::CustomCostConfig;
pub use custom_cost_field::CustomCostField;
pub use observations::CostObservations;
