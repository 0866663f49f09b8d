pub mod param_value;
pub mod snapshot;
pub mod telemetry;
