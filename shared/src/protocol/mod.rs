pub mod control_rule;
pub mod error;
pub mod parameter;
pub mod registry;
