
pub mod chain;
pub mod macros;
pub mod registry;
pub mod types;
