//! Configuration module for the zone-warden engine.

mod rules;

// Public
pub mod constants;

// Re-export commonly used items
pub use rules::RulesConfig;
