//! Domain models for the crash-game verification engine

pub mod params;
pub mod round;
pub mod ruleset;
pub mod tick;

// Re-exports
pub use params::{ParamsError, PathParams};
pub use round::RoundRecord;
pub use ruleset::Ruleset;
pub use tick::Tick;
