//! Tip-out allocation engine
//! Pure functions only: no I/O, no logging, no unwrap/panic, every input has a defined output

pub mod state;
pub mod math;
pub mod allocation;
pub mod helpers;
pub mod share;

// Re-export commonly used types
pub use rust_decimal::Decimal;
pub use state::*;
pub use allocation::*;
pub use helpers::*;
pub use share::*;
