//! Growth and transfer analytics for the Livestock Management Platform
//!
//! Turns raw, unordered weighing and transfer events into consistent time
//! series and a correctly-directed transfer ledger. Every function here is
//! a pure function of its inputs: no I/O, no hidden state, no clock —
//! "today" is always a parameter. Callers own caching and invalidation.
//!
//! Malformed or sparse input never fails a computation; views degrade to
//! defined empty or zero results instead.

pub mod breed;
pub mod growth;
pub mod ledger;
pub mod series;
pub mod snapshot;

pub use breed::*;
pub use growth::*;
pub use ledger::*;
pub use series::*;
pub use snapshot::*;

/// Label substituted for lot or pasture references that cannot be resolved
pub const UNKNOWN_LABEL: &str = "Unknown";
