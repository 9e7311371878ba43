//! Domain models for the Livestock Management Platform

mod lot;
mod pasture;
mod planning;
mod weighing;

pub use lot::*;
pub use pasture::*;
pub use planning::*;
pub use weighing::*;
