//! Pasture models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A land parcel that can host one or more lots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pasture {
    pub id: Uuid,
    pub name: String,
}
