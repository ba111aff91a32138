//! Seeding log models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry in the seeding log: a crop put in the ground on a date.
///
/// Created when the operator seeds a field; read-only afterwards (entries
/// are only ever deleted, never edited).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedingRecord {
    pub id: Uuid,
    pub crop: String,
    pub seeding_date: NaiveDate,
    #[serde(default)]
    pub acres: Decimal,
    #[serde(default)]
    pub field_name: String,
}
