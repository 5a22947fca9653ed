use crate::ranking::{MedalField, MedalTally};
use serde::{Deserialize, Serialize};

/// A record as delivered by a medal source.
///
/// Any extra fields in the payload, including a supplied `total`, are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawMedalCount {
    pub code: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

/// Medal counts for one participant, with the derived total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalCount {
    pub code: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    /// Sum of the three counts; wide enough that it never overflows.
    pub total: u64,
}

impl From<RawMedalCount> for MedalCount {
    fn from(raw: RawMedalCount) -> Self {
        let total = u64::from(raw.gold) + u64::from(raw.silver) + u64::from(raw.bronze);
        Self {
            code: raw.code,
            gold: raw.gold,
            silver: raw.silver,
            bronze: raw.bronze,
            total,
        }
    }
}

impl MedalTally for MedalCount {
    fn code(&self) -> &str {
        &self.code
    }

    fn count(&self, field: MedalField) -> u64 {
        match field {
            MedalField::Gold => u64::from(self.gold),
            MedalField::Silver => u64::from(self.silver),
            MedalField::Bronze => u64::from(self.bronze),
            MedalField::Total => self.total,
        }
    }
}

/// Derive the total of every fetched record.
#[must_use]
pub fn derive_totals(records: Vec<RawMedalCount>) -> Vec<MedalCount> {
    records.into_iter().map(MedalCount::from).collect()
}
