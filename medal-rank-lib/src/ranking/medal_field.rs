use strum::{AsRefStr, Display, EnumIter};

/// A numeric column of a medal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum MedalField {
    Gold,
    Silver,
    Bronze,
    Total,
}

/// Anything that can be ranked: a unique code plus a count per [`MedalField`].
pub trait MedalTally {
    fn code(&self) -> &str;

    fn count(&self, field: MedalField) -> u64;
}
