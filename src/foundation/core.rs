use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::foundation::error::{PageError, PageResult};

/// Monotonic timestamp or interval in milliseconds.
///
/// The carousel never reads a wall clock; hosts pass `Millis` in, which keeps every timer
/// transition reproducible in tests.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Zero milliseconds.
    pub const ZERO: Self = Self(0);

    /// Convert a duration in seconds, rounding to the nearest millisecond.
    ///
    /// Returns `None` for non-finite or non-positive input.
    pub fn from_secs_f64(secs: f64) -> Option<Self> {
        if !secs.is_finite() || secs <= 0.0 {
            return None;
        }
        let ms = (secs * 1000.0).round();
        if ms < 1.0 || ms > u64::MAX as f64 {
            return None;
        }
        Some(Self(ms as u64))
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Millis {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Display locale.
///
/// Content is authored in the primary locale (Indonesian); English is the secondary locale and
/// is carried in `<field>En` companions.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Primary authoring locale.
    #[default]
    Id,
    /// Secondary (translated) locale.
    En,
}

impl Locale {
    pub const PRIMARY: Self = Self::Id;
    pub const SECONDARY: Self = Self::En;

    /// `true` for the translated locale.
    pub fn is_secondary(self) -> bool {
        self == Self::SECONDARY
    }

    /// BCP-47 language code, as used in `lang` attributes.
    pub fn code(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = PageError;

    /// Accepts bare language codes and region-qualified tags (`en-US`, `id_ID`).
    fn from_str(s: &str) -> PageResult<Self> {
        let lang = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "id" | "in" | "ind" => Ok(Self::Id),
            "en" | "eng" => Ok(Self::En),
            _ => Err(PageError::validation(format!("unsupported locale '{s}'"))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
