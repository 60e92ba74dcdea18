//! Primary hue of the generated color palette.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hue angle in whole degrees, always in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct PrimaryHue(u16);

/// Out-of-range hue angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("hue {0} is out of range, must be in [0, 360)")]
pub struct HueRangeError(pub i64);

impl PrimaryHue {
    pub const MAX_EXCLUSIVE: u16 = 360;

    pub const fn new(degrees: u16) -> Result<Self, HueRangeError> {
        if degrees < Self::MAX_EXCLUSIVE {
            Ok(Self(degrees))
        } else {
            Err(HueRangeError(degrees as i64))
        }
    }

    #[inline]
    pub const fn degrees(self) -> u16 {
        self.0
    }
}

impl TryFrom<i64> for PrimaryHue {
    type Error = HueRangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .ok()
            .filter(|d| *d < Self::MAX_EXCLUSIVE)
            .map(Self)
            .ok_or(HueRangeError(value))
    }
}

impl From<PrimaryHue> for u16 {
    fn from(hue: PrimaryHue) -> Self {
        hue.0
    }
}

impl fmt::Display for PrimaryHue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(PrimaryHue::try_from(0_i64).unwrap().degrees(), 0);
        assert_eq!(PrimaryHue::try_from(212_i64).unwrap().degrees(), 212);
        assert_eq!(PrimaryHue::try_from(359_i64).unwrap().degrees(), 359);
        assert_eq!(PrimaryHue::try_from(360_i64), Err(HueRangeError(360)));
        assert_eq!(PrimaryHue::try_from(-1_i64), Err(HueRangeError(-1)));
        assert!(PrimaryHue::new(360).is_err());
    }

    #[test]
    fn test_serde() {
        let hue: PrimaryHue = serde_json::from_str("212").unwrap();
        assert_eq!(serde_json::to_string(&hue).unwrap(), "212");
        assert!(serde_json::from_str::<PrimaryHue>("360").is_err());
        assert!(serde_json::from_str::<PrimaryHue>("212.5").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(PrimaryHue::try_from(212_i64).unwrap().to_string(), "212°");
    }
}
