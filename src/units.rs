//! Display-unit conversion and selection for datastore sizes.
//!
//! All raw magnitudes are held in megabytes, the natural unit reported by
//! the inventory listing endpoint.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Megabytes per gigabyte.
pub const MB_PER_GB: f64 = 1024.0;
/// Megabytes per terabyte.
pub const MB_PER_TB: f64 = 1024.0 * 1024.0;

/// A display unit for datastore sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Mb,
    Gb,
    Tb,
}

impl Unit {
    /// Number of megabytes in one of this unit.
    #[inline]
    pub fn divisor(self) -> f64 {
        match self {
            Unit::Mb => 1.0,
            Unit::Gb => MB_PER_GB,
            Unit::Tb => MB_PER_TB,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Unit::Mb => "MB",
            Unit::Gb => "GB",
            Unit::Tb => "TB",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MB" => Ok(Unit::Mb),
            "GB" => Ok(Unit::Gb),
            "TB" => Ok(Unit::Tb),
            _ => Err(Error::UnknownUnit(s.to_string())),
        }
    }
}

/// A requested display unit: either a fixed unit or auto-scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitRequest {
    Fixed(Unit),
    /// Pick the largest unit that keeps the displayed magnitude >= 1.
    Auto,
}

impl FromStr for UnitRequest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("HUMAN") {
            Ok(UnitRequest::Auto)
        } else {
            s.parse().map(UnitRequest::Fixed)
        }
    }
}

/// Convert a size held in megabytes to the given unit.
#[inline]
pub fn convert_mb(size_mb: f64, unit: Unit) -> f64 {
    size_mb / unit.divisor()
}

/// Resolve the display unit for a size in megabytes.
///
/// An absent request returns the size unconverted in MB. `Auto` checks TB
/// first, then GB, and falls back to MB.
pub fn select_unit(size_mb: f64, request: Option<UnitRequest>) -> (f64, Unit) {
    match request {
        None => (size_mb, Unit::Mb),
        Some(UnitRequest::Fixed(unit)) => (convert_mb(size_mb, unit), unit),
        Some(UnitRequest::Auto) => {
            let unit = if size_mb >= MB_PER_TB {
                Unit::Tb
            } else if size_mb >= MB_PER_GB {
                Unit::Gb
            } else {
                Unit::Mb
            };
            (convert_mb(size_mb, unit), unit)
        }
    }
}
