//! Value ranges and propagated errors.
//!
//! Both are passive carriers. The model never checks that `min <= max`;
//! producers are responsible for range soundness.

use std::fmt;

/// Closed interval of values a program value may take.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies inside the interval, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "range({}, {})", self.min, self.max)
    }
}

/// Rounding error accumulated beyond what the numeric type alone implies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ErrorValue(pub f64);

impl ErrorValue {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for ErrorValue {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error({})", self.0)
    }
}
