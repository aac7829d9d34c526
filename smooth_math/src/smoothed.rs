//! Output values that may not be computable yet.

use std::fmt;

/// One position of a smoothed sequence.
///
/// Methods that need a warm-up (moving average, single exponential
/// smoothing) report the positions before enough observations are available
/// as [`Smoothed::Undefined`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Smoothed {
    /// A computed value
    Defined(f64),
    /// No value can be computed at this position
    #[default]
    Undefined,
}

impl Smoothed {
    /// The computed value, if any
    pub fn value(self) -> Option<f64> {
        match self {
            Smoothed::Defined(value) => Some(value),
            Smoothed::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Smoothed::Defined(_))
    }

    pub fn is_undefined(self) -> bool {
        !self.is_defined()
    }

    /// The computed value, or `default` for an undefined position
    pub fn unwrap_or(self, default: f64) -> f64 {
        self.value().unwrap_or(default)
    }
}

impl From<Option<f64>> for Smoothed {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Smoothed::Undefined, Smoothed::Defined)
    }
}

impl From<Smoothed> for Option<f64> {
    fn from(value: Smoothed) -> Self {
        value.value()
    }
}

impl fmt::Display for Smoothed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Smoothed::Defined(value) => write!(f, "{}", value),
            Smoothed::Undefined => f.write_str("undefined"),
        }
    }
}

/// Collect the defined values of a sequence, dropping undefined positions.
pub fn defined_values(values: &[Smoothed]) -> Vec<f64> {
    values.iter().filter_map(|value| value.value()).collect()
}
