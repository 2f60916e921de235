//! Measured quantities with asymmetric errors.

use std::fmt;

/// A measured mass in MeV with upper and lower errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    pub value: f64,
    pub upper_error: f64,
    pub lower_error: f64,
}

impl Mass {
    pub fn new(value: f64, upper_error: f64, lower_error: f64) -> Self {
        Self {
            value,
            upper_error,
            lower_error,
        }
    }

    /// The single error when upper and lower agree, `None` when the
    /// errors are asymmetric.
    pub fn symmetric_error(&self) -> Option<f64> {
        (self.upper_error == self.lower_error).then_some(self.upper_error)
    }
}

impl fmt::Display for Mass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symmetric_error() {
            Some(err) => write!(f, "({} ± {}) MeV", self.value, err),
            None => write!(
                f,
                "({} + {} - {}) MeV",
                self.value, self.upper_error, self.lower_error
            ),
        }
    }
}

/// A measured decay width in MeV with upper and lower errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayWidth {
    pub value: f64,
    pub upper_error: f64,
    pub lower_error: f64,
}

impl DecayWidth {
    pub fn new(value: f64, upper_error: f64, lower_error: f64) -> Self {
        Self {
            value,
            upper_error,
            lower_error,
        }
    }

    pub fn symmetric_error(&self) -> Option<f64> {
        (self.upper_error == self.lower_error).then_some(self.upper_error)
    }
}

impl fmt::Display for DecayWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symmetric_error() {
            Some(err) => write!(f, "({} ± {}) MeV", self.value, err),
            None => write!(
                f,
                "({} + {} - {}) MeV",
                self.value, self.upper_error, self.lower_error
            ),
        }
    }
}
