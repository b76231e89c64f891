//! Predicted web crippling capacities.

use std::fmt;

use uom::si::f64::Force;
use uom::si::force::kilonewton;

/// Interior and end one-flange capacities for one specimen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Capacity {
    /// Interior One-Flange capacity.
    pub iof: Force,
    /// End One-Flange capacity.
    pub eof: Force,
}

impl Capacity {
    /// Build a capacity from raw model outputs in kilonewtons.
    ///
    /// # Examples
    /// ```
    /// use webcrippling::Capacity;
    ///
    /// let capacity = Capacity::from_kilonewtons(12.34, 8.06);
    /// assert_eq!(
    ///     capacity.to_string(),
    ///     "Predicted IOF: 12.3 kN\nPredicted EOF: 8.1 kN"
    /// );
    /// ```
    #[must_use]
    pub fn from_kilonewtons(iof: f64, eof: f64) -> Self {
        Self {
            iof: Force::new::<kilonewton>(iof),
            eof: Force::new::<kilonewton>(eof),
        }
    }

    /// Interior One-Flange capacity in kilonewtons.
    #[must_use]
    pub fn iof_kilonewtons(&self) -> f64 {
        self.iof.get::<kilonewton>()
    }

    /// End One-Flange capacity in kilonewtons.
    #[must_use]
    pub fn eof_kilonewtons(&self) -> f64 {
        self.eof.get::<kilonewton>()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Predicted IOF: {:.1} kN\nPredicted EOF: {:.1} kN",
            self.iof_kilonewtons(),
            self.eof_kilonewtons()
        )
    }
}
