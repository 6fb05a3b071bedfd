//! Labeled three-axis physical quantities.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical unit of a [`Triad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TriadUnit {
    /// Acceleration in m/s².
    MetersPerSquaredSecond,
    /// Angular speed in rad/s.
    RadiansPerSecond,
    /// Magnetic flux density in T.
    Tesla,
}

impl TriadUnit {
    /// Returns the unit symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::MetersPerSquaredSecond => "m/s²",
            Self::RadiansPerSecond => "rad/s",
            Self::Tesla => "T",
        }
    }
}

/// A three-axis physical quantity in double precision.
///
/// # Example
///
/// ```
/// use sensor_measurements::{Triad, TriadUnit};
///
/// let triad = Triad::new(3.0, 4.0, 0.0, TriadUnit::MetersPerSquaredSecond);
/// assert!((triad.norm() - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Triad {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
    /// Unit shared by all components.
    pub unit: TriadUnit,
}

impl Triad {
    /// Creates a new triad.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, unit: TriadUnit) -> Self {
        Self { x, y, z, unit }
    }

    /// Returns the components as an array.
    #[must_use]
    pub const fn values(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns the Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Builds a triad from single-precision axes plus optional per-axis offsets.
    ///
    /// Missing offsets count as zero. `scale` converts the sum into `unit`.
    pub(crate) fn from_axes(
        axes: [f32; 3],
        offsets: [Option<f32>; 3],
        scale: f64,
        unit: TriadUnit,
    ) -> Self {
        let component =
            |i: usize| (f64::from(axes[i]) + f64::from(offsets[i].unwrap_or(0.0))) * scale;
        Self::new(component(0), component(1), component(2), unit)
    }
}
