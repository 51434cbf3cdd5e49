//! Strongly-typed primitives for the overlay transform model.
//!
//! Design goals:
//! - No raw `f64` where a unit matters (points vs device pixels)
//! - Invalid display scales unrepresentable past construction
//! - Range invariants (opacity) enforced at the type boundary

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is zero when non-zero required
    Zero,
    /// Value is negative when positive required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Zero => write!(f, "value is zero"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in points (1/72 inch, the native PDF unit)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Points(pub f64);

impl Points {
    pub const ZERO: Points = Points(0.0);

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Convert to device pixels at the given display scale
    #[inline]
    pub fn to_px(self, scale: DisplayScale) -> f64 {
        self.0 * scale.0
    }

    /// Check if this length is finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Points {
    type Output = Points;
    fn add(self, rhs: Points) -> Points { Points(self.0 + rhs.0) }
}
impl Sub for Points {
    type Output = Points;
    fn sub(self, rhs: Points) -> Points { Points(self.0 - rhs.0) }
}
impl Mul<f64> for Points {
    type Output = Points;
    fn mul(self, rhs: f64) -> Points { Points(self.0 * rhs) }
}
impl Neg for Points {
    type Output = Points;
    fn neg(self) -> Points { Points(-self.0) }
}
impl AddAssign for Points {
    fn add_assign(&mut self, rhs: Points) {
        self.0 += rhs.0;
    }
}
impl SubAssign for Points {
    fn sub_assign(&mut self, rhs: Points) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rotation angle in degrees. Unconstrained; never wrapped internally.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    /// Angle in radians (for matrix composition)
    #[inline]
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Wrap into [0, 360) for display purposes. The stored value keeps
    /// accumulating so repeated rotate gestures never lose continuity.
    pub fn normalized(self) -> Degrees {
        Degrees(self.0.rem_euclid(360.0))
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees { Degrees(self.0 + rhs.0) }
}
impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees { Degrees(self.0 - rhs.0) }
}
impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees { Degrees(-self.0) }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opacity in [0, 1]. Construction clamps, so an out-of-range value can
/// never be observed.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Opacity(f64);

impl Opacity {
    pub const OPAQUE: Opacity = Opacity(1.0);
    pub const TRANSPARENT: Opacity = Opacity(0.0);

    /// Create an opacity, clamping into [0, 1]. NaN maps to 0.
    #[inline]
    pub fn new(val: f64) -> Opacity {
        if val.is_nan() {
            Opacity(0.0)
        } else {
            Opacity(val.clamp(0.0, 1.0))
        }
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Opacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Points-to-device-pixels ratio supplied by the environment.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct DisplayScale(pub f64);

impl DisplayScale {
    /// Create a DisplayScale with validation (rejects NaN, infinite,
    /// zero, negative)
    pub fn try_new(val: f64) -> Result<Self, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val == 0.0 {
            Err(NumericError::Zero)
        } else if val < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(DisplayScale(val))
        }
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Default for DisplayScale {
    /// 1.0 in absence of a real display
    fn default() -> Self {
        DisplayScale(1.0)
    }
}

/// Flip axis for the overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Document slot tag: the unmodified base or the transformed overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Base,
    Overlay,
}

impl Layer {
    /// Lowercase name for user-facing messages
    pub fn name(self) -> &'static str {
        match self {
            Layer::Base => "base",
            Layer::Overlay => "overlay",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
