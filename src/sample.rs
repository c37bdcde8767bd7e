//! Raw acceleration sample decoding.

use crate::registers::{REG_OUT_X_L, REG_OUT_Y_L, REG_OUT_Z_L, RegisterAddress};

/// Number of output bytes per axis (low byte, then high byte).
pub const AXIS_BYTES: usize = 2;

/// One of the three measurement axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl Axis {
    /// Read order used when assembling a [`RawSample`].
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Address of the axis' low output byte; the high byte follows it.
    pub const fn low_register(self) -> RegisterAddress {
        match self {
            Self::X => REG_OUT_X_L,
            Self::Y => REG_OUT_Y_L,
            Self::Z => REG_OUT_Z_L,
        }
    }
}

/// Raw, unscaled acceleration triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawSample {
    /// X-axis reading.
    pub x: i16,
    /// Y-axis reading.
    pub y: i16,
    /// Z-axis reading.
    pub z: i16,
}

impl RawSample {
    /// Creates a sample from explicit axis values.
    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Returns the reading of a single axis.
    pub const fn axis(&self, axis: Axis) -> i16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub(crate) fn set_axis(&mut self, axis: Axis, value: i16) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }
}

impl From<RawSample> for [i16; 3] {
    fn from(sample: RawSample) -> Self {
        [sample.x, sample.y, sample.z]
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RawSample {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "RawSample {{ x: {=i16}, y: {=i16}, z: {=i16} }}", self.x, self.y, self.z);
    }
}

/// Combines an axis' output bytes into its two's complement value.
#[inline]
pub const fn assemble_axis(low: u8, high: u8) -> i16 {
    i16::from_le_bytes([low, high])
}
