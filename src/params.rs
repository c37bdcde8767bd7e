//! Strongly typed parameter types for the LIS3DSH driver.
//!
//! These types map directly to datasheet field encodings and are used across
//! [`InitConfig`](crate::config::InitConfig) and the high-level driver APIs.
//!
//! # Examples
//!
//! ```rust
//! use lis3dsh::params::{Axes, OutputDataRate};
//!
//! let odr = OutputDataRate::Hz25;
//! let axes = Axes::X | Axes::Y | Axes::Z;
//! assert_eq!(odr.bits() | axes.bits(), 0x47);
//! ```

use core::ops::{BitOr, BitOrAssign};

use modular_bitfield::prelude::Specifier;

/// Output data rate selections encoded in `CTRL_REG4[7:4]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 4]
pub enum OutputDataRate {
    /// Power-down mode.
    PowerDown = 0b0000,
    /// 3.125 Hz normal mode.
    Hz3_125 = 0b0001,
    /// 6.25 Hz normal mode.
    Hz6_25 = 0b0010,
    /// 12.5 Hz normal mode.
    Hz12_5 = 0b0011,
    /// 25 Hz normal mode.
    Hz25 = 0b0100,
    /// 50 Hz normal mode.
    Hz50 = 0b0101,
    /// 100 Hz normal mode.
    Hz100 = 0b0110,
    /// 400 Hz normal mode.
    Hz400 = 0b0111,
    /// 800 Hz normal mode.
    Hz800 = 0b1000,
    /// 1600 Hz normal mode.
    Hz1600 = 0b1001,
}

impl OutputDataRate {
    /// Returns the rate as it appears in `CTRL_REG4` (code shifted into bits 7:4).
    pub const fn bits(self) -> u8 {
        (self as u8) << 4
    }

    /// Returns the sampling frequency in millihertz (`0` when powered down).
    pub const fn millihertz(self) -> u32 {
        match self {
            Self::PowerDown => 0,
            Self::Hz3_125 => 3_125,
            Self::Hz6_25 => 6_250,
            Self::Hz12_5 => 12_500,
            Self::Hz25 => 25_000,
            Self::Hz50 => 50_000,
            Self::Hz100 => 100_000,
            Self::Hz400 => 400_000,
            Self::Hz800 => 800_000,
            Self::Hz1600 => 1_600_000,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OutputDataRate {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u32}mHz", self.millihertz())
    }
}

/// Set of axes enabled in `CTRL_REG4[2:0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Axes(u8);

impl Axes {
    /// No axis enabled.
    pub const NONE: Self = Self(0);
    /// X axis (bit 0).
    pub const X: Self = Self(1 << 0);
    /// Y axis (bit 1).
    pub const Y: Self = Self(1 << 1);
    /// Z axis (bit 2).
    pub const Z: Self = Self(1 << 2);
    /// All three axes.
    pub const XYZ: Self = Self(Self::X.0 | Self::Y.0 | Self::Z.0);

    /// Builds a set from raw enable bits, rejecting anything outside bits 2:0.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::XYZ.0 != 0 {
            None
        } else {
            Some(Self(bits))
        }
    }

    /// Returns the raw enable bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` when every axis in `other` is also in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` when no axis is enabled.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Axes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Axes {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Axes {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Axes({=u8:#05b})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odr_bits_match_ctrl_reg4_patterns() {
        assert_eq!(OutputDataRate::PowerDown.bits(), 0x00);
        assert_eq!(OutputDataRate::Hz3_125.bits(), 0x10);
        assert_eq!(OutputDataRate::Hz25.bits(), 0x40);
        assert_eq!(OutputDataRate::Hz1600.bits(), 0x90);
    }

    #[test]
    fn axes_combine_and_query() {
        let mut axes = Axes::X | Axes::Z;
        assert_eq!(axes.bits(), 0b101);
        assert!(axes.contains(Axes::X));
        assert!(!axes.contains(Axes::Y));

        axes |= Axes::Y;
        assert_eq!(axes, Axes::XYZ);
        assert!(Axes::NONE.is_empty());
    }

    #[test]
    fn axes_from_bits_rejects_upper_bits() {
        assert_eq!(Axes::from_bits(0x07), Some(Axes::XYZ));
        assert_eq!(Axes::from_bits(0x08), None);
        assert_eq!(Axes::from_bits(0x47), None);
    }
}
