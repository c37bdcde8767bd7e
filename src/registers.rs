//! Register map definitions for the LIS3DSH accelerometer.
#![allow(unused_parens)]

use modular_bitfield::prelude::*;

use crate::params::OutputDataRate;

/// A 7-bit register address.
///
/// Bit 7 of the byte clocked out on the bus is the read/write discriminator and is
/// owned by [`CommandByte`]; this type cannot carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegisterAddress(u8);

impl RegisterAddress {
    /// Largest encodable register address.
    pub const MAX: u8 = 0x7F;

    /// Wraps `address`, rejecting values that would collide with the direction bit.
    pub const fn new(address: u8) -> Option<Self> {
        if address > Self::MAX {
            None
        } else {
            Some(Self(address))
        }
    }

    /// Returns the raw 7-bit address.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the address `offset` registers further on, if it stays in range.
    pub const fn offset(self, offset: u8) -> Option<Self> {
        match self.0.checked_add(offset) {
            Some(address) => Self::new(address),
            None => None,
        }
    }
}

impl From<RegisterAddress> for u8 {
    fn from(value: RegisterAddress) -> Self {
        value.0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RegisterAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=u8:#04x}", self.0)
    }
}

/// Transfer direction encoded in bit 7 of the command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Specifier)]
#[repr(u8)]
#[bits = 1]
pub enum Direction {
    /// Host writes the following data bytes into the device.
    Write = 0,
    /// Device shifts register contents out after the command byte.
    Read = 1,
}

/// First byte of every SPI transaction: register address plus direction.
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandByte {
    // Register address (bits 6:0).
    pub address: B7,
    // Read/write discriminator (bit 7).
    pub direction: Direction,
}

impl CommandByte {
    /// Frames `register` for a transfer in `direction`.
    pub fn for_register(register: RegisterAddress, direction: Direction) -> Self {
        Self::new()
            .with_address(register.get())
            .with_direction(direction)
    }
}

impl From<CommandByte> for u8 {
    fn from(value: CommandByte) -> Self {
        value.into_bytes()[0]
    }
}

impl From<u8> for CommandByte {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

const fn reg(address: u8) -> RegisterAddress {
    RegisterAddress(address & RegisterAddress::MAX)
}

/// Register address of `WHO_AM_I`.
pub const REG_WHO_AM_I: RegisterAddress = reg(0x0F);
/// Register address of `OFF_X`.
pub const REG_OFF_X: RegisterAddress = reg(0x10);
/// Register address of `OFF_Y`.
pub const REG_OFF_Y: RegisterAddress = reg(0x11);
/// Register address of `OFF_Z`.
pub const REG_OFF_Z: RegisterAddress = reg(0x12);
/// Register address of `CTRL_REG4` (ODR and axis enables).
pub const REG_CTRL_REG4: RegisterAddress = reg(0x20);
/// Register address of `CTRL_REG1`.
pub const REG_CTRL_REG1: RegisterAddress = reg(0x21);
/// Register address of `CTRL_REG2`.
pub const REG_CTRL_REG2: RegisterAddress = reg(0x22);
/// Register address of `CTRL_REG3`.
pub const REG_CTRL_REG3: RegisterAddress = reg(0x23);
/// Register address of `CTRL_REG5`.
pub const REG_CTRL_REG5: RegisterAddress = reg(0x24);
/// Register address of `CTRL_REG6`.
pub const REG_CTRL_REG6: RegisterAddress = reg(0x25);
/// Register address of `STATUS`.
pub const REG_STATUS: RegisterAddress = reg(0x27);
/// Register address of `OUT_X_L`.
pub const REG_OUT_X_L: RegisterAddress = reg(0x28);
/// Register address of `OUT_X_H`.
pub const REG_OUT_X_H: RegisterAddress = reg(0x29);
/// Register address of `OUT_Y_L`.
pub const REG_OUT_Y_L: RegisterAddress = reg(0x2A);
/// Register address of `OUT_Y_H`.
pub const REG_OUT_Y_H: RegisterAddress = reg(0x2B);
/// Register address of `OUT_Z_L`.
pub const REG_OUT_Z_L: RegisterAddress = reg(0x2C);
/// Register address of `OUT_Z_H`.
pub const REG_OUT_Z_H: RegisterAddress = reg(0x2D);

/// Value reported by `WHO_AM_I` on a genuine LIS3DSH.
pub const EXPECTED_WHO_AM_I: u8 = 0x3F;

/// Mask of the per-axis new-data flags (XDA, YDA, ZDA) in `STATUS`.
pub const STATUS_XYZ_MASK: u8 = 0x07;

/// Access permissions encoded for each register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterAccess {
    /// Read-only register.
    ReadOnly,
    /// Write-only register.
    WriteOnly,
    /// Read/write register.
    ReadWrite,
}

/// Minimal metadata exposed by every register value type.
pub trait Register {
    /// Raw storage backing the register payload.
    type Raw: Copy;
    /// Register address as documented in the datasheet.
    const ADDRESS: RegisterAddress;
    /// Access permission classification.
    const ACCESS: RegisterAccess;
    /// Optional reset/default value defined by the datasheet.
    const RESET_VALUE: Option<Self::Raw>;
}

/// Bitfield representation of `CTRL_REG4` (address `0x20`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtrlReg4 {
    // X-axis enable (bit 0).
    pub x_enable: bool,
    // Y-axis enable (bit 1).
    pub y_enable: bool,
    // Z-axis enable (bit 2).
    pub z_enable: bool,
    // Block data update (bit 3).
    pub block_data_update: bool,
    // Output data rate selection (bits 7:4).
    pub odr: OutputDataRate,
}

impl From<u8> for CtrlReg4 {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<CtrlReg4> for u8 {
    fn from(value: CtrlReg4) -> Self {
        value.into_bytes()[0]
    }
}

/// Bitfield representation of the `STATUS` register (address `0x27`).
#[allow(unused_parens)]
#[bitfield]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    // X-axis new data available (bit 0).
    pub x_data_available: bool,
    // Y-axis new data available (bit 1).
    pub y_data_available: bool,
    // Z-axis new data available (bit 2).
    pub z_data_available: bool,
    // X, Y and Z new data available (bit 3).
    pub xyz_data_available: bool,
    // X-axis data overrun (bit 4).
    pub x_overrun: bool,
    // Y-axis data overrun (bit 5).
    pub y_overrun: bool,
    // Z-axis data overrun (bit 6).
    pub z_overrun: bool,
    // X, Y and Z data overrun (bit 7).
    pub xyz_overrun: bool,
}

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_bytes([value])
    }
}

impl From<Status> for u8 {
    fn from(value: Status) -> Self {
        value.into_bytes()[0]
    }
}

impl Status {
    /// Returns the XDA, YDA and ZDA flags as a 3-bit mask.
    pub fn new_data_flags(self) -> u8 {
        u8::from(self) & STATUS_XYZ_MASK
    }
}

impl Register for CtrlReg4 {
    type Raw = u8;
    const ADDRESS: RegisterAddress = REG_CTRL_REG4;
    const ACCESS: RegisterAccess = RegisterAccess::ReadWrite;
    const RESET_VALUE: Option<Self::Raw> = Some(0x07);
}

impl Register for Status {
    type Raw = u8;
    const ADDRESS: RegisterAddress = REG_STATUS;
    const ACCESS: RegisterAccess = RegisterAccess::ReadOnly;
    const RESET_VALUE: Option<Self::Raw> = None;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_address_rejects_direction_bit() {
        assert_eq!(RegisterAddress::new(0x7F).map(RegisterAddress::get), Some(0x7F));
        assert_eq!(RegisterAddress::new(0x80), None);
        assert_eq!(RegisterAddress::new(0xA8), None);
    }

    #[test]
    fn register_address_offset_stays_in_range() {
        assert_eq!(REG_OUT_X_L.offset(1), Some(REG_OUT_X_H));
        assert_eq!(REG_OUT_X_L.offset(4), Some(REG_OUT_Z_L));
        assert_eq!(RegisterAddress::new(0x7F).and_then(|r| r.offset(1)), None);
    }

    #[test]
    fn command_byte_places_direction_in_bit7() {
        let write = CommandByte::for_register(REG_CTRL_REG4, Direction::Write);
        let read = CommandByte::for_register(REG_STATUS, Direction::Read);

        assert_eq!(u8::from(write), 0x20);
        assert_eq!(u8::from(read), 0xA7);
        assert_eq!(CommandByte::from(0xA8).address(), 0x28);
        assert_eq!(CommandByte::from(0xA8).direction(), Direction::Read);
    }

    /// Validates that CTRL_REG4 bitfields match the datasheet layout.
    #[test]
    fn ctrl_reg4_layout_matches_datasheet() {
        let ctrl = CtrlReg4::new()
            .with_x_enable(true)
            .with_y_enable(true)
            .with_z_enable(true)
            .with_odr(OutputDataRate::Hz25);
        assert_eq!(u8::from(ctrl), 0x47);

        let decoded = CtrlReg4::from(0x97);
        assert_eq!(decoded.odr(), OutputDataRate::Hz1600);
        assert!(decoded.x_enable());
        assert!(decoded.y_enable());
        assert!(decoded.z_enable());
        assert!(!decoded.block_data_update());
    }

    #[test]
    fn register_metadata_matches_datasheet() {
        assert_eq!(CtrlReg4::ADDRESS, REG_CTRL_REG4);
        assert_eq!(CtrlReg4::ACCESS, RegisterAccess::ReadWrite);
        let reset = CtrlReg4::from(CtrlReg4::RESET_VALUE.unwrap());
        assert_eq!(reset.odr(), OutputDataRate::PowerDown);
        assert!(reset.x_enable() && reset.y_enable() && reset.z_enable());

        assert_eq!(Status::ADDRESS, REG_STATUS);
        assert_eq!(Status::ACCESS, RegisterAccess::ReadOnly);
        assert_eq!(Status::RESET_VALUE, None);
    }

    #[test]
    fn ctrl_reg4_reports_reserved_odr_codes() {
        assert!(CtrlReg4::from(0xA7).odr_or_err().is_err());
    }

    /// Validates that Status bitfields match the datasheet layout.
    #[test]
    fn status_layout_matches_datasheet() {
        let status = Status::from(0b1000_0100);
        assert!(!status.x_data_available());
        assert!(!status.y_data_available());
        assert!(status.z_data_available());
        assert!(!status.xyz_data_available());
        assert!(!status.x_overrun());
        assert!(!status.y_overrun());
        assert!(!status.z_overrun());
        assert!(status.xyz_overrun());
        assert_eq!(status.new_data_flags(), 0b100);
        assert_eq!(Status::from(0xF8).new_data_flags(), 0);
    }
}
