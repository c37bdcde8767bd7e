//! Error handling primitives for the LIS3DSH driver.

use crate::registers::RegisterAddress;

/// Crate-wide result type alias.
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// Error variants produced by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Any error reported by the underlying bus interface.
    Interface(E),
    /// A burst read asked for more bytes than the driver frames in one transaction.
    BurstTooLong {
        /// Number of bytes requested by the caller.
        requested: usize,
        /// Largest burst accepted by the register I/O layer.
        capacity: usize,
    },
    /// A sample or status operation was issued before [`init`](crate::Lis3dsh::init).
    NotInitialized,
    /// The data-ready flags never came up within the configured poll budget.
    Timeout {
        /// Number of status reads performed before giving up.
        polls: u32,
    },
    /// A register read back a value with no valid decoding.
    InvalidRegisterValue {
        /// Register that was read.
        register: RegisterAddress,
        /// Raw byte returned by the device.
        value: u8,
    },
    /// `WHO_AM_I` did not return the LIS3DSH identifier.
    DeviceIdMismatch {
        /// Identifier actually reported by the device.
        found: u8,
    },
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Self::Interface(err)
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Interface(_) => defmt::write!(f, "Interface"),
            Self::BurstTooLong { requested, capacity } => {
                defmt::write!(f, "BurstTooLong({=usize} > {=usize})", requested, capacity)
            }
            Self::NotInitialized => defmt::write!(f, "NotInitialized"),
            Self::Timeout { polls } => defmt::write!(f, "Timeout(polls={=u32})", polls),
            Self::InvalidRegisterValue { register, value } => {
                defmt::write!(f, "InvalidRegisterValue({} = {=u8:#04x})", register, value)
            }
            Self::DeviceIdMismatch { found } => {
                defmt::write!(f, "DeviceIdMismatch(found={=u8:#04x})", found)
            }
        }
    }
}
