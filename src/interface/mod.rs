//! Bus interface abstraction for the LIS3DSH driver.

pub mod spi;

use crate::error::{Error, Result};
use crate::registers::RegisterAddress;

/// Largest number of consecutive registers fetched in one burst read.
pub const MAX_BURST_LEN: usize = 4;

/// Abstraction over the low-level register access required by the driver.
pub trait Lis3dshInterface {
    /// Error type produced by the concrete bus implementation.
    type Error;

    /// Writes a single register.
    fn write_register(&mut self, register: RegisterAddress, value: u8) -> Result<(), Self::Error>;

    /// Reads `buf.len()` consecutive registers starting at `register`.
    ///
    /// Bursts longer than [`MAX_BURST_LEN`] are rejected with [`Error::BurstTooLong`].
    fn read_registers(&mut self, register: RegisterAddress, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Reads a single register.
    fn read_register(&mut self, register: RegisterAddress) -> Result<u8, Self::Error> {
        let mut value = [0u8; 1];
        self.read_registers(register, &mut value)?;
        Ok(value[0])
    }
}

/// Rejects burst lengths the register I/O layer does not frame.
pub(crate) fn check_burst_len<E>(requested: usize) -> Result<(), E> {
    if requested > MAX_BURST_LEN {
        return Err(Error::BurstTooLong {
            requested,
            capacity: MAX_BURST_LEN,
        });
    }
    Ok(())
}
