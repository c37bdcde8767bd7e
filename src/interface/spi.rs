//! SPI interface implementation built on top of `embedded-hal` `SpiDevice`.
//!
//! Every register access is one [`SpiDevice::transaction`], i.e. one chip-select
//! bracket holding the command byte followed by the data phase.

use embedded_hal::spi::{Operation, SpiDevice};

use super::{Lis3dshInterface, check_burst_len};
use crate::error::Result;
use crate::registers::{CommandByte, Direction, RegisterAddress};

/// SPI-based interface implementation for the LIS3DSH driver.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new interface from the provided SPI device abstraction.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Builds the command byte used to address registers over SPI.
    fn command_byte(register: RegisterAddress, direction: Direction) -> [u8; 1] {
        [u8::from(CommandByte::for_register(register, direction))]
    }

    /// Provides mutable access to the wrapped SPI device.
    pub fn spi_mut(&mut self) -> &mut SPI {
        &mut self.spi
    }

    /// Consumes the interface and returns the owned SPI device.
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI> Lis3dshInterface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    type Error = SPI::Error;

    fn write_register(&mut self, register: RegisterAddress, value: u8) -> Result<(), Self::Error> {
        let command = Self::command_byte(register, Direction::Write);
        let data = [value];
        let mut operations = [Operation::Write(&command), Operation::Write(&data)];
        self.spi.transaction(&mut operations)?;
        Ok(())
    }

    fn read_registers(&mut self, register: RegisterAddress, buf: &mut [u8]) -> Result<(), Self::Error> {
        check_burst_len::<Self::Error>(buf.len())?;
        if buf.is_empty() {
            return Ok(());
        }

        let command = Self::command_byte(register, Direction::Read);
        let mut operations = [Operation::Write(&command), Operation::Read(buf)];
        self.spi.transaction(&mut operations)?;
        Ok(())
    }
}
