#![allow(dead_code)]

pub use lis3dsh::Lis3dsh;
pub use lis3dsh::config::{InitConfig, PollPolicy};
pub use lis3dsh::params::{Axes, OutputDataRate};

use embedded_hal_mock as hal;
pub use hal::eh1::delay::NoopDelay;
pub use hal::eh1::digital::{Mock as PinMock, State as PinState, Transaction as PinTrans};
pub use hal::eh1::spi::{Mock as SpiMock, Transaction as SpiTrans};

pub const REG_WHO_AM_I: u8 = 0x0F;
pub const REG_CTRL_REG4: u8 = 0x20;
pub const REG_STATUS: u8 = 0x27;
pub const REG_OUT_X_L: u8 = 0x28;
pub const REG_OUT_Y_L: u8 = 0x2A;
pub const REG_OUT_Z_L: u8 = 0x2C;

/// One chip-select bracket: address byte with bit 7 clear, then the data byte.
pub fn trans_write(register: u8, value: u8) -> [SpiTrans<u8>; 4] {
    [
        SpiTrans::transaction_start(),
        SpiTrans::write_vec(vec![register & 0x7F]),
        SpiTrans::write_vec(vec![value]),
        SpiTrans::transaction_end(),
    ]
}

/// One chip-select bracket: address byte with bit 7 set, then a single receive.
pub fn trans_read(register: u8, response: &[u8]) -> [SpiTrans<u8>; 4] {
    [
        SpiTrans::transaction_start(),
        SpiTrans::write_vec(vec![register | 0x80]),
        SpiTrans::read_vec(response.to_vec()),
        SpiTrans::transaction_end(),
    ]
}

/// Control-register write performed by `init` with the default configuration.
pub fn trans_init() -> [SpiTrans<u8>; 4] {
    trans_write(REG_CTRL_REG4, 0x47)
}

/// Flattens per-transaction expectation groups into one script.
pub fn script<const N: usize>(groups: &[[SpiTrans<u8>; N]]) -> Vec<SpiTrans<u8>> {
    groups.iter().flat_map(|group| group.iter().cloned()).collect()
}
