//! High-level LIS3DSH device driver implementation.

use crate::config::{InitConfig, PollPolicy};
use crate::error::{Error, Result};
use crate::interface::Lis3dshInterface;
use crate::interface::spi::SpiInterface;
use crate::log;
use crate::registers::{
    CtrlReg4,
    Register,
    Status,
    EXPECTED_WHO_AM_I,
    REG_WHO_AM_I,
};
use crate::sample::{AXIS_BYTES, Axis, RawSample, assemble_axis};
use embedded_hal::delay::DelayNs;
use embedded_hal::spi::SpiDevice;

/// High-level synchronous driver for the LIS3DSH accelerometer.
///
/// The driver owns its bus interface and performs no locking; share it between
/// execution contexts only behind external mutual exclusion.
pub struct Lis3dsh<IFACE> {
    interface: IFACE,
    poll_policy: PollPolicy,
    initialized: bool,
}

/// Decoded view of the `STATUS` register with explicit flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSnapshot {
    /// STATUS[7] ZYXOR.
    pub xyz_overrun: bool,
    /// STATUS[6] ZOR.
    pub z_overrun: bool,
    /// STATUS[5] YOR.
    pub y_overrun: bool,
    /// STATUS[4] XOR.
    pub x_overrun: bool,
    /// STATUS[3] ZYXDA.
    pub xyz_data_available: bool,
    /// STATUS[2] ZDA.
    pub z_data_available: bool,
    /// STATUS[1] YDA.
    pub y_data_available: bool,
    /// STATUS[0] XDA.
    pub x_data_available: bool,
}

impl StatusSnapshot {
    /// Builds a snapshot from the raw STATUS bitfield.
    pub fn from_register(status: Status) -> Self {
        Self {
            xyz_overrun: status.xyz_overrun(),
            z_overrun: status.z_overrun(),
            y_overrun: status.y_overrun(),
            x_overrun: status.x_overrun(),
            xyz_data_available: status.xyz_data_available(),
            z_data_available: status.z_data_available(),
            y_data_available: status.y_data_available(),
            x_data_available: status.x_data_available(),
        }
    }

    /// Returns `true` when at least one of the X, Y or Z new-data flags is set.
    pub fn any_axis_ready(&self) -> bool {
        self.x_data_available || self.y_data_available || self.z_data_available
    }

    /// Returns `true` when the X, Y and Z new-data flags are all set.
    pub fn all_axes_ready(&self) -> bool {
        self.x_data_available && self.y_data_available && self.z_data_available
    }

    /// Returns `true` when any overrun flag is set.
    pub fn any_overrun(&self) -> bool {
        self.x_overrun || self.y_overrun || self.z_overrun || self.xyz_overrun
    }
}

impl From<u8> for StatusSnapshot {
    fn from(value: u8) -> Self {
        Self::from_register(Status::from(value))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusSnapshot {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "StatusSnapshot {{\n    ZYXOR: {},\n    ZOR: {},\n    YOR: {},\n    XOR: {},\n    ZYXDA: {},\n    ZDA: {},\n    YDA: {},\n    XDA: {}\n}}",
            self.xyz_overrun,
            self.z_overrun,
            self.y_overrun,
            self.x_overrun,
            self.xyz_data_available,
            self.z_data_available,
            self.y_data_available,
            self.x_data_available
        );
    }
}

impl<IFACE> Lis3dsh<IFACE> {
    // ==================================================================
    // == Driver Construction & Ownership ===============================
    // ==================================================================
    /// Creates a new, not yet initialized driver from the provided bus interface.
    pub fn new(interface: IFACE) -> Self {
        Self {
            interface,
            poll_policy: PollPolicy::default(),
            initialized: false,
        }
    }

    /// Replaces the data-ready poll policy, builder style.
    pub fn with_poll_policy(mut self, policy: PollPolicy) -> Self {
        self.poll_policy = policy;
        self
    }

    /// Consumes the driver and returns the owned interface.
    pub fn release(self) -> IFACE {
        self.interface
    }

    /// Provides mutable access to the underlying interface.
    pub fn interface_mut(&mut self) -> &mut IFACE {
        &mut self.interface
    }

    /// Returns `true` once [`init`](Self::init) has completed successfully.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the active data-ready poll policy.
    pub fn poll_policy(&self) -> &PollPolicy {
        &self.poll_policy
    }

    /// Replaces the data-ready poll policy.
    pub fn set_poll_policy(&mut self, policy: PollPolicy) {
        self.poll_policy = policy;
    }
}

impl<SPI> Lis3dsh<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    // ==================================================================
    // == SPI Convenience Constructors ==================================
    // ==================================================================
    /// Convenience constructor for SPI transports.
    pub fn new_spi(spi: SPI) -> Self {
        Self::new(SpiInterface::new(spi))
    }

    /// Releases the driver, returning the SPI device.
    pub fn release_spi(self) -> SPI {
        self.release().release()
    }
}

impl<IFACE, CommE> Lis3dsh<IFACE>
where
    IFACE: Lis3dshInterface<Error = CommE>,
{
    // ==================================================================
    // == Initialization ================================================
    // ==================================================================
    /// Programs `CTRL_REG4` with the data rate and axis enables of `config`.
    ///
    /// The control byte is written as given; no range checks are applied. The
    /// interrupt request is only recorded, the INT pins are left untouched.
    pub fn init(&mut self, config: InitConfig) -> Result<(), CommE> {
        let control = config.control_byte();
        self.interface.write_register(CtrlReg4::ADDRESS, control)?;
        log::log_debug!("CTRL_REG4 <- {=u8:#04x}", control);

        if config.interrupt_enable {
            log::log_warn!("data-ready interrupt requested but not wired; use wait_data_ready");
        }

        self.initialized = true;
        Ok(())
    }

    // ==================================================================
    // == Identification & Control Readback =============================
    // ==================================================================
    /// Reads the `WHO_AM_I` register.
    pub fn device_id(&mut self) -> Result<u8, CommE> {
        self.interface.read_register(REG_WHO_AM_I)
    }

    /// Verifies `WHO_AM_I` against the LIS3DSH identifier.
    pub fn check_id(&mut self) -> Result<(), CommE> {
        let found = self.device_id()?;
        if found != EXPECTED_WHO_AM_I {
            log::log_warn!("WHO_AM_I mismatch: {=u8:#04x}", found);
            return Err(Error::DeviceIdMismatch { found });
        }
        Ok(())
    }

    /// Reads `CTRL_REG4` back from the device.
    ///
    /// Reserved output data rate codes (`0xA`..=`0xF`, e.g. a floating MISO line
    /// reading `0xFF`) are reported as [`Error::InvalidRegisterValue`].
    pub fn read_control(&mut self) -> Result<CtrlReg4, CommE> {
        let raw = self.interface.read_register(CtrlReg4::ADDRESS)?;
        let ctrl = CtrlReg4::from(raw);
        if ctrl.odr_or_err().is_err() {
            log::log_warn!("CTRL_REG4 holds reserved ODR code: {=u8:#04x}", raw);
            return Err(Error::InvalidRegisterValue {
                register: CtrlReg4::ADDRESS,
                value: raw,
            });
        }
        Ok(ctrl)
    }

    // ==================================================================
    // == Data-Ready Gate ===============================================
    // ==================================================================
    /// Returns a snapshot of the `STATUS` register.
    pub fn read_status(&mut self) -> Result<StatusSnapshot, CommE> {
        self.ensure_initialized()?;
        self.poll_status()
    }

    /// Performs a single non-blocking readiness check.
    pub fn data_ready(&mut self) -> Result<bool, CommE> {
        Ok(self.read_status()?.any_axis_ready())
    }

    /// Polls `STATUS` until any of the X, Y or Z new-data flags is set.
    ///
    /// Polls at most [`PollPolicy::max_polls`] times, sleeping
    /// [`PollPolicy::interval_us`] on `delay` between unsuccessful reads, and
    /// returns the status that reported readiness. Exhausting the budget yields
    /// [`Error::Timeout`].
    pub fn wait_data_ready(&mut self, delay: &mut impl DelayNs) -> Result<StatusSnapshot, CommE> {
        self.ensure_initialized()?;

        let max_polls = self.poll_policy.max_polls.max(1);
        for poll in 1..=max_polls {
            let status = self.poll_status()?;
            if status.any_axis_ready() {
                return Ok(status);
            }

            log::log_trace!("STATUS not ready ({=u32}/{=u32})", poll, max_polls);
            if poll < max_polls {
                delay.delay_us(self.poll_policy.interval_us);
            }
        }

        log::log_warn!("no new data after {=u32} STATUS polls", max_polls);
        Err(Error::Timeout { polls: max_polls })
    }

    // ==================================================================
    // == Sample Assembly ===============================================
    // ==================================================================
    /// Reads one axis as a two-byte burst starting at its low output register.
    pub fn read_axis(&mut self, axis: Axis) -> Result<i16, CommE> {
        self.ensure_initialized()?;
        self.fetch_axis(axis)
    }

    /// Reads a raw acceleration triplet.
    ///
    /// X, Y and Z are fetched in three separate transactions, so at high data
    /// rates the axes may come from different sampling instants. Sequence a
    /// [`wait_data_ready`](Self::wait_data_ready) before this call when that matters.
    pub fn read_raw_sample(&mut self) -> Result<RawSample, CommE> {
        self.ensure_initialized()?;

        let mut sample = RawSample::default();
        for axis in Axis::ALL {
            sample.set_axis(axis, self.fetch_axis(axis)?);
        }
        Ok(sample)
    }

    // ==================================================================
    // == Internal Helpers ==============================================
    // ==================================================================
    fn ensure_initialized(&self) -> Result<(), CommE> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn poll_status(&mut self) -> Result<StatusSnapshot, CommE> {
        let raw = self.interface.read_register(Status::ADDRESS)?;
        Ok(StatusSnapshot::from(raw))
    }

    fn fetch_axis(&mut self, axis: Axis) -> Result<i16, CommE> {
        let mut raw = [0u8; AXIS_BYTES];
        self.interface.read_registers(axis.low_register(), &mut raw)?;
        Ok(assemble_axis(raw[0], raw[1]))
    }
}
