//! Configuration primitives for the LIS3DSH driver.

use crate::params::{Axes, OutputDataRate};
use crate::registers::CtrlReg4;

/// Settings applied once by [`Lis3dsh::init`](crate::Lis3dsh::init).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitConfig {
    /// Output data rate selection.
    pub data_rate: OutputDataRate,
    /// Axes to enable.
    pub axes: Axes,
    /// Data-ready interrupt request. Recorded only; the INT1/INT2 routing is not
    /// programmed by this driver.
    pub interrupt_enable: bool,
}

impl InitConfig {
    /// Begins building an [`InitConfig`] using the builder pattern.
    pub fn builder() -> InitConfigBuilder {
        InitConfigBuilder::new()
    }

    /// Byte written to `CTRL_REG4`: the data-rate pattern OR-ed with the axis bits.
    pub fn control_byte(&self) -> u8 {
        u8::from(self.ctrl_reg4())
    }

    /// `CTRL_REG4` view of this configuration.
    pub fn ctrl_reg4(&self) -> CtrlReg4 {
        CtrlReg4::new()
            .with_x_enable(self.axes.contains(Axes::X))
            .with_y_enable(self.axes.contains(Axes::Y))
            .with_z_enable(self.axes.contains(Axes::Z))
            .with_odr(self.data_rate)
    }
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            data_rate: OutputDataRate::Hz25,
            axes: Axes::XYZ,
            interrupt_enable: false,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InitConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "InitConfig {{ data_rate: {}, axes: {}, interrupt_enable: {} }}",
            self.data_rate,
            self.axes,
            self.interrupt_enable
        );
    }
}

/// Builder for [`InitConfig`] allowing piecemeal construction.
#[derive(Debug, Clone, Copy)]
pub struct InitConfigBuilder {
    config: InitConfig,
}

impl InitConfigBuilder {
    /// Creates a new builder seeded with [`InitConfig::default()`].
    pub fn new() -> Self {
        Self {
            config: InitConfig::default(),
        }
    }

    /// Overrides the output data rate.
    pub fn data_rate(mut self, data_rate: OutputDataRate) -> Self {
        self.config.data_rate = data_rate;
        self
    }

    /// Overrides the enabled axes.
    pub fn axes(mut self, axes: Axes) -> Self {
        self.config.axes = axes;
        self
    }

    /// Records whether the data-ready interrupt is wanted.
    pub fn interrupt_enable(mut self, enable: bool) -> Self {
        self.config.interrupt_enable = enable;
        self
    }

    /// Finalizes the builder and returns the [`InitConfig`].
    pub fn build(self) -> InitConfig {
        self.config
    }
}

impl Default for InitConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounds on the data-ready busy wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Maximum number of `STATUS` reads before reporting a timeout. Zero is treated as one.
    pub max_polls: u32,
    /// Pause between two unsuccessful reads, in microseconds.
    pub interval_us: u32,
}

impl PollPolicy {
    /// Creates a policy from an explicit poll budget and interval.
    pub const fn new(max_polls: u32, interval_us: u32) -> Self {
        Self {
            max_polls,
            interval_us,
        }
    }

    /// Upper bound on the time spent waiting, in microseconds.
    pub const fn budget_us(&self) -> u64 {
        let polls = if self.max_polls == 0 { 1 } else { self.max_polls };
        (polls as u64 - 1) * self.interval_us as u64
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::new(1_000, 1_000)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PollPolicy {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "PollPolicy {{ max_polls: {=u32}, interval_us: {=u32} }}",
            self.max_polls,
            self.interval_us
        );
    }
}
