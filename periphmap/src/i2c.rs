//! I2C configuration. Boards in this family expose a single bus, so this is
//! one record rather than a table.

use crate::device::Sercom;
use crate::gpio::PinMux;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cConf {
    pub dev: Sercom,
    pub sda: PinMux,
    pub scl: PinMux,
    pub irq_prio: u8,
}

impl I2cConf {
    pub const fn new(dev: Sercom, sda: PinMux, scl: PinMux, irq_prio: u8) -> Self {
        assert!(!sda.pin.same(scl.pin), "SDA and SCL routed to the same pin");
        Self {
            dev,
            sda,
            scl,
            irq_prio,
        }
    }

    /// GCLK channel feeding the bus core clock.
    pub const fn gclk_core_id(self) -> u8 {
        self.dev.gclk_core_id()
    }

    /// GCLK channel feeding the shared slow clock.
    pub const fn gclk_slow_id(self) -> u8 {
        Sercom::GCLK_SLOW_ID
    }

    /// Vector symbol the driver layer must define for this instance.
    pub const fn isr(self) -> &'static str {
        self.dev.isr()
    }
}
