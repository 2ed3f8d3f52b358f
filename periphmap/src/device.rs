//! Hardware instance identifiers.
//!
//! Binding entries name peripheral instances through these enums rather than
//! raw register pointers; the driver layer maps an identifier to its register
//! block via `addr()`. Each interrupt-capable instance also fixes the vector
//! symbol name (`isr()`) the driver layer must define when the instance
//! appears in a table.

use core::fmt;

const SERCOM0_ADDR: u32 = 0x4200_0800;
const TCC0_ADDR: u32 = 0x4200_2000;
const TC3_ADDR: u32 = 0x4200_2C00;

/// Serial communication engines. Each SERCOM can be bound as UART, SPI or
/// I2C, but at most once per board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sercom {
    Sercom0,
    Sercom1,
    Sercom2,
    Sercom3,
    Sercom4,
    Sercom5,
}

impl Sercom {
    /// Peripheral-bridge-C slot used by the GCLK channel ids below.
    pub const GCLK_SLOW_ID: u8 = 0x13;

    pub const fn addr(self) -> u32 {
        SERCOM0_ADDR + 0x400 * self as u32
    }

    pub const fn irqn(self) -> u8 {
        9 + self as u8
    }

    /// GCLK_CLKCTRL channel id of the core clock for this instance.
    pub const fn gclk_core_id(self) -> u8 {
        0x14 + self as u8
    }

    pub const fn isr(self) -> &'static str {
        match self {
            Sercom::Sercom0 => "isr_sercom0",
            Sercom::Sercom1 => "isr_sercom1",
            Sercom::Sercom2 => "isr_sercom2",
            Sercom::Sercom3 => "isr_sercom3",
            Sercom::Sercom4 => "isr_sercom4",
            Sercom::Sercom5 => "isr_sercom5",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sercom0" => Some(Sercom::Sercom0),
            "sercom1" => Some(Sercom::Sercom1),
            "sercom2" => Some(Sercom::Sercom2),
            "sercom3" => Some(Sercom::Sercom3),
            "sercom4" => Some(Sercom::Sercom4),
            "sercom5" => Some(Sercom::Sercom5),
            _ => None,
        }
    }
}

impl fmt::Display for Sercom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sercom{}", *self as u8)
    }
}

/// Timer/counter-for-control instances, the PWM-capable timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tcc {
    Tcc0,
    Tcc1,
    Tcc2,
}

impl Tcc {
    pub const fn addr(self) -> u32 {
        TCC0_ADDR + 0x400 * self as u32
    }

    pub const fn irqn(self) -> u8 {
        15 + self as u8
    }

    pub const fn isr(self) -> &'static str {
        match self {
            Tcc::Tcc0 => "isr_tcc0",
            Tcc::Tcc1 => "isr_tcc1",
            Tcc::Tcc2 => "isr_tcc2",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tcc0" => Some(Tcc::Tcc0),
            "tcc1" => Some(Tcc::Tcc1),
            "tcc2" => Some(Tcc::Tcc2),
            _ => None,
        }
    }
}

impl fmt::Display for Tcc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tcc{}", *self as u8)
    }
}

/// Basic timer/counter instances usable as general-purpose timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tc {
    Tc3 = 3,
    Tc4 = 4,
    Tc5 = 5,
}

impl Tc {
    pub const fn addr(self) -> u32 {
        TC3_ADDR + 0x400 * (self as u32 - 3)
    }

    pub const fn irqn(self) -> u8 {
        15 + self as u8
    }

    pub const fn isr(self) -> &'static str {
        match self {
            Tc::Tc3 => "isr_tc3",
            Tc::Tc4 => "isr_tc4",
            Tc::Tc5 => "isr_tc5",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tc3" => Some(Tc::Tc3),
            "tc4" => Some(Tc::Tc4),
            "tc5" => Some(Tc::Tc5),
            _ => None,
        }
    }
}

impl fmt::Display for Tc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tc{}", *self as u8)
    }
}
