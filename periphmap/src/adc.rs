//! ADC binding entries.
//!
//! The channel table's order is the externally visible channel numbering:
//! logical channel 0 is the first entry, and application-facing labels like
//! "A0" rely on that ordering alone.

use core::fmt;
use core::fmt::Write;

use heapless::String;

use crate::clock::GclkSource;
use crate::gpio::Pin;

/// ADC register block base address.
pub const ADC_ADDR: u32 = 0x4200_4000;
/// NVIC line of the ADC result/overrun interrupts.
pub const ADC_IRQN: u8 = 23;

/// Positive input multiplexer position (INPUTCTRL.MUXPOS), restricted to the
/// external AIN pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MuxPos(u8);

impl MuxPos {
    pub const fn pin(n: u8) -> Self {
        assert!(n < 20, "AIN inputs are numbered 0..20");
        MuxPos(n)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix("pin")?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let n: u8 = digits.parse().ok()?;
        if n >= 20 {
            return None;
        }
        Some(MuxPos(n))
    }
}

impl fmt::Display for MuxPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pin{}", self.0)
    }
}

/// One logical analog channel: the pin and its input multiplexer position.
/// The pin's mux function is always B (analog), so it is not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdcChanConf {
    pub pin: Pin,
    pub muxpos: MuxPos,
}

impl AdcChanConf {
    pub const fn new(pin: Pin, muxpos: MuxPos) -> Self {
        Self { pin, muxpos }
    }

    /// Human-readable form, e.g. `PA02@pin0`.
    pub fn encode(&self) -> String<16> {
        let mut out = String::new();
        write!(out, "{}@{}", self.pin, self.muxpos).unwrap();
        out
    }

    pub fn parse(s: &str) -> Option<Self> {
        let (pin, muxpos) = s.split_once('@')?;
        Some(Self {
            pin: Pin::parse(pin)?,
            muxpos: MuxPos::parse(muxpos)?,
        })
    }
}

/// Sampling clock prescaler (CTRLB.PRESCALER).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcPrescaler {
    Div4,
    Div8,
    Div16,
    Div32,
    Div64,
    Div128,
    Div256,
    Div512,
}

impl AdcPrescaler {
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Negative input selection (INPUTCTRL.MUXNEG) for single-ended operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcNegInput {
    Gnd,
    IoGnd,
}

/// Gain stage setting (INPUTCTRL.GAIN).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcGain {
    X1,
    X2,
    X4,
    X8,
    X16,
    Div2,
}

/// Reference voltage selection (REFCTRL.REFSEL).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcReference {
    Int1V,
    IntVcc0,
    IntVcc1,
    ExtA,
    ExtB,
}

/// Instance-wide ADC settings shared by every channel in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdcCommon {
    pub gclk_src: GclkSource,
    pub prescaler: AdcPrescaler,
    pub neg_input: AdcNegInput,
    pub gain: AdcGain,
    pub reference: AdcReference,
}
