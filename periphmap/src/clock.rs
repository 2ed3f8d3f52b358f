//! Core clock selection.
//!
//! Two mutually exclusive sources: the 48 MHz-class PLL fed by the internal
//! 8 MHz oscillator divided down to 1 MHz, or the 8 MHz oscillator used
//! directly. The PLL gives a wider range and less jitter; direct mode can be
//! slightly more power efficient.

use core::fmt;

use fugit::HertzU32;

/// The PLL VCO does not lock below 32 MHz.
pub const PLL_MUL_MIN: u32 = 31;
/// The PLL VCO tops out at 96 MHz.
pub const PLL_MUL_MAX: u32 = 95;

/// Internal oscillator feeding both modes.
pub const OSC8M: HertzU32 = HertzU32::MHz(8);

/// Core clocks below this are allowed but flagged by [`CoreClock::warn_if_slow`].
pub const MIN_RECOMMENDED: HertzU32 = HertzU32::MHz(1);

/// Core clock configuration. Resolved once, at build time; the result is a
/// fixed constant for the life of the system.
///
/// PLL mode: `CORECLOCK = ((mul + 1) * 1 MHz) / div`, with `mul` in
/// [`PLL_MUL_MIN`]..=[`PLL_MUL_MAX`].
/// Direct mode: `CORECLOCK = 8 MHz / div`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreClock {
    Pll { mul: u32, div: u32 },
    Direct { div: u32 },
}

impl CoreClock {
    /// Resolves the configured core frequency. Evaluating this in a `const`
    /// context rejects an out-of-range PLL multiplier at build time.
    pub const fn hertz(self) -> HertzU32 {
        match self {
            CoreClock::Pll { mul, div } => {
                assert!(
                    mul >= PLL_MUL_MIN && mul <= PLL_MUL_MAX,
                    "PLL multiplier outside the 32..=96 MHz VCO range"
                );
                assert!(div > 0, "PLL divisor must be non-zero");
                HertzU32::from_raw(((mul + 1) * 1_000_000) / div)
            }
            CoreClock::Direct { div } => {
                assert!(div > 0, "clock divisor must be non-zero");
                HertzU32::from_raw(OSC8M.raw() / div)
            }
        }
    }

    pub const fn below_recommended(self) -> bool {
        self.hertz().raw() < MIN_RECOMMENDED.raw()
    }

    /// Logs a warning when the resolved frequency is below 1 MHz. Permitted,
    /// discouraged; meant for the driver layer's boot path.
    pub fn warn_if_slow(self) {
        if self.below_recommended() {
            log::warn!(
                "core clock {} Hz is below the recommended 1 MHz minimum",
                self.hertz().raw()
            );
        }
    }
}

/// Clock generator feeding a peripheral (GCLK_CLKCTRL.GEN selector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GclkSource {
    Gclk0,
    Gclk1,
    Gclk2,
    Gclk3,
    Gclk4,
    Gclk5,
    Gclk6,
    Gclk7,
}

impl GclkSource {
    pub const fn gen(self) -> u8 {
        self as u8
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "gclk0" => Some(GclkSource::Gclk0),
            "gclk1" => Some(GclkSource::Gclk1),
            "gclk2" => Some(GclkSource::Gclk2),
            "gclk3" => Some(GclkSource::Gclk3),
            "gclk4" => Some(GclkSource::Gclk4),
            "gclk5" => Some(GclkSource::Gclk5),
            "gclk6" => Some(GclkSource::Gclk6),
            "gclk7" => Some(GclkSource::Gclk7),
            _ => None,
        }
    }
}

impl fmt::Display for GclkSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gclk{}", *self as u8)
    }
}
