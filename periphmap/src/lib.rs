//! Declarative peripheral binding tables for SAMD21-class boards.
//!
//! A board crate declares, per peripheral class, a `const` array of binding
//! entries: which hardware instance is used, on which pins, with which mux
//! function, pad roles and clock generator. The driver layer indexes these
//! tables at init time; the array order *is* the instance numbering it sees.
//!
//! All entry constructors are `const fn` and assert their invariants, so a
//! malformed table (colliding pad roles, PLL multiplier outside the VCO
//! range) fails the build of the board crate instead of a driver in the
//! field. The tables themselves are immutable data and safe to read from any
//! number of contexts without synchronization.

#![no_std]

pub mod adc;
pub mod clock;
pub mod device;
pub mod gpio;
pub mod i2c;
pub mod pwm;
pub mod rtc;
pub mod spi;
pub mod timer;
pub mod uart;
