//! PWM binding entries.
//!
//! A PWM device exposes a fixed number of channel slots. A slot is either
//! wired to a pin or left unconnected; the sum type makes the driver layer's
//! handling exhaustive, so an unconnected slot can never be mistaken for a
//! real pin and mux-configured.

use core::fmt;
use core::fmt::Write;

use heapless::String;

use crate::device::Tcc;
use crate::gpio::{Mux, Pin, PinMux};

/// One PWM channel slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmChannel {
    /// Slot wired to a pin, driving the given waveform-output channel.
    Connected { out: PinMux, channel: u8 },
    /// Slot left unwired; skipped by hardware configuration.
    Unconnected,
}

impl PwmChannel {
    pub const fn connected(pin: Pin, mux: Mux, channel: u8) -> Self {
        assert!(channel < 8, "TCC waveform outputs are numbered 0..8");
        PwmChannel::Connected {
            out: PinMux::new(pin, mux),
            channel,
        }
    }

    pub const fn is_connected(self) -> bool {
        matches!(self, PwmChannel::Connected { .. })
    }

    /// Text form: `ch1=PA07:E`, or `nc` for an unwired slot.
    pub fn parse(s: &str) -> Option<Self> {
        if s == "nc" {
            return Some(PwmChannel::Unconnected);
        }
        let (channel, out) = s.strip_prefix("ch")?.split_once('=')?;
        let channel: u8 = channel.parse().ok()?;
        if channel >= 8 {
            return None;
        }
        Some(PwmChannel::Connected {
            out: PinMux::parse(out)?,
            channel,
        })
    }
}

impl fmt::Display for PwmChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PwmChannel::Connected { out, channel } => write!(f, "ch{channel}={out}"),
            PwmChannel::Unconnected => write!(f, "nc"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PwmChannel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PwmChannel::Connected { out, channel } => {
                defmt::write!(fmt, "ch{}={}:{}", channel, out.pin, out.mux.function());
            }
            PwmChannel::Unconnected => defmt::write!(fmt, "nc"),
        }
    }
}

/// One PWM device binding: the TCC instance and its channel slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmConf<const N: usize> {
    pub dev: Tcc,
    pub channels: [PwmChannel; N],
}

impl<const N: usize> PwmConf<N> {
    /// Builds an entry, rejecting two slots claiming the same waveform
    /// output at build time when evaluated in const context.
    pub const fn new(dev: Tcc, channels: [PwmChannel; N]) -> Self {
        let mut i = 0;
        while i < N {
            if let PwmChannel::Connected { channel: a, .. } = channels[i] {
                let mut j = i + 1;
                while j < N {
                    if let PwmChannel::Connected { channel: b, .. } = channels[j] {
                        assert!(a != b, "two slots claim the same waveform output");
                    }
                    j += 1;
                }
            }
            i += 1;
        }
        Self { dev, channels }
    }

    /// The wired slots only, as (routing, waveform output) pairs. This is
    /// the iteration a driver uses for mux configuration.
    pub fn connected(&self) -> impl Iterator<Item = (PinMux, u8)> + '_ {
        self.channels.iter().filter_map(|slot| match slot {
            PwmChannel::Connected { out, channel } => Some((*out, *channel)),
            PwmChannel::Unconnected => None,
        })
    }

    /// Number of channel slots, wired or not.
    pub const fn slots(&self) -> usize {
        N
    }

    /// Human-readable single-line form, e.g. `tcc0 nc ch1=PA07:E`.
    pub fn encode(&self) -> String<96> {
        let mut out = String::new();
        write!(out, "{}", self.dev).unwrap();
        for slot in &self.channels {
            write!(out, " {slot}").unwrap();
        }
        out
    }

    /// Parses the `encode` form; requires exactly `N` slot tokens.
    pub fn parse(s: &str) -> Option<Self> {
        let mut fields = s.split(' ');
        let dev = Tcc::parse(fields.next()?)?;
        let mut channels = [PwmChannel::Unconnected; N];
        for slot in channels.iter_mut() {
            *slot = PwmChannel::parse(fields.next()?)?;
        }
        if fields.next().is_some() {
            return None;
        }
        let mut i = 0;
        while i < N {
            if let PwmChannel::Connected { channel: a, .. } = channels[i] {
                let mut j = i + 1;
                while j < N {
                    if let PwmChannel::Connected { channel: b, .. } = channels[j] {
                        if a == b {
                            return None;
                        }
                    }
                    j += 1;
                }
            }
            i += 1;
        }
        Some(Self { dev, channels })
    }
}
