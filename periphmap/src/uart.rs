//! UART binding entries.

use core::fmt;
use core::fmt::Write;

use heapless::String;

use crate::clock::GclkSource;
use crate::device::Sercom;
use crate::gpio::PinMux;

/// SERCOM pad carrying RX (the RXPO value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RxPad {
    Rx0,
    Rx1,
    Rx2,
    Rx3,
}

impl RxPad {
    pub const fn rxpo(self) -> u8 {
        self as u8
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "rx0" => Some(RxPad::Rx0),
            "rx1" => Some(RxPad::Rx1),
            "rx2" => Some(RxPad::Rx2),
            "rx3" => Some(RxPad::Rx3),
            _ => None,
        }
    }
}

impl fmt::Display for RxPad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rx{}", *self as u8)
    }
}

/// Pad set carrying TX (the TXPO value). Only these combinations exist in
/// hardware; `Tx0RtsCts` additionally claims pads 2 and 3 for flow control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxPad {
    Tx0,
    Tx2,
    Tx0RtsCts,
}

impl TxPad {
    pub const fn txpo(self) -> u8 {
        match self {
            TxPad::Tx0 => 0,
            TxPad::Tx2 => 1,
            TxPad::Tx0RtsCts => 2,
        }
    }

    /// Whether this pad set claims the given SERCOM pad number.
    pub const fn occupies(self, pad: u8) -> bool {
        match self {
            TxPad::Tx0 => pad == 0,
            TxPad::Tx2 => pad == 2,
            TxPad::Tx0RtsCts => pad == 0 || pad == 2 || pad == 3,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tx0" => Some(TxPad::Tx0),
            "tx2" => Some(TxPad::Tx2),
            "tx0rtscts" => Some(TxPad::Tx0RtsCts),
            _ => None,
        }
    }
}

impl fmt::Display for TxPad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxPad::Tx0 => write!(f, "tx0"),
            TxPad::Tx2 => write!(f, "tx2"),
            TxPad::Tx0RtsCts => write!(f, "tx0rtscts"),
        }
    }
}

/// UART option bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UartFlags(u8);

impl UartFlags {
    pub const NONE: UartFlags = UartFlags(0);
    /// Keep the receiver running in standby sleep states.
    pub const RUN_STANDBY: UartFlags = UartFlags(1 << 0);
    /// Wake the CPU on start-of-frame detection.
    pub const WAKEUP: UartFlags = UartFlags(1 << 1);

    const ALL: u8 = 0b11;

    pub const fn union(self, other: UartFlags) -> UartFlags {
        UartFlags(self.0 | other.0)
    }

    pub const fn contains(self, other: UartFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn from_bits(bits: u8) -> Option<UartFlags> {
        if bits & !Self::ALL != 0 {
            return None;
        }
        Some(UartFlags(bits))
    }
}

/// One UART instance binding: SERCOM device, RX/TX routing and the clock
/// generator feeding the baud engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UartConf {
    pub dev: Sercom,
    pub rx: PinMux,
    pub rx_pad: RxPad,
    pub tx: PinMux,
    pub tx_pad: TxPad,
    pub flags: UartFlags,
    pub gclk_src: GclkSource,
}

impl UartConf {
    /// Builds an entry, rejecting ambiguous pad assignments at build time
    /// when evaluated in const context.
    pub const fn new(
        dev: Sercom,
        rx: PinMux,
        rx_pad: RxPad,
        tx: PinMux,
        tx_pad: TxPad,
        flags: UartFlags,
        gclk_src: GclkSource,
    ) -> Self {
        assert!(
            !tx_pad.occupies(rx_pad.rxpo()),
            "RX and TX claim the same SERCOM pad"
        );
        assert!(!rx.pin.same(tx.pin), "RX and TX routed to the same pin");
        Self {
            dev,
            rx,
            rx_pad,
            tx,
            tx_pad,
            flags,
            gclk_src,
        }
    }

    /// Vector symbol the driver layer must define for this instance.
    pub const fn isr(self) -> &'static str {
        self.dev.isr()
    }

    /// Human-readable single-line form, e.g.
    /// `sercom0 rx=PA11:C@rx3 tx=PA10:C@tx2 flags=0 gclk=gclk0`.
    pub fn encode(&self) -> String<96> {
        let mut out = String::new();
        write!(
            out,
            "{} rx={}@{} tx={}@{} flags={} gclk={}",
            self.dev,
            self.rx,
            self.rx_pad,
            self.tx,
            self.tx_pad,
            self.flags.bits(),
            self.gclk_src
        )
        .unwrap();
        out
    }

    /// Parses the `encode` form. Rejects anything `encode` would not emit,
    /// including pad assignments `new` would refuse.
    pub fn parse(s: &str) -> Option<Self> {
        let mut fields = s.split(' ');
        let dev = Sercom::parse(fields.next()?)?;
        let (rx, rx_pad) = fields.next()?.strip_prefix("rx=")?.split_once('@')?;
        let (rx, rx_pad) = (PinMux::parse(rx)?, RxPad::parse(rx_pad)?);
        let (tx, tx_pad) = fields.next()?.strip_prefix("tx=")?.split_once('@')?;
        let (tx, tx_pad) = (PinMux::parse(tx)?, TxPad::parse(tx_pad)?);
        let flags: u8 = fields.next()?.strip_prefix("flags=")?.parse().ok()?;
        let flags = UartFlags::from_bits(flags)?;
        let gclk_src = GclkSource::parse(fields.next()?.strip_prefix("gclk=")?)?;
        if fields.next().is_some() {
            return None;
        }
        if tx_pad.occupies(rx_pad.rxpo()) || rx.pin.same(tx.pin) {
            return None;
        }
        Some(Self {
            dev,
            rx,
            rx_pad,
            tx,
            tx_pad,
            flags,
            gclk_src,
        })
    }
}
