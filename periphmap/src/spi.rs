//! SPI binding entries.

use core::fmt;
use core::fmt::Write;

use heapless::String;

use crate::device::Sercom;
use crate::gpio::PinMux;

/// SERCOM pad carrying MISO (the DIPO value).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MisoPad {
    Miso0,
    Miso1,
    Miso2,
    Miso3,
}

impl MisoPad {
    pub const fn dipo(self) -> u8 {
        self as u8
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "miso0" => Some(MisoPad::Miso0),
            "miso1" => Some(MisoPad::Miso1),
            "miso2" => Some(MisoPad::Miso2),
            "miso3" => Some(MisoPad::Miso3),
            _ => None,
        }
    }
}

impl fmt::Display for MisoPad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "miso{}", *self as u8)
    }
}

/// Pad pair carrying MOSI and SCK (the DOPO value). Only these pairings
/// exist in hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MosiSckPad {
    Mosi0Sck1,
    Mosi2Sck3,
    Mosi3Sck1,
    Mosi0Sck3,
}

impl MosiSckPad {
    pub const fn dopo(self) -> u8 {
        self as u8
    }

    /// Whether this pad pair claims the given SERCOM pad number.
    pub const fn occupies(self, pad: u8) -> bool {
        match self {
            MosiSckPad::Mosi0Sck1 => pad == 0 || pad == 1,
            MosiSckPad::Mosi2Sck3 => pad == 2 || pad == 3,
            MosiSckPad::Mosi3Sck1 => pad == 3 || pad == 1,
            MosiSckPad::Mosi0Sck3 => pad == 0 || pad == 3,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "mosi0sck1" => Some(MosiSckPad::Mosi0Sck1),
            "mosi2sck3" => Some(MosiSckPad::Mosi2Sck3),
            "mosi3sck1" => Some(MosiSckPad::Mosi3Sck1),
            "mosi0sck3" => Some(MosiSckPad::Mosi0Sck3),
            _ => None,
        }
    }
}

impl fmt::Display for MosiSckPad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MosiSckPad::Mosi0Sck1 => write!(f, "mosi0sck1"),
            MosiSckPad::Mosi2Sck3 => write!(f, "mosi2sck3"),
            MosiSckPad::Mosi3Sck1 => write!(f, "mosi3sck1"),
            MosiSckPad::Mosi0Sck3 => write!(f, "mosi0sck3"),
        }
    }
}

/// One SPI bus binding: SERCOM device, the three signal pins and which
/// physical pads carry MISO vs the MOSI/SCK pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpiConf {
    pub dev: Sercom,
    pub miso: PinMux,
    pub miso_pad: MisoPad,
    pub mosi: PinMux,
    pub clk: PinMux,
    pub pads: MosiSckPad,
}

impl SpiConf {
    pub const fn new(
        dev: Sercom,
        miso: PinMux,
        miso_pad: MisoPad,
        mosi: PinMux,
        clk: PinMux,
        pads: MosiSckPad,
    ) -> Self {
        assert!(
            !pads.occupies(miso_pad.dipo()),
            "MISO pad collides with the MOSI/SCK pair"
        );
        assert!(!miso.pin.same(mosi.pin), "MISO and MOSI routed to the same pin");
        assert!(!miso.pin.same(clk.pin), "MISO and SCK routed to the same pin");
        assert!(!mosi.pin.same(clk.pin), "MOSI and SCK routed to the same pin");
        Self {
            dev,
            miso,
            miso_pad,
            mosi,
            clk,
            pads,
        }
    }

    /// Human-readable single-line form, e.g.
    /// `sercom4 miso=PA12:D@miso0 mosi=PB10:D clk=PB11:D pads=mosi2sck3`.
    pub fn encode(&self) -> String<96> {
        let mut out = String::new();
        write!(
            out,
            "{} miso={}@{} mosi={} clk={} pads={}",
            self.dev, self.miso, self.miso_pad, self.mosi, self.clk, self.pads
        )
        .unwrap();
        out
    }

    pub fn parse(s: &str) -> Option<Self> {
        let mut fields = s.split(' ');
        let dev = Sercom::parse(fields.next()?)?;
        let (miso, miso_pad) = fields.next()?.strip_prefix("miso=")?.split_once('@')?;
        let (miso, miso_pad) = (PinMux::parse(miso)?, MisoPad::parse(miso_pad)?);
        let mosi = PinMux::parse(fields.next()?.strip_prefix("mosi=")?)?;
        let clk = PinMux::parse(fields.next()?.strip_prefix("clk=")?)?;
        let pads = MosiSckPad::parse(fields.next()?.strip_prefix("pads=")?)?;
        if fields.next().is_some() {
            return None;
        }
        if pads.occupies(miso_pad.dipo())
            || miso.pin.same(mosi.pin)
            || miso.pin.same(clk.pin)
            || mosi.pin.same(clk.pin)
        {
            return None;
        }
        Some(Self {
            dev,
            miso,
            miso_pad,
            mosi,
            clk,
            pads,
        })
    }
}
