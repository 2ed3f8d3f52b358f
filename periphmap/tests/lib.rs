use std::sync::Once;

use fugit::HertzU32;
use periphmap::adc::{AdcChanConf, MuxPos};
use periphmap::clock::{CoreClock, GclkSource};
use periphmap::device::{Sercom, Tc, Tcc};
use periphmap::gpio::{Mux, Pin, PinMux, Port};
use periphmap::pin;
use periphmap::pwm::{PwmChannel, PwmConf};
use periphmap::spi::{MisoPad, MosiSckPad, SpiConf};
use periphmap::timer::{TimerConf, TimerWidth};
use periphmap::uart::{RxPad, TxPad, UartConf, UartFlags};
use rand::Rng;

static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        env_logger::init();
    });
}

#[test]
fn test_pll_clock_resolution() {
    init_logger();

    let cases = [
        (47, 1, 48_000_000),
        (31, 1, 32_000_000),
        (95, 1, 96_000_000),
        (47, 2, 24_000_000),
    ];
    for (mul, div, hz) in cases {
        assert_eq!(
            CoreClock::Pll { mul, div }.hertz(),
            HertzU32::from_raw(hz),
            "PLL mul={mul} div={div}"
        );
    }
}

#[test]
fn test_direct_clock_resolution() {
    let clock = CoreClock::Direct { div: 1 };
    assert_eq!(clock.hertz(), HertzU32::MHz(8));
    assert!(!clock.below_recommended());

    // Below 1 MHz is permitted but flagged.
    let slow = CoreClock::Direct { div: 16 };
    assert_eq!(slow.hertz(), HertzU32::from_raw(500_000));
    assert!(slow.below_recommended());
    slow.warn_if_slow();
}

#[test]
#[should_panic]
fn test_pll_multiplier_below_vco_range() {
    let _ = CoreClock::Pll { mul: 30, div: 1 }.hertz();
}

#[test]
#[should_panic]
fn test_pll_multiplier_above_vco_range() {
    let _ = CoreClock::Pll { mul: 96, div: 1 }.hertz();
}

#[test]
fn test_clock_resolution_is_idempotent() {
    let clock = CoreClock::Pll { mul: 47, div: 1 };
    assert_eq!(clock.hertz(), clock.hertz());
}

#[test]
#[should_panic]
fn test_uart_pad_collision_rejected() {
    // TX on pad 0 while RX also claims pad 0.
    let _ = UartConf::new(
        Sercom::Sercom0,
        PinMux::new(pin!(PA, 11), Mux::C),
        RxPad::Rx0,
        PinMux::new(pin!(PA, 10), Mux::C),
        TxPad::Tx0,
        UartFlags::NONE,
        GclkSource::Gclk0,
    );
}

#[test]
#[should_panic]
fn test_uart_shared_pin_rejected() {
    let _ = UartConf::new(
        Sercom::Sercom0,
        PinMux::new(pin!(PA, 10), Mux::C),
        RxPad::Rx3,
        PinMux::new(pin!(PA, 10), Mux::C),
        TxPad::Tx2,
        UartFlags::NONE,
        GclkSource::Gclk0,
    );
}

#[test]
#[should_panic]
fn test_uart_flow_control_pad_collision_rejected() {
    // RTS/CTS claim pads 2 and 3, so RX cannot sit on pad 3.
    let _ = UartConf::new(
        Sercom::Sercom0,
        PinMux::new(pin!(PA, 11), Mux::C),
        RxPad::Rx3,
        PinMux::new(pin!(PA, 10), Mux::C),
        TxPad::Tx0RtsCts,
        UartFlags::NONE,
        GclkSource::Gclk0,
    );
}

#[test]
#[should_panic]
fn test_spi_miso_inside_mosi_sck_pair_rejected() {
    let _ = SpiConf::new(
        Sercom::Sercom4,
        PinMux::new(pin!(PA, 12), Mux::D),
        MisoPad::Miso2,
        PinMux::new(pin!(PB, 10), Mux::D),
        PinMux::new(pin!(PB, 11), Mux::D),
        MosiSckPad::Mosi2Sck3,
    );
}

#[test]
#[should_panic]
fn test_pwm_duplicate_waveform_output_rejected() {
    let _ = PwmConf::new(
        Tcc::Tcc0,
        [
            PwmChannel::connected(pin!(PA, 6), Mux::E, 1),
            PwmChannel::connected(pin!(PA, 7), Mux::E, 1),
        ],
    );
}

#[test]
fn test_pwm_connected_skips_unwired_slots() {
    let conf = PwmConf::new(
        Tcc::Tcc0,
        [
            PwmChannel::Unconnected,
            PwmChannel::connected(pin!(PA, 7), Mux::E, 1),
            PwmChannel::Unconnected,
        ],
    );
    assert_eq!(conf.slots(), 3);
    let wired: Vec<_> = conf.connected().collect();
    assert_eq!(wired, vec![(PinMux::new(pin!(PA, 7), Mux::E), 1)]);
}

#[test]
fn test_uart_flags_composition() {
    let flags = UartFlags::RUN_STANDBY.union(UartFlags::WAKEUP);
    assert!(flags.contains(UartFlags::RUN_STANDBY));
    assert!(flags.contains(UartFlags::WAKEUP));
    assert_eq!(UartFlags::from_bits(flags.bits()), Some(flags));
    assert_eq!(UartFlags::from_bits(0xf0), None);
}

#[test]
fn test_timer_max_value_follows_width() {
    let t16 = TimerConf::new(Tc::Tc3, TimerWidth::Bits16, 2);
    let t32 = TimerConf::new(Tc::Tc4, TimerWidth::Bits32, 2);
    assert_eq!(t16.max_value(), 0xffff);
    assert_eq!(t32.max_value(), 0xffff_ffff);
    assert_eq!(t16.isr(), "isr_tc3");
    assert_eq!(t32.isr(), "isr_tc4");
}

#[test]
fn test_device_addresses_and_vectors() {
    assert_eq!(Sercom::Sercom0.addr(), 0x4200_0800);
    assert_eq!(Sercom::Sercom3.addr(), 0x4200_1400);
    assert_eq!(Sercom::Sercom0.irqn(), 9);
    assert_eq!(Sercom::Sercom0.isr(), "isr_sercom0");
    assert_eq!(Tcc::Tcc2.addr(), 0x4200_2800);
    assert_eq!(Tc::Tc3.addr(), 0x4200_2C00);
    assert_eq!(Tc::Tc4.irqn(), 19);
}

#[test]
fn test_pin_text_roundtrip_fuzzed() {
    init_logger();

    let mut rng = rand::thread_rng();
    let muxes = [
        Mux::A,
        Mux::B,
        Mux::C,
        Mux::D,
        Mux::E,
        Mux::F,
        Mux::G,
        Mux::H,
    ];

    for _ in 0..10000 {
        let port = if rng.gen() { Port::PA } else { Port::PB };
        let pin = Pin::new(port, rng.gen_range(0..32));
        let mux = muxes[rng.gen_range(0..muxes.len())];
        let pinmux = PinMux::new(pin, mux);

        let text = format!("{pinmux}");
        assert_eq!(PinMux::parse(&text), Some(pinmux), "round trip of {text}");
    }
}

#[test]
fn test_pin_parse_rejects_malformed() {
    assert_eq!(Pin::parse("PA2"), None); // one digit
    assert_eq!(Pin::parse("PC02"), None); // no such port
    assert_eq!(Pin::parse("PA32"), None); // out of range
    assert_eq!(Pin::parse("A02"), None);
    assert_eq!(PinMux::parse("PA02"), None); // missing mux
    assert_eq!(PinMux::parse("PA02:I"), None); // no such function
}

#[test]
fn test_uart_entry_roundtrip() {
    let conf = UartConf::new(
        Sercom::Sercom0,
        PinMux::new(pin!(PA, 11), Mux::C),
        RxPad::Rx3,
        PinMux::new(pin!(PA, 10), Mux::C),
        TxPad::Tx2,
        UartFlags::NONE,
        GclkSource::Gclk0,
    );
    let text = conf.encode();
    assert_eq!(text.as_str(), "sercom0 rx=PA11:C@rx3 tx=PA10:C@tx2 flags=0 gclk=gclk0");
    assert_eq!(UartConf::parse(&text), Some(conf));
}

#[test]
fn test_uart_parse_rejects_colliding_pads() {
    assert_eq!(
        UartConf::parse("sercom0 rx=PA11:C@rx0 tx=PA10:C@tx0 flags=0 gclk=gclk0"),
        None
    );
}

#[test]
fn test_spi_entry_roundtrip() {
    let conf = SpiConf::new(
        Sercom::Sercom4,
        PinMux::new(pin!(PA, 12), Mux::D),
        MisoPad::Miso0,
        PinMux::new(pin!(PB, 10), Mux::D),
        PinMux::new(pin!(PB, 11), Mux::D),
        MosiSckPad::Mosi2Sck3,
    );
    let text = conf.encode();
    assert_eq!(
        text.as_str(),
        "sercom4 miso=PA12:D@miso0 mosi=PB10:D clk=PB11:D pads=mosi2sck3"
    );
    assert_eq!(SpiConf::parse(&text), Some(conf));
}

#[test]
fn test_pwm_entry_roundtrip() {
    let conf = PwmConf::new(
        Tcc::Tcc0,
        [
            PwmChannel::Unconnected,
            PwmChannel::connected(pin!(PA, 7), Mux::E, 1),
        ],
    );
    let text = conf.encode();
    assert_eq!(text.as_str(), "tcc0 nc ch1=PA07:E");
    assert_eq!(PwmConf::parse(&text), Some(conf));

    // Slot count is part of the schema.
    assert_eq!(PwmConf::<3>::parse(&text), None);
}

#[test]
fn test_adc_channel_roundtrip() {
    let chan = AdcChanConf::new(pin!(PB, 2), MuxPos::pin(10));
    let text = chan.encode();
    assert_eq!(text.as_str(), "PB02@pin10");
    assert_eq!(AdcChanConf::parse(&text), Some(chan));
    assert_eq!(AdcChanConf::parse("PB02@pin20"), None);
}
