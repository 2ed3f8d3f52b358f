//! Peripheral binding tables for the Adafruit Feather M0.
//!
//! Array order is the instance numbering the driver layer sees: reordering a
//! table renumbers devices for every consumer. Counts are derived from the
//! tables, never written by hand. Enabling or disabling an instance means
//! editing the array literal; there is no feature-gated membership.

#![no_std]

use fugit::HertzU32;
use periphmap::adc::{
    AdcChanConf, AdcCommon, AdcGain, AdcNegInput, AdcPrescaler, AdcReference, MuxPos,
};
use periphmap::clock::{CoreClock, GclkSource};
use periphmap::device::{Sercom, Tc, Tcc};
use periphmap::gpio::{Mux, PinMux};
use periphmap::i2c::I2cConf;
use periphmap::pin;
use periphmap::pwm::{PwmChannel, PwmConf};
use periphmap::rtc::{RtcConf, RtcMode, RttConf};
use periphmap::spi::{MisoPad, MosiSckPad, SpiConf};
use periphmap::timer::{TimerConf, TimerWidth};
use periphmap::uart::{RxPad, TxPad, UartConf, UartFlags};

/// The PLL fed by the internal oscillator, the default for this board: a
/// wider frequency range and a more stable clock with less jitter than
/// running the 8 MHz oscillator directly.
pub const CLOCK: CoreClock = CoreClock::Pll { mul: 47, div: 1 };

/// Resolved core frequency, fixed for the life of the system.
pub const CORE_CLOCK: HertzU32 = CLOCK.hertz();

pub const TIMER_CONFIG: [TimerConf; 2] = [
    TimerConf::new(Tc::Tc3, TimerWidth::Bits16, 2),
    // 32-bit mode chains TC5 as the high half.
    TimerConf::new(Tc::Tc4, TimerWidth::Bits32, 2),
];

pub const TIMER_NUMOF: usize = TIMER_CONFIG.len();

pub const UART_CONFIG: [UartConf; 1] = [UartConf::new(
    Sercom::Sercom0,
    PinMux::new(pin!(PA, 11), Mux::C),
    RxPad::Rx3,
    PinMux::new(pin!(PA, 10), Mux::C),
    TxPad::Tx2,
    UartFlags::NONE,
    GclkSource::Gclk0,
)];

pub const UART_NUMOF: usize = UART_CONFIG.len();

pub const PWM_MAX_CHANNELS: usize = 2;

pub const PWM_CONFIG: [PwmConf<PWM_MAX_CHANNELS>; 2] = [
    PwmConf::new(
        Tcc::Tcc0,
        [
            PwmChannel::Unconnected,
            PwmChannel::connected(pin!(PA, 7), Mux::E, 1), // ~9
        ],
    ),
    PwmConf::new(
        Tcc::Tcc2,
        [
            PwmChannel::connected(pin!(PA, 16), Mux::E, 0), // ~11
            PwmChannel::Unconnected,
        ],
    ),
];

pub const PWM_NUMOF: usize = PWM_CONFIG.len();

/// Analog channel table. Order fixes the A0..A5 labels application code
/// uses; channel 0 is the first entry.
pub const ADC_CHANNELS: [AdcChanConf; 6] = [
    AdcChanConf::new(pin!(PA, 2), MuxPos::pin(0)),  // A0
    AdcChanConf::new(pin!(PB, 8), MuxPos::pin(2)),  // A1
    AdcChanConf::new(pin!(PB, 9), MuxPos::pin(3)),  // A2
    AdcChanConf::new(pin!(PA, 4), MuxPos::pin(4)),  // A3
    AdcChanConf::new(pin!(PA, 5), MuxPos::pin(5)),  // A4
    AdcChanConf::new(pin!(PB, 2), MuxPos::pin(10)), // A5
];

pub const ADC_NUMOF: usize = ADC_CHANNELS.len();

pub const ADC_COMMON: AdcCommon = AdcCommon {
    gclk_src: GclkSource::Gclk0,
    prescaler: AdcPrescaler::Div512,
    neg_input: AdcNegInput::Gnd,
    gain: AdcGain::X1,
    reference: AdcReference::Int1V,
};

pub const SPI_CONFIG: [SpiConf; 1] = [SpiConf::new(
    Sercom::Sercom4,
    PinMux::new(pin!(PA, 12), Mux::D),
    MisoPad::Miso0,
    PinMux::new(pin!(PB, 10), Mux::D),
    PinMux::new(pin!(PB, 11), Mux::D),
    MosiSckPad::Mosi2Sck3,
)];

pub const SPI_NUMOF: usize = SPI_CONFIG.len();

pub const I2C_CONFIG: I2cConf = I2cConf::new(
    Sercom::Sercom3,
    PinMux::new(pin!(PA, 22), Mux::C),
    PinMux::new(pin!(PA, 23), Mux::C),
    1,
);

pub const RTC_CONFIG: RtcConf = RtcConf {
    mode: RtcMode::Calendar,
};

pub const RTT_CONFIG: RttConf = RttConf {
    frequency: HertzU32::from_raw(32_768),
    max_value: 0xffff_ffff,
    irq_prio: 10,
    run_standby: true,
};

/// Vector symbols the driver layer must define for this board's
/// interrupt-driven instances.
pub const REQUIRED_ISRS: [&str; TIMER_NUMOF + UART_NUMOF + 2] = required_isrs();

const fn required_isrs() -> [&'static str; TIMER_NUMOF + UART_NUMOF + 2] {
    let mut out = [""; TIMER_NUMOF + UART_NUMOF + 2];
    let mut n = 0;
    let mut i = 0;
    while i < TIMER_NUMOF {
        out[n] = TIMER_CONFIG[i].isr();
        n += 1;
        i += 1;
    }
    let mut i = 0;
    while i < UART_NUMOF {
        out[n] = UART_CONFIG[i].isr();
        n += 1;
        i += 1;
    }
    out[n] = I2C_CONFIG.isr();
    out[n + 1] = RTT_CONFIG.isr();
    out
}

/// Logs one line per bound instance; meant for the driver layer's boot path.
pub fn log_layout() {
    CLOCK.warn_if_slow();
    log::info!("core clock: {} Hz", CORE_CLOCK.raw());
    for (i, timer) in TIMER_CONFIG.iter().enumerate() {
        log::info!(
            "timer{}: {} max={:#x}",
            i,
            timer.dev,
            timer.max_value()
        );
    }
    for (i, uart) in UART_CONFIG.iter().enumerate() {
        log::info!("uart{}: {}", i, uart.encode());
    }
    for (i, pwm) in PWM_CONFIG.iter().enumerate() {
        log::info!("pwm{}: {}", i, pwm.encode());
    }
    for (i, chan) in ADC_CHANNELS.iter().enumerate() {
        log::info!("adc channel {}: {}", i, chan.encode());
    }
    for (i, spi) in SPI_CONFIG.iter().enumerate() {
        log::info!("spi{}: {}", i, spi.encode());
    }
    log::info!(
        "i2c0: {} sda={} scl={}",
        I2C_CONFIG.dev,
        I2C_CONFIG.sda,
        I2C_CONFIG.scl
    );
}
