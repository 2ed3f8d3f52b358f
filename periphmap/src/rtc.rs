//! RTC and RTT configuration. The SAMD21 has one RTC block; it runs either
//! as a calendar (RTC) or as a free-running 32-bit counter (RTT), so both
//! records describe the same hardware in different modes.

use fugit::HertzU32;

/// RTC register block base address.
pub const RTC_ADDR: u32 = 0x4000_1400;
/// NVIC line shared by all RTC modes.
pub const RTC_IRQN: u8 = 3;
/// Vector symbol for the shared RTC interrupt.
pub const RTC_ISR: &str = "isr_rtc";

/// Operating mode of the RTC block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcMode {
    /// MODE0, 32-bit counter (the RTT personality).
    Count32,
    /// MODE2, clock/calendar.
    Calendar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtcConf {
    pub mode: RtcMode,
}

/// Real-time-timer personality of the RTC block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RttConf {
    pub frequency: HertzU32,
    pub max_value: u32,
    pub irq_prio: u8,
    /// Keep the counter running in standby sleep states.
    pub run_standby: bool,
}

impl RttConf {
    /// Vector symbol the driver layer must define when the RTT is enabled.
    pub const fn isr(self) -> &'static str {
        RTC_ISR
    }
}
