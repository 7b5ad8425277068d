//! Target-independent logic for the budget page hooks: attribute parsing,
//! currency formatting, counter stepping, progress clamping, tooltip session
//! tracking and the runtime configuration types.

pub mod attributes;
pub mod config;
pub mod counter;
pub mod currency;
pub mod progress;
pub mod tooltip;

pub use attributes::{parse_float_lenient, parse_int_lenient, ElementAttributes};
pub use config::{CounterConfig, HookConfig, LogLevel, ProgressConfig, TooltipConfig};
pub use counter::CounterState;
pub use currency::format_cents;
pub use progress::{fill_width, width_css, MAX_PERCENTAGE};
pub use tooltip::TooltipTracker;
