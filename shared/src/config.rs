use serde::{Deserialize, Serialize};

/// Timing and logging configuration for the hook runtime.
///
/// Every field has a default, so an empty JSON object (or no configuration at
/// all) reproduces the stock animation timings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    pub counter: CounterConfig,
    pub tooltip: TooltipConfig,
    pub progress: ProgressConfig,
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub tick_ms: u32,
    /// Number of ticks the count-up is spread over
    pub steps: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            tick_ms: 20,
            steps: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Delay before the fade-in styles are applied
    pub show_delay_ms: u32,
    /// Time between mouse-leave and node removal
    pub fade_ms: u32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 10,
            fade_ms: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub start_delay_ms: u32,
    /// CSS transition used for the initial fill animation
    pub transition: String,
    /// Duration of the click "press" feedback
    pub press_ms: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            start_delay_ms: 100,
            transition: "width 1.5s ease-out".to_string(),
            press_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl HookConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
