use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failures inside the hook runtime.
///
/// Behaviors propagate these with `?`; `MountedHook` logs and drops them so a
/// broken element never takes the page down. Only configuration and hook
/// lookup errors reach JavaScript.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("DOM operation failed: {0}")]
    Dom(String),
    #[error("unknown hook: {0}")]
    UnknownHook(String),
    #[error("invalid hook configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for HookError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|error| String::from(error.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        HookError::Dom(message)
    }
}

pub type HookResult<T> = Result<T, HookError>;
