//! Element behaviors for the server-rendered budget page, compiled to
//! WebAssembly: an animated budget counter, hover tooltips and animated
//! progress bars.
//!
//! The page creates one [`HookRuntime`] and asks it to `mount` a behavior by
//! name for every element carrying a hook attribute. See
//! `assets/live_hooks.js` for the glue used with a lifecycle-hook framework.

pub mod bindings;
pub mod error;
pub mod hooks;
pub mod services;

pub use bindings::{HookRuntime, MountedHook};
pub use error::{HookError, HookResult};
pub use hooks::{CounterAnimation, Hook, HookRegistry, ProgressAnimation, TooltipHover};
