use std::collections::BTreeMap;

use shared::{ElementAttributes, HookConfig};
use web_sys::HtmlElement;

use crate::error::HookResult;

pub mod counter_animation;
pub mod progress_animation;
pub mod tooltip_hover;

pub use counter_animation::CounterAnimation;
pub use progress_animation::ProgressAnimation;
pub use tooltip_hover::TooltipHover;

/// Lifecycle interface every element behavior implements.
///
/// `attrs` is read fresh from the bound element before each call. An instance
/// owns whatever nodes, timers and listeners it creates and must release all
/// of them in `destroyed`.
pub trait Hook {
    fn mounted(&mut self, el: &HtmlElement, attrs: &ElementAttributes) -> HookResult<()>;

    fn updated(&mut self, _el: &HtmlElement, _attrs: &ElementAttributes) -> HookResult<()> {
        Ok(())
    }

    fn destroyed(&mut self) {}
}

pub type HookFactory = fn(&HookConfig) -> Box<dyn Hook>;

/// Explicit name -> behavior mapping, filled in at startup.
#[derive(Clone, Default)]
pub struct HookRegistry {
    factories: BTreeMap<String, HookFactory>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the three budget page behaviors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(CounterAnimation::NAME, |config| {
            Box::new(CounterAnimation::new(config.counter.clone()))
        });
        registry.register(TooltipHover::NAME, |config| {
            Box::new(TooltipHover::new(config.tooltip.clone()))
        });
        registry.register(ProgressAnimation::NAME, |config| {
            Box::new(ProgressAnimation::new(config.progress.clone()))
        });
        registry
    }

    /// Register `factory` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: &str, factory: HookFactory) {
        self.factories.insert(name.to_string(), factory);
    }

    pub fn create(&self, name: &str, config: &HookConfig) -> Option<Box<dyn Hook>> {
        self.factories.get(name).map(|factory| factory(config))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}
