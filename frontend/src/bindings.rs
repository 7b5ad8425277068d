use shared::HookConfig;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::error::HookError;
use crate::hooks::{Hook, HookRegistry};
use crate::services::{dom, logging::Logger};

/// Entry point for the page's hook glue.
///
/// One runtime is created at startup with the default registry; each hooked
/// element then gets its own `MountedHook` from `mount`.
#[wasm_bindgen]
pub struct HookRuntime {
    registry: HookRegistry,
    config: HookConfig,
}

#[wasm_bindgen]
impl HookRuntime {
    /// Create a runtime from an optional JSON configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<HookRuntime, JsError> {
        console_error_panic_hook::set_once();

        let config = match config_json.as_deref() {
            Some(json) => HookConfig::from_json(json).map_err(HookError::from)?,
            None => HookConfig::default(),
        };
        Ok(Self::with_registry(HookRegistry::with_defaults(), config))
    }

    /// Attach the behavior registered as `name` to `el` and run its `mounted` step.
    pub fn mount(&self, name: &str, el: HtmlElement) -> Result<MountedHook, JsError> {
        let hook = self
            .registry
            .create(name, &self.config)
            .ok_or_else(|| HookError::UnknownHook(name.to_string()))?;
        Ok(MountedHook::attach(name, el, hook))
    }

    #[wasm_bindgen(js_name = hookNames)]
    pub fn hook_names(&self) -> js_sys::Array {
        self.registry.names().map(JsValue::from).collect()
    }
}

impl HookRuntime {
    pub fn with_registry(registry: HookRegistry, config: HookConfig) -> Self {
        Logger::set_level(config.log_level);
        Self { registry, config }
    }

    pub fn config(&self) -> &HookConfig {
        &self.config
    }
}

/// A behavior bound to one element. Dropping it (or calling `free()` from
/// JavaScript) releases every timer, listener and node the behavior created.
#[wasm_bindgen]
pub struct MountedHook {
    name: String,
    el: HtmlElement,
    hook: Box<dyn Hook>,
}

#[wasm_bindgen]
impl MountedHook {
    pub fn updated(&mut self) {
        let attrs = dom::read_attributes(&self.el);
        if let Err(e) = self.hook.updated(&self.el, &attrs) {
            self.report("updated", &e);
        }
    }

    pub fn destroyed(&mut self) {
        self.hook.destroyed();
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.name.clone()
    }
}

impl MountedHook {
    pub fn attach(name: &str, el: HtmlElement, mut hook: Box<dyn Hook>) -> Self {
        let attrs = dom::read_attributes(&el);
        let result = hook.mounted(&el, &attrs);

        let mounted = Self {
            name: name.to_string(),
            el,
            hook,
        };
        if let Err(e) = result {
            mounted.report("mounted", &e);
        }
        mounted
    }

    #[cfg(test)]
    fn element(&self) -> &HtmlElement {
        &self.el
    }

    fn report(&self, phase: &str, error: &HookError) {
        Logger::warn_with_component(&self.name, &format!("{} failed: {}", phase, error));
    }
}

impl Drop for MountedHook {
    fn drop(&mut self) {
        self.hook.destroyed();
    }
}
