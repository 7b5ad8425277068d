use std::cell::Cell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use shared::{format_cents, CounterConfig, CounterState, ElementAttributes};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use super::Hook;
use crate::error::HookResult;
use crate::services::{dom, logging::Logger};

pub const DISPLAY_SELECTOR: &str = "#budget-amount";

/// Counts the `#budget-amount` display up from `$0.00` to `data-value` cents.
pub struct CounterAnimation {
    config: CounterConfig,
    /// Cleared to stop the running count-up loop
    running: Option<Rc<Cell<bool>>>,
}

impl CounterAnimation {
    pub const NAME: &'static str = "CounterAnimation";

    pub fn new(config: CounterConfig) -> Self {
        Self {
            config,
            running: None,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.running.as_ref().is_some_and(|running| running.get())
    }

    fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.set(false);
        }
    }
}

impl Hook for CounterAnimation {
    fn mounted(&mut self, el: &HtmlElement, attrs: &ElementAttributes) -> HookResult<()> {
        self.stop();

        let Some(display) = dom::query_html(el, DISPLAY_SELECTOR)? else {
            Logger::debug_with_component("counter-animation", "no #budget-amount display, skipping");
            return Ok(());
        };

        let mut counter = CounterState::new(attrs.target_cents(), self.config.steps);
        if counter.is_complete() {
            display.set_text_content(Some(&format_cents(counter.current())));
            return Ok(());
        }

        let running = Rc::new(Cell::new(true));
        self.running = Some(running.clone());
        let tick_ms = self.config.tick_ms;

        Logger::debug_with_component(
            "counter-animation",
            &format!("counting to {} in steps of {}", counter.target(), counter.increment()),
        );

        spawn_local(async move {
            while running.get() {
                TimeoutFuture::new(tick_ms).await;
                if !running.get() {
                    break;
                }

                let value = counter.advance();
                display.set_text_content(Some(&format_cents(value)));

                if counter.is_complete() {
                    running.set(false);
                }
            }
        });

        Ok(())
    }

    fn destroyed(&mut self) {
        self.stop();
    }
}

impl Drop for CounterAnimation {
    fn drop(&mut self) {
        self.stop();
    }
}
