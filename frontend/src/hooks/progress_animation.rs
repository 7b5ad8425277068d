use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use shared::{width_css, ElementAttributes, ProgressConfig};
use web_sys::HtmlElement;

use super::Hook;
use crate::error::HookResult;
use crate::services::{dom, logging::Logger};

pub const FILL_SELECTOR: &str = ".progress-fill";

/// Animates `.progress-fill` from empty to `data-percentage` and gives the
/// host a short press effect on click.
pub struct ProgressAnimation {
    config: ProgressConfig,
    fill_timer: Option<Timeout>,
    press_timer: Rc<RefCell<Option<Timeout>>>,
    click: Option<EventListener>,
}

impl ProgressAnimation {
    pub const NAME: &'static str = "ProgressAnimation";

    pub fn new(config: ProgressConfig) -> Self {
        Self {
            config,
            fill_timer: None,
            press_timer: Rc::new(RefCell::new(None)),
            click: None,
        }
    }

    fn press(host: &HtmlElement, press_timer: &RefCell<Option<Timeout>>, press_ms: u32) -> HookResult<()> {
        dom::set_styles(host, &[("transform", "scale(0.98)")])?;

        let host = host.clone();
        *press_timer.borrow_mut() = Some(Timeout::new(press_ms, move || {
            let released = dom::set_styles(
                &host,
                &[("transform", "scale(1)"), ("transition", "transform 0.1s ease-out")],
            );
            if let Err(e) = released {
                Logger::warn_with_component("progress-animation", &format!("press release failed: {}", e));
            }
        }));
        Ok(())
    }
}

impl Hook for ProgressAnimation {
    fn mounted(&mut self, el: &HtmlElement, attrs: &ElementAttributes) -> HookResult<()> {
        let Some(fill) = dom::query_html(el, FILL_SELECTOR)? else {
            Logger::debug_with_component("progress-animation", "no .progress-fill element, skipping");
            return Ok(());
        };

        let width = width_css(attrs.target_percentage());
        dom::set_styles(&fill, &[("width", "0%"), ("transition", "none")])?;

        let transition = self.config.transition.clone();
        self.fill_timer = Some(Timeout::new(self.config.start_delay_ms, move || {
            let filled = dom::set_styles(&fill, &[("transition", transition.as_str()), ("width", width.as_str())]);
            if let Err(e) = filled {
                Logger::warn_with_component("progress-animation", &format!("fill animation failed: {}", e));
            }
        }));

        let host = el.clone();
        let press_timer = Rc::clone(&self.press_timer);
        let press_ms = self.config.press_ms;
        self.click = Some(EventListener::new(el, "click", move |_event| {
            if let Err(e) = ProgressAnimation::press(&host, &press_timer, press_ms) {
                Logger::warn_with_component("progress-animation", &format!("press feedback failed: {}", e));
            }
        }));

        Ok(())
    }

    fn updated(&mut self, el: &HtmlElement, attrs: &ElementAttributes) -> HookResult<()> {
        let Some(fill) = dom::query_html(el, FILL_SELECTOR)? else {
            return Ok(());
        };

        // a still pending mount animation would overwrite the new width
        self.fill_timer = None;
        let width = width_css(attrs.target_percentage());
        dom::set_styles(&fill, &[("width", width.as_str())])
    }

    fn destroyed(&mut self) {
        self.click = None;
        self.fill_timer = None;
        self.press_timer.borrow_mut().take();
    }
}

impl Drop for ProgressAnimation {
    fn drop(&mut self) {
        self.destroyed();
    }
}
