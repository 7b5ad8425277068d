use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use shared::{ElementAttributes, TooltipConfig, TooltipTracker};
use web_sys::HtmlElement;

use super::Hook;
use crate::error::HookResult;
use crate::services::{dom, logging::Logger};

const TOOLTIP_CLASS: &str =
    "absolute z-50 px-3 py-2 text-sm bg-gray-900 text-white rounded-lg shadow-lg pointer-events-none";
const ARROW_CLASS: &str = "absolute top-full left-1/2 transform -translate-x-1/2";
const HIDDEN_TRANSFORM: &str = "translateX(-50%) translateY(-4px)";
const SHOWN_TRANSFORM: &str = "translateX(-50%) translateY(-8px)";

/// Floating `data-tooltip` label shown above the host while hovered.
pub struct TooltipHover {
    config: TooltipConfig,
    state: Rc<RefCell<TooltipState>>,
    listeners: Vec<EventListener>,
}

#[derive(Default)]
struct TooltipState {
    tracker: TooltipTracker,
    node: Option<HtmlElement>,
    show_timer: Option<Timeout>,
    removal_timer: Option<Timeout>,
}

impl TooltipState {
    /// Cancel pending timers and take the current node out of the document.
    fn clear(&mut self) {
        self.show_timer = None;
        self.removal_timer = None;
        if let Some(node) = self.node.take() {
            if let Err(e) = dom::detach(&node) {
                Logger::warn_with_component("tooltip-hover", &format!("failed to remove tooltip: {}", e));
            }
        }
    }
}

impl TooltipHover {
    pub const NAME: &'static str = "TooltipHover";

    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            state: Rc::new(RefCell::new(TooltipState::default())),
            listeners: Vec::new(),
        }
    }

    /// The tooltip node currently owned by this instance.
    pub fn tooltip_node(&self) -> Option<HtmlElement> {
        self.state.borrow().node.clone()
    }

    fn show(state: &Rc<RefCell<TooltipState>>, host: &HtmlElement, config: &TooltipConfig) -> HookResult<()> {
        let message = dom::read_attributes(host).tooltip;

        let mut current = state.borrow_mut();
        if current.tracker.enter(message.as_deref()).is_none() {
            return Ok(());
        }
        // a node from the previous session may still be fading out
        current.clear();

        let tooltip = build_tooltip(message.as_deref().unwrap_or_default())?;
        dom::set_styles(host, &[("position", "relative")])?;
        host.append_child(&tooltip)?;
        dom::set_styles(&tooltip, &[("opacity", "0"), ("transform", HIDDEN_TRANSFORM)])?;

        let fading_in = tooltip.clone();
        current.show_timer = Some(Timeout::new(config.show_delay_ms, move || {
            let shown = dom::set_styles(
                &fading_in,
                &[
                    ("opacity", "1"),
                    ("transform", SHOWN_TRANSFORM),
                    ("transition", "all 0.2s ease-out"),
                ],
            );
            if let Err(e) = shown {
                Logger::warn_with_component("tooltip-hover", &format!("fade-in failed: {}", e));
            }
        }));
        current.node = Some(tooltip);
        Ok(())
    }

    fn hide(state: &Rc<RefCell<TooltipState>>, config: &TooltipConfig) -> HookResult<()> {
        let mut current = state.borrow_mut();
        let Some(node) = current.node.clone() else {
            return Ok(());
        };
        let Some(generation) = current.tracker.leave() else {
            return Ok(());
        };

        current.show_timer = None;
        dom::set_styles(&node, &[("opacity", "0"), ("transform", HIDDEN_TRANSFORM)])?;

        let state_handle = Rc::clone(state);
        current.removal_timer = Some(Timeout::new(config.fade_ms, move || {
            let mut current = state_handle.borrow_mut();
            if !current.tracker.should_remove(generation) {
                return;
            }
            if let Some(node) = current.node.take() {
                if let Err(e) = dom::detach(&node) {
                    Logger::warn_with_component("tooltip-hover", &format!("failed to remove tooltip: {}", e));
                }
            }
        }));
        Ok(())
    }
}

fn build_tooltip(message: &str) -> HookResult<HtmlElement> {
    let document = dom::document()?;

    let tooltip = dom::create_div(&document)?;
    tooltip.set_class_name(TOOLTIP_CLASS);
    dom::set_styles(
        &tooltip,
        &[
            ("bottom", "100%"),
            ("left", "50%"),
            ("transform", SHOWN_TRANSFORM),
            ("white-space", "nowrap"),
        ],
    )?;
    tooltip.set_text_content(Some(message));

    let arrow = dom::create_div(&document)?;
    arrow.set_class_name(ARROW_CLASS);
    dom::set_styles(
        &arrow,
        &[
            ("width", "0"),
            ("height", "0"),
            ("border-left", "4px solid transparent"),
            ("border-right", "4px solid transparent"),
            ("border-top", "4px solid #111827"),
        ],
    )?;
    tooltip.append_child(&arrow)?;

    Ok(tooltip)
}

impl Hook for TooltipHover {
    fn mounted(&mut self, el: &HtmlElement, _attrs: &ElementAttributes) -> HookResult<()> {
        self.listeners.clear();

        let enter = {
            let state = Rc::clone(&self.state);
            let host = el.clone();
            let config = self.config.clone();
            EventListener::new(el, "mouseenter", move |_event| {
                if let Err(e) = TooltipHover::show(&state, &host, &config) {
                    Logger::warn_with_component("tooltip-hover", &format!("failed to show tooltip: {}", e));
                }
            })
        };

        let leave = {
            let state = Rc::clone(&self.state);
            let config = self.config.clone();
            EventListener::new(el, "mouseleave", move |_event| {
                if let Err(e) = TooltipHover::hide(&state, &config) {
                    Logger::warn_with_component("tooltip-hover", &format!("failed to hide tooltip: {}", e));
                }
            })
        };

        self.listeners = vec![enter, leave];
        Ok(())
    }

    fn destroyed(&mut self) {
        self.listeners.clear();
        self.state.borrow_mut().clear();
    }
}

impl Drop for TooltipHover {
    fn drop(&mut self) {
        self.destroyed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Event;

    wasm_bindgen_test_configure!(run_in_browser);

    fn tooltip_host(message: Option<&str>) -> HtmlElement {
        let document = dom::document().unwrap();
        let host = dom::create_div(&document).unwrap();
        if let Some(message) = message {
            host.dataset().set("tooltip", message).unwrap();
        }
        document.body().unwrap().append_child(&host).unwrap();
        host
    }

    fn mounted_hook(host: &HtmlElement) -> TooltipHover {
        let mut hook = TooltipHover::new(TooltipConfig::default());
        hook.mounted(host, &dom::read_attributes(host)).unwrap();
        hook
    }

    fn fire(host: &HtmlElement, event_type: &str) {
        host.dispatch_event(&Event::new(event_type).unwrap()).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_missing_message_creates_no_node() {
        for message in [None, Some("")] {
            let host = tooltip_host(message);
            let hook = mounted_hook(&host);

            fire(&host, "mouseenter");

            assert_eq!(host.child_element_count(), 0);
            assert!(hook.tooltip_node().is_none());
        }
    }

    #[wasm_bindgen_test]
    fn test_hover_creates_single_label_with_arrow() {
        let host = tooltip_host(Some("Monthly budget"));
        let hook = mounted_hook(&host);

        fire(&host, "mouseenter");

        assert_eq!(host.child_element_count(), 1);
        let tooltip = hook.tooltip_node().unwrap();
        assert_eq!(tooltip.text_content().as_deref(), Some("Monthly budget"));
        assert_eq!(tooltip.child_element_count(), 1);
        assert_eq!(dom::style_value(&host, "position"), "relative");
        assert_eq!(dom::style_value(&tooltip, "opacity"), "0");
    }

    #[wasm_bindgen_test]
    async fn test_fades_in_after_delay() {
        let host = tooltip_host(Some("Monthly budget"));
        let hook = mounted_hook(&host);

        fire(&host, "mouseenter");
        TimeoutFuture::new(50).await;

        let tooltip = hook.tooltip_node().unwrap();
        assert_eq!(dom::style_value(&tooltip, "opacity"), "1");
        assert_eq!(dom::style_value(&tooltip, "transform"), SHOWN_TRANSFORM);
    }

    #[wasm_bindgen_test]
    async fn test_leave_removes_label_after_fade() {
        let host = tooltip_host(Some("Monthly budget"));
        let hook = mounted_hook(&host);

        fire(&host, "mouseenter");
        fire(&host, "mouseleave");
        assert_eq!(host.child_element_count(), 1);

        TimeoutFuture::new(300).await;
        assert_eq!(host.child_element_count(), 0);
        assert!(hook.tooltip_node().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_quick_leave_is_not_faded_back_in() {
        let host = tooltip_host(Some("Monthly budget"));
        let hook = mounted_hook(&host);

        fire(&host, "mouseenter");
        let tooltip = hook.tooltip_node().unwrap();
        fire(&host, "mouseleave");

        // past the fade-in delay, before the removal
        TimeoutFuture::new(50).await;
        assert!(tooltip.parent_node().is_some());
        assert_eq!(dom::style_value(&tooltip, "opacity"), "0");
        assert_eq!(dom::style_value(&tooltip, "transform"), HIDDEN_TRANSFORM);
    }

    #[wasm_bindgen_test]
    async fn test_reentry_during_fade_keeps_new_label() {
        let host = tooltip_host(Some("Monthly budget"));
        let hook = mounted_hook(&host);

        fire(&host, "mouseenter");
        let first = hook.tooltip_node().unwrap();
        fire(&host, "mouseleave");
        fire(&host, "mouseenter");

        let second = hook.tooltip_node().unwrap();
        assert_ne!(first, second);
        assert!(first.parent_node().is_none());
        assert_eq!(host.child_element_count(), 1);

        TimeoutFuture::new(300).await;
        assert!(hook.tooltip_node().is_some());
        assert_eq!(host.child_element_count(), 1);
    }

    #[wasm_bindgen_test]
    fn test_destroyed_removes_label_and_listeners() {
        let host = tooltip_host(Some("Monthly budget"));
        let mut hook = mounted_hook(&host);

        fire(&host, "mouseenter");
        hook.destroyed();
        assert_eq!(host.child_element_count(), 0);

        fire(&host, "mouseenter");
        assert_eq!(host.child_element_count(), 0);
    }
}
