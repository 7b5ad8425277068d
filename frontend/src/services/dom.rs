use shared::ElementAttributes;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::error::{HookError, HookResult};

pub fn document() -> HookResult<Document> {
    web_sys::window()
        .ok_or(HookError::NoWindow)?
        .document()
        .ok_or(HookError::NoDocument)
}

/// Snapshot of the `data-*` attributes the hooks read.
pub fn read_attributes(el: &HtmlElement) -> ElementAttributes {
    let dataset = el.dataset();
    ElementAttributes {
        value: dataset.get("value"),
        tooltip: dataset.get("tooltip"),
        percentage: dataset.get("percentage"),
    }
}

/// First descendant of `el` matching `selector`, if any.
pub fn query_html(el: &Element, selector: &str) -> HookResult<Option<HtmlElement>> {
    Ok(el
        .query_selector(selector)?
        .and_then(|found| found.dyn_into::<HtmlElement>().ok()))
}

pub fn create_div(document: &Document) -> HookResult<HtmlElement> {
    document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| HookError::Dom("created element is not an HTMLElement".to_string()))
}

/// Apply inline style properties in order.
pub fn set_styles(el: &HtmlElement, properties: &[(&str, &str)]) -> HookResult<()> {
    let style = el.style();
    for (name, value) in properties {
        style.set_property(name, value)?;
    }
    Ok(())
}

#[cfg(test)]
pub fn style_value(el: &HtmlElement, name: &str) -> String {
    el.style().get_property_value(name).unwrap_or_default()
}

/// Detach `node` from its parent, if it still has one.
pub fn detach(node: &Element) -> HookResult<()> {
    if let Some(parent) = node.parent_node() {
        parent.remove_child(node)?;
    }
    Ok(())
}
