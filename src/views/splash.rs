use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{text_element, ElementBuilder};

/// Shown while the stored session is being checked
pub fn render_splash() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("splash")
        .attr("aria-busy", "true")?
        .child(text_element("div", "splash-logo", "✈️")?)?
        .child(text_element("p", "splash-text", "Loading your session…")?)?
        .build())
}
