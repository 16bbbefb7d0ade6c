// ============================================================================
// SHARED VIEW PIECES - Header, tables, form fields, error reporting
// ============================================================================

pub mod header;
pub mod table;

pub use header::render_header;
pub use table::{render_pager, render_table, Cell};

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{text_element, ElementBuilder};
use crate::error::ApiError;
use crate::state::NoticeKind;

/// `<label>` + `<input>` pair
pub fn labeled_input(id: &str, label: &str, input_type: &str, placeholder: &str) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", input_type)?
        .attr("name", id)?
        .attr("placeholder", placeholder)?
        .build();
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(label)?
        .child(input)?
        .build())
}

/// `<select>` with `(value, label)` options, the first one selected
pub fn labeled_select(id: &str, label: &str, options: &[(&str, &str)]) -> Result<Element, JsValue> {
    let mut select = ElementBuilder::new("select")?.id(id)?;
    for (value, text) in options {
        let option = ElementBuilder::new("option")?
            .attr("value", value)?
            .text(text)
            .build();
        select = select.child(option)?;
    }
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(label)?
        .child(select.build())?
        .build())
}

pub fn button(class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .attr("type", "button")?
        .class(class)
        .text(text)
        .build())
}

pub fn section(title: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("section")?
        .class("card")
        .child(text_element("h2", "card-title", title)?)?
        .build())
}

/// Shows a failed call in the notice banner. Cancelled loads and 401s
/// stay silent: the first belongs to a view that is gone, the second is
/// handled by the session.
pub fn report(ctx: &AppContext, err: &ApiError) {
    match err {
        ApiError::Cancelled | ApiError::Unauthorized => {
            log::debug!("[VIEW] Ignoring {}", err);
        }
        _ => {
            log::warn!("⚠️ [VIEW] {}", err);
            ctx.state.show_notice(NoticeKind::Error, err.user_message());
        }
    }
}

/// Replaces the contents of `container` with `child`
pub fn replace_with(container: &Element, child: &Element) -> Result<(), JsValue> {
    crate::dom::clear_children(container);
    crate::dom::append_child(container, child)
}

pub fn loading_placeholder() -> Result<Element, JsValue> {
    text_element("p", "loading", "Loading…")
}
