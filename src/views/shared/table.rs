use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{text_element, ElementBuilder};
use crate::models::Page;

/// One table cell: plain text or a prebuilt element (buttons, selects)
pub enum Cell {
    Text(String),
    Node(Element),
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Element> for Cell {
    fn from(element: Element) -> Self {
        Self::Node(element)
    }
}

pub fn render_table(headers: &[&str], rows: Vec<Vec<Cell>>, empty_text: &str) -> Result<Element, JsValue> {
    if rows.is_empty() {
        return text_element("p", "empty-state", empty_text);
    }

    let mut head_row = ElementBuilder::new("tr")?;
    for header in headers {
        head_row = head_row.child(text_element("th", "", header)?)?;
    }

    let mut body = ElementBuilder::new("tbody")?;
    for row in rows {
        let mut tr = ElementBuilder::new("tr")?;
        for cell in row {
            let td = match cell {
                Cell::Text(text) => text_element("td", "", &text)?,
                Cell::Node(node) => ElementBuilder::new("td")?.child(node)?.build(),
            };
            tr = tr.child(td)?;
        }
        body = body.child(tr.build())?;
    }

    Ok(ElementBuilder::new("table")?
        .class("data-table")
        .child(ElementBuilder::new("thead")?.child(head_row.build())?.build())?
        .child(body.build())?
        .build())
}

/// "Previous · Page x of y · Next"; `on_page` receives the 0-based target
pub fn render_pager<T, F>(page: &Page<T>, on_page: F) -> Result<Element, JsValue>
where
    F: Fn(u32) + Clone + 'static,
{
    let current = page.page;
    let total = page.total_pages().max(1);

    let prev = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-page")
        .text("‹ Previous")
        .flag("disabled", !page.has_previous())?;
    let prev = {
        let on_page = on_page.clone();
        prev.on_click(move |_| on_page(current.saturating_sub(1)))?
    };

    let next = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-page")
        .text("Next ›")
        .flag("disabled", !page.has_next())?
        .on_click(move |_| on_page(current + 1))?;

    Ok(ElementBuilder::new("div")?
        .class("pager")
        .child(prev.build())?
        .child(text_element(
            "span",
            "pager-label",
            &format!("Page {} of {} · {} results", current + 1, total, page.total_elements),
        )?)?
        .child(next.build())?
        .build())
}
