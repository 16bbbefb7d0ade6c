use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{text_element, ElementBuilder};
use crate::state::Session;

/// Top bar: brand, signed-in user and the logout button
pub fn render_header(ctx: &AppContext, session: &Session) -> Result<Element, JsValue> {
    let brand = text_element("h1", "brand", "✈️ SkyDesk")?;

    let who = ElementBuilder::new("div")?
        .class("header-user")
        .child(text_element("span", "user-name", session.display_name())?)?
        .child(text_element("span", "user-role", session.role().as_str())?)?
        .build();

    let logout = {
        let ctx = ctx.clone();
        ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-logout")
            .text("Log out")
            .on_click(move |_| ctx.session.logout())?
            .build()
    };

    Ok(ElementBuilder::new("header")?
        .class("app-header")
        .child(brand)?
        .child(who)?
        .child(logout)?
        .build())
}
