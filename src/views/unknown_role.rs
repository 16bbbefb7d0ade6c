use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{text_element, ElementBuilder};

/// Signed in, but the account's role has no dashboard in this client
pub fn render_unknown_role(ctx: &AppContext, role: &str) -> Result<Element, JsValue> {
    log::warn!("🚫 [SHELL] No dashboard for role '{}'", role);

    let logout = {
        let ctx = ctx.clone();
        ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-primary")
            .text("Log out")
            .on_click(move |_| ctx.session.logout())?
            .build()
    };

    Ok(ElementBuilder::new("div")?
        .class("error-screen")
        .child(text_element("h2", "", "No workspace for this account")?)?
        .child(text_element(
            "p",
            "",
            &format!(
                "Your account has the role \"{}\", which this application does not support. \
                 Contact an administrator or sign in with another account.",
                role
            ),
        )?)?
        .child(logout)?
        .build())
}
