// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{input_value, on_click, on_submit, text_element, ElementBuilder};
use crate::state::NoticeKind;
use crate::utils::navigation::Route;
use crate::views::shared::labeled_input;

const USERNAME_ID: &str = "login-username";
const PASSWORD_ID: &str = "login-password";

pub fn render_login(ctx: &AppContext) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(text_element("div", "logo-icon", "✈️")?)?
        .child(text_element("h1", "", "SkyDesk")?)?
        .child(text_element("p", "", "Airline operations")?)?
        .build();

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text(if ctx.state.is_busy() { "Signing in…" } else { "Sign in" })
        .flag("disabled", ctx.state.is_busy())?
        .build();

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(labeled_input(USERNAME_ID, "Username", "text", "Enter your username")?)?
        .child(labeled_input(PASSWORD_ID, "Password", "password", "Enter your password")?)?
        .child(submit)?
        .build();

    {
        let ctx = ctx.clone();
        on_submit(&form, move || submit_login(&ctx))?;
    }

    let register_link = ElementBuilder::new("a")?
        .attr("href", Route::Register.path())?
        .class("link")
        .text("Create a passenger account")
        .build();
    {
        let ctx = ctx.clone();
        on_click(&register_link, move |event| {
            event.prevent_default();
            ctx.state.clear_notice();
            ctx.navigate(Route::Register);
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(
            ElementBuilder::new("div")?
                .class("login-container")
                .child(header)?
                .child(form)?
                .child(register_link)?
                .build(),
        )?
        .build())
}

fn submit_login(ctx: &AppContext) {
    if ctx.state.is_busy() {
        return;
    }
    let username = input_value(USERNAME_ID);
    let password = input_value(PASSWORD_ID);

    ctx.state.clear_notice();
    ctx.state.set_busy(true);

    let ctx = ctx.clone();
    spawn_local(async move {
        let result = ctx.session.login(&username, &password).await;
        ctx.state.set_busy(false);
        if let Err(e) = result {
            // shown verbatim: the server phrases credential rejections
            ctx.state.show_notice(NoticeKind::Error, e.user_message());
        }
    });
}
