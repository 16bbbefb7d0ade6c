// ============================================================================
// REGISTER VIEW - Passenger self-registration
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{input_value, on_click, on_submit, text_element, ElementBuilder};
use crate::models::RegisterRequest;
use crate::state::NoticeKind;
use crate::utils::navigation::Route;
use crate::views::shared::{labeled_input, report};

const FIELDS: [(&str, &str, &str, &str); 5] = [
    ("register-username", "Username", "text", "At least 3 characters"),
    ("register-email", "Email", "email", "you@example.com"),
    ("register-phone", "Phone", "tel", "+84 912 345 678"),
    ("register-full-name", "Full name", "text", "As printed on your passport"),
    ("register-password", "Password", "password", "At least 6 characters"),
];

pub fn render_register(ctx: &AppContext) -> Result<Element, JsValue> {
    let mut form = ElementBuilder::new("form")?.class("register-form");
    for (id, label, input_type, placeholder) in FIELDS {
        form = form.child(labeled_input(id, label, input_type, placeholder)?)?;
    }
    let form = form
        .child(
            ElementBuilder::new("button")?
                .attr("type", "submit")?
                .class("btn-primary")
                .text("Create account")
                .flag("disabled", ctx.state.is_busy())?
                .build(),
        )?
        .build();

    {
        let ctx = ctx.clone();
        on_submit(&form, move || submit_registration(&ctx))?;
    }

    let back = ElementBuilder::new("a")?
        .attr("href", Route::Login.path())?
        .class("link")
        .text("Already have an account? Sign in")
        .build();
    {
        let ctx = ctx.clone();
        on_click(&back, move |event| {
            event.prevent_default();
            ctx.navigate(Route::Login);
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(
            ElementBuilder::new("div")?
                .class("login-container")
                .child(text_element("h1", "", "Create your account")?)?
                .child(form)?
                .child(back)?
                .build(),
        )?
        .build())
}

fn submit_registration(ctx: &AppContext) {
    if ctx.state.is_busy() {
        return;
    }
    let request = RegisterRequest {
        username: input_value(FIELDS[0].0).trim().to_string(),
        email: input_value(FIELDS[1].0).trim().to_string(),
        phone: input_value(FIELDS[2].0).trim().to_string(),
        full_name: input_value(FIELDS[3].0).trim().to_string(),
        password: input_value(FIELDS[4].0),
    };
    if let Err(message) = request.validate() {
        ctx.state.show_notice(NoticeKind::Error, message);
        return;
    }

    ctx.state.clear_notice();
    ctx.state.set_busy(true);
    let ctx = ctx.clone();
    spawn_local(async move {
        let result = ctx.api().register(&request).await;
        ctx.state.set_busy(false);
        match result {
            Ok(user) => {
                log::info!("✅ [REGISTER] Account {} created", user.username);
                ctx.state.show_notice(
                    NoticeKind::Success,
                    "Account created. You can sign in now.",
                );
                ctx.navigate(Route::Login);
            }
            Err(e) => report(&ctx, &e),
        }
    });
}
