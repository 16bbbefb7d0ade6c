// ============================================================================
// APP VIEW - Shell layout around the selected view
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, clear_children, text_element, ElementBuilder};
use crate::viewmodels::ShellView;
use crate::views::{
    render_admin_dashboard, render_crew_dashboard, render_login, render_passenger_dashboard,
    render_register, render_splash, render_staff_dashboard, render_unknown_role,
};
use crate::views::shared::render_header;

pub const NOTICE_ID: &str = "notice-banner";

pub fn render_app(ctx: &AppContext, view: &ShellView) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?.class("app-shell").build();

    if let Some(session) = ctx.state.auth.session() {
        append_child(&shell, &render_header(ctx, &session)?)?;
    }

    let notice = ElementBuilder::new("div")?.id(NOTICE_ID)?.build();
    fill_notice(ctx, &notice)?;
    append_child(&shell, &notice)?;

    let content = match view {
        ShellView::Splash => render_splash()?,
        ShellView::Login => render_login(ctx)?,
        ShellView::Register => render_register(ctx)?,
        ShellView::PassengerDashboard => render_passenger_dashboard(ctx)?,
        ShellView::StaffDashboard => render_staff_dashboard(ctx)?,
        ShellView::AdminDashboard => render_admin_dashboard(ctx)?,
        ShellView::CrewDashboard => render_crew_dashboard(ctx)?,
        ShellView::UnknownRole(role) => render_unknown_role(ctx, role)?,
    };
    let main = ElementBuilder::new("main")?
        .class("app-main")
        .child(content)?
        .build();
    append_child(&shell, &main)?;

    Ok(shell)
}

/// Redraws only the banner, leaving the rest of the page alone
pub fn update_notice(ctx: &AppContext) -> Result<(), JsValue> {
    match crate::dom::get_element_by_id(NOTICE_ID) {
        Some(container) => fill_notice(ctx, &container),
        None => Ok(()),
    }
}

fn fill_notice(ctx: &AppContext, container: &Element) -> Result<(), JsValue> {
    clear_children(container);
    let Some(notice) = ctx.state.notice.borrow().clone() else {
        return Ok(());
    };

    let dismiss = {
        let ctx = ctx.clone();
        ElementBuilder::new("button")?
            .attr("type", "button")?
            .attr("aria-label", "Dismiss")?
            .class("notice-dismiss")
            .text("×")
            .on_click(move |_| ctx.state.clear_notice())?
            .build()
    };
    let banner = ElementBuilder::new("div")?
        .class(notice.kind.css_class())
        .attr("role", "status")?
        .child(text_element("span", "notice-text", &notice.text)?)?
        .child(dismiss)?
        .build();
    append_child(container, &banner)
}
