// ============================================================================
// CREW DASHBOARD - Flight hours and assignment roster
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, text_element, ElementBuilder};
use crate::models::Assignment;
use crate::views::shared::{loading_placeholder, render_table, replace_with, report, section, Cell};

pub fn render_crew_dashboard(ctx: &AppContext) -> Result<Element, JsValue> {
    let employee = ctx.state.auth.employee();

    let mut counters = ElementBuilder::new("div")?.class("stat-tiles");
    if let Some(employee) = &employee {
        let tiles = [
            ("Position", employee.position.to_string()),
            ("Total flight hours", format!("{:.1}", employee.flight_hours)),
            ("This month", format!("{:.1}", employee.monthly_flight_hours)),
        ];
        for (label, value) in tiles {
            counters = counters.child(
                ElementBuilder::new("div")?
                    .class("stat-tile")
                    .child(text_element("span", "stat-value", &value)?)?
                    .child(text_element("span", "stat-label", label)?)?
                    .build(),
            )?;
        }
    }

    let hours = section("Flight hours")?;
    append_child(&hours, &counters.build())?;

    let roster = ElementBuilder::new("div")?.class("roster").build();
    append_child(&roster, &loading_placeholder()?)?;
    let roster_section = section("My assignments")?;
    append_child(&roster_section, &roster)?;

    load_roster(ctx, &roster);

    Ok(ElementBuilder::new("div")?
        .class("dashboard crew-dashboard")
        .child(hours)?
        .child(roster_section)?
        .build())
}

fn load_roster(ctx: &AppContext, container: &Element) {
    let token = ctx.state.view_token();
    let ctx = ctx.clone();
    let container = container.clone();
    spawn_local(async move {
        match ctx.api().my_assignments(&token).await {
            Ok(mut assignments) => {
                assignments.sort_by_key(|a| a.departure_time);
                let rows = assignments.iter().map(roster_row).collect();
                let rendered = render_table(
                    &["Flight", "Role", "Departure", "Arrival", "Block hours"],
                    rows,
                    "No upcoming assignments.",
                )
                .and_then(|table| replace_with(&container, &table));
                if let Err(e) = rendered {
                    log::error!("❌ [CREW] Rendering roster failed: {:?}", e);
                }
            }
            Err(e) => report(&ctx, &e),
        }
    });
}

fn roster_row(assignment: &Assignment) -> Vec<Cell> {
    let time = |t: Option<chrono::DateTime<chrono::Utc>>| {
        t.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    };
    vec![
        Cell::from(
            assignment
                .flight_number
                .clone()
                .unwrap_or_else(|| assignment.flight_id.to_string()),
        ),
        Cell::from(assignment.role.as_ref().map(|r| r.to_string()).unwrap_or_default()),
        Cell::from(time(assignment.departure_time)),
        Cell::from(time(assignment.arrival_time)),
        Cell::from(
            assignment
                .block_hours()
                .map(|h| format!("{:.1}", h))
                .unwrap_or_default(),
        ),
    ]
}
