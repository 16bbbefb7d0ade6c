// ============================================================================
// ADMIN DASHBOARD - Statistics, users, aircraft
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Datelike;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlSelectElement};

use crate::app::AppContext;
use crate::dom::{append_child, on_change, on_click, select_value, text_element, ElementBuilder};
use crate::models::{Aircraft, StatisticsOverview, User, UserRole};
use crate::services::{AircraftField, Query, SortDirection, UserField};
use crate::state::NoticeKind;
use crate::utils::export::{export_file_name, to_csv};
use crate::views::shared::{
    button, labeled_select, loading_placeholder, render_pager, render_table, replace_with, report, section, Cell,
};

const ROLE_FILTER_ID: &str = "user-role-filter";

#[derive(Clone)]
struct Console {
    ctx: AppContext,
    role_filter: Rc<RefCell<Option<UserRole>>>,
    visible_users: Rc<RefCell<Vec<User>>>,
    stats: Element,
    users: Element,
    aircraft: Element,
}

pub fn render_admin_dashboard(ctx: &AppContext) -> Result<Element, JsValue> {
    let console = Console {
        ctx: ctx.clone(),
        role_filter: Rc::new(RefCell::new(None)),
        visible_users: Rc::new(RefCell::new(Vec::new())),
        stats: ElementBuilder::new("div")?.class("stats-grid").build(),
        users: ElementBuilder::new("div")?.class("user-table").build(),
        aircraft: ElementBuilder::new("div")?.class("aircraft-table").build(),
    };

    let stats_section = section("Overview")?;
    append_child(&stats_section, &console.stats)?;

    let roles = UserRole::all();
    let mut role_options = vec![("", "All roles")];
    role_options.extend(roles.iter().map(|role| (role.as_str(), role.as_str())));
    let role_filter = labeled_select(ROLE_FILTER_ID, "Role", &role_options)?;
    {
        let console = console.clone();
        on_change(&role_filter, move |_| {
            let raw = select_value(ROLE_FILTER_ID);
            *console.role_filter.borrow_mut() = (!raw.is_empty()).then(|| UserRole::from(raw));
            load_users(&console, 0);
        })?;
    }
    let export = button("btn-secondary", "Export CSV")?;
    {
        let console = console.clone();
        on_click(&export, move |_| export_users(&console))?;
    }
    let toolbar = ElementBuilder::new("div")?
        .class("toolbar")
        .child(role_filter)?
        .child(export)?
        .build();

    let users_section = section("Users")?;
    append_child(&users_section, &toolbar)?;
    append_child(&users_section, &console.users)?;

    let aircraft_section = section("Fleet")?;
    append_child(&aircraft_section, &console.aircraft)?;

    load_statistics(&console);
    load_users(&console, 0);
    load_aircraft(&console);

    Ok(ElementBuilder::new("div")?
        .class("dashboard admin-dashboard")
        .child(stats_section)?
        .child(users_section)?
        .child(aircraft_section)?
        .build())
}

fn load_statistics(console: &Console) {
    let token = console.ctx.state.view_token();
    let console = console.clone();
    spawn_local(async move {
        let api = console.ctx.api();
        let overview = match api.overview(&token).await {
            Ok(overview) => overview,
            Err(e) => return report(&console.ctx, &e),
        };
        let year = chrono::Utc::now().year();
        let months = match api.revenue_by_month(year, &token).await {
            Ok(months) => months,
            Err(e) => {
                report(&console.ctx, &e);
                Vec::new()
            }
        };

        let rendered = render_stats(&overview).and_then(|grid| {
            let rows = months
                .iter()
                .map(|m| {
                    vec![
                        Cell::from(m.month.as_str()),
                        Cell::from(m.tickets.to_string()),
                        Cell::from(format!("{:.2}", m.revenue)),
                    ]
                })
                .collect();
            let table = render_table(&["Month", "Tickets", "Revenue"], rows, "No revenue recorded this year.")?;
            replace_with(&console.stats, &grid)?;
            append_child(&console.stats, &table)
        });
        if let Err(e) = rendered {
            log::error!("❌ [ADMIN] Rendering statistics failed: {:?}", e);
        }
    });
}

fn render_stats(overview: &StatisticsOverview) -> Result<Element, JsValue> {
    let tiles = [
        ("Users", overview.total_users.to_string()),
        ("Flights", overview.total_flights.to_string()),
        ("Tickets sold", overview.tickets_sold.to_string()),
        ("Revenue", format!("{:.2}", overview.total_revenue)),
        ("Active aircraft", overview.active_aircraft.to_string()),
    ];
    let mut grid = ElementBuilder::new("div")?.class("stat-tiles");
    for (label, value) in tiles {
        grid = grid.child(
            ElementBuilder::new("div")?
                .class("stat-tile")
                .child(text_element("span", "stat-value", &value)?)?
                .child(text_element("span", "stat-label", label)?)?
                .build(),
        )?;
    }
    Ok(grid.build())
}

fn load_users(console: &Console, page: u32) {
    let role = console.role_filter.borrow().clone();
    let query = Query::new()
        .page(page)
        .sort_by(UserField::Username, SortDirection::Asc)
        .eq_if(UserField::Role, role.map(String::from));
    let token = console.ctx.state.view_token();
    let console = console.clone();
    if let Ok(placeholder) = loading_placeholder() {
        let _ = replace_with(&console.users, &placeholder);
    }

    spawn_local(async move {
        match console.ctx.api().list_users(&query, &token).await {
            Ok(result) => {
                *console.visible_users.borrow_mut() = result.content.clone();
                let rendered = result
                    .content
                    .iter()
                    .map(|user| user_row(&console, user))
                    .collect::<Result<Vec<_>, JsValue>>()
                    .and_then(|rows| {
                        let table = render_table(
                            &["ID", "Username", "Email", "Phone", "Role", ""],
                            rows,
                            "No users match this filter.",
                        )?;
                        let pager = {
                            let console = console.clone();
                            render_pager(&result, move |target| load_users(&console, target))?
                        };
                        replace_with(&console.users, &table)?;
                        append_child(&console.users, &pager)
                    });
                if let Err(e) = rendered {
                    log::error!("❌ [ADMIN] Rendering users failed: {:?}", e);
                }
            }
            Err(e) => report(&console.ctx, &e),
        }
    });
}

fn user_row(console: &Console, user: &User) -> Result<Vec<Cell>, JsValue> {
    let mut select = ElementBuilder::new("select")?.class("role-select");
    for role in UserRole::all() {
        let mut option = ElementBuilder::new("option")?
            .attr("value", role.as_str())?
            .text(role.as_str());
        if role == user.role {
            option = option.attr("selected", "")?;
        }
        select = select.child(option.build())?;
    }
    let select = select.build();
    {
        let console = console.clone();
        let user_id = user.id;
        on_change(&select, move |event| {
            let Some(value) = event
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
                .map(|select| select.value())
            else {
                return;
            };
            change_role(&console, user_id, UserRole::from(value));
        })?;
    }

    let delete = button("btn-small btn-danger", "Delete")?;
    {
        let console = console.clone();
        let user_id = user.id;
        let username = user.username.clone();
        on_click(&delete, move |_| delete_user(&console, user_id, &username))?;
    }

    Ok(vec![
        Cell::from(user.id.to_string()),
        Cell::from(user.username.as_str()),
        Cell::from(user.email.clone().unwrap_or_default()),
        Cell::from(user.phone.clone().unwrap_or_default()),
        Cell::from(select),
        Cell::from(delete),
    ])
}

fn change_role(console: &Console, user_id: i64, role: UserRole) {
    let console = console.clone();
    spawn_local(async move {
        match console.ctx.api().update_user_role(user_id, role).await {
            Ok(user) => console.ctx.state.show_notice(
                NoticeKind::Success,
                format!("{} is now {}", user.username, user.role),
            ),
            Err(e) => {
                report(&console.ctx, &e);
                load_users(&console, 0);
            }
        }
    });
}

fn delete_user(console: &Console, user_id: i64, username: &str) {
    let confirmed = crate::dom::window()
        .and_then(|w| w.confirm_with_message(&format!("Delete user {}?", username)).ok())
        .unwrap_or(false);
    if !confirmed {
        return;
    }
    let console = console.clone();
    spawn_local(async move {
        match console.ctx.api().delete_user(user_id).await {
            Ok(()) => {
                console
                    .ctx
                    .state
                    .show_notice(NoticeKind::Success, "User deleted");
                load_users(&console, 0);
            }
            Err(e) => report(&console.ctx, &e),
        }
    });
}

fn load_aircraft(console: &Console) {
    let query = Query::new()
        .size(50)
        .sort_by(AircraftField::Registration, SortDirection::Asc);
    let token = console.ctx.state.view_token();
    let console = console.clone();
    spawn_local(async move {
        match console.ctx.api().list_aircraft(&query, &token).await {
            Ok(page) => {
                let rows = page.content.iter().map(aircraft_row).collect();
                let rendered = render_table(
                    &["Registration", "Model", "Manufacturer", "Seats", "Status"],
                    rows,
                    "No aircraft registered.",
                )
                .and_then(|table| replace_with(&console.aircraft, &table));
                if let Err(e) = rendered {
                    log::error!("❌ [ADMIN] Rendering fleet failed: {:?}", e);
                }
            }
            Err(e) => report(&console.ctx, &e),
        }
    });
}

fn aircraft_row(aircraft: &Aircraft) -> Vec<Cell> {
    vec![
        Cell::from(aircraft.registration.as_str()),
        Cell::from(aircraft.model.as_str()),
        Cell::from(aircraft.manufacturer.clone().unwrap_or_default()),
        Cell::from(aircraft.total_seats.to_string()),
        Cell::from(aircraft.status.clone().unwrap_or_default()),
    ]
}

fn export_users(console: &Console) {
    let users = console.visible_users.borrow();
    let csv = to_csv(users.as_slice());
    let name = export_file_name("users", chrono::Utc::now().date_naive());
    if let Err(e) = crate::utils::export::download_csv(&name, &csv) {
        log::error!("❌ [ADMIN] CSV export failed: {:?}", e);
        console
            .ctx
            .state
            .show_notice(NoticeKind::Error, "The export could not be downloaded");
    }
}
