// ============================================================================
// STAFF DASHBOARD - Ticket desk: lookup, check-in, baggage
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, input_value, on_click, on_submit, text_element, ElementBuilder};
use crate::models::{Baggage, NewBaggage, Ticket};
use crate::services::{Query, SortDirection, TicketField};
use crate::state::NoticeKind;
use crate::utils::export::{export_file_name, to_csv};
use crate::views::shared::{
    button, labeled_input, loading_placeholder, render_pager, render_table, replace_with, report, section, Cell,
};

const LOOKUP_ID: &str = "ticket-lookup";

#[derive(Clone)]
struct Desk {
    ctx: AppContext,
    term: Rc<RefCell<String>>,
    visible: Rc<RefCell<Vec<Ticket>>>,
    results: Element,
    baggage: Element,
}

pub fn render_staff_dashboard(ctx: &AppContext) -> Result<Element, JsValue> {
    let desk = Desk {
        ctx: ctx.clone(),
        term: Rc::new(RefCell::new(String::new())),
        visible: Rc::new(RefCell::new(Vec::new())),
        results: ElementBuilder::new("div")?.class("ticket-results").build(),
        baggage: ElementBuilder::new("div")?.class("baggage-panel").build(),
    };

    let form = ElementBuilder::new("form")?
        .class("search-form")
        .child(labeled_input(
            LOOKUP_ID,
            "Ticket code or passenger name",
            "search",
            "TK-1042 or Nguyen",
        )?)?
        .child(
            ElementBuilder::new("button")?
                .attr("type", "submit")?
                .class("btn-primary")
                .text("Look up")
                .build(),
        )?
        .build();
    {
        let desk = desk.clone();
        on_submit(&form, move || {
            *desk.term.borrow_mut() = input_value(LOOKUP_ID).trim().to_string();
            load_tickets(&desk, 0);
        })?;
    }

    let export = button("btn-secondary", "Export CSV")?;
    {
        let desk = desk.clone();
        on_click(&export, move |_| export_visible(&desk))?;
    }

    let lookup = section("Ticket lookup")?;
    append_child(&lookup, &form)?;
    append_child(&lookup, &desk.results)?;
    append_child(&lookup, &export)?;

    let baggage = section("Baggage")?;
    append_child(&baggage, &desk.baggage)?;
    append_child(
        &desk.baggage,
        &text_element("p", "empty-state", "Select a ticket to register baggage.")?,
    )?;

    load_tickets(&desk, 0);

    Ok(ElementBuilder::new("div")?
        .class("dashboard staff-dashboard")
        .child(lookup)?
        .child(baggage)?
        .build())
}

/// Codes look like `TK-…`; anything else searches passenger names
fn lookup_query(term: &str) -> Query<TicketField> {
    let query = Query::new().sort_by(TicketField::BookedAt, SortDirection::Desc);
    if term.to_ascii_uppercase().starts_with("TK") {
        query.starts_with(TicketField::TicketCode, &term.to_ascii_uppercase())
    } else {
        query.contains_if(TicketField::PassengerName, term)
    }
}

fn load_tickets(desk: &Desk, page: u32) {
    let query = lookup_query(&desk.term.borrow()).page(page);
    let token = desk.ctx.state.view_token();
    let desk = desk.clone();
    if let Ok(placeholder) = loading_placeholder() {
        let _ = replace_with(&desk.results, &placeholder);
    }

    spawn_local(async move {
        match desk.ctx.api().list_tickets(&query, &token).await {
            Ok(result) => {
                *desk.visible.borrow_mut() = result.content.clone();
                let rendered = result
                    .content
                    .iter()
                    .map(|ticket| ticket_row(&desk, ticket))
                    .collect::<Result<Vec<_>, JsValue>>()
                    .and_then(|rows| {
                        let table = render_table(
                            &["Ticket", "Passenger", "Flight", "Seat", "Status", ""],
                            rows,
                            "No tickets found.",
                        )?;
                        let pager = {
                            let desk = desk.clone();
                            render_pager(&result, move |target| load_tickets(&desk, target))?
                        };
                        replace_with(&desk.results, &table)?;
                        append_child(&desk.results, &pager)
                    });
                if let Err(e) = rendered {
                    log::error!("❌ [STAFF] Rendering tickets failed: {:?}", e);
                }
            }
            Err(e) => report(&desk.ctx, &e),
        }
    });
}

fn ticket_row(desk: &Desk, ticket: &Ticket) -> Result<Vec<Cell>, JsValue> {
    let mut actions = ElementBuilder::new("div")?.class("row-actions");
    if ticket.can_check_in() {
        let desk = desk.clone();
        let id = ticket.id;
        let check_in = button("btn-small", "Check in")?;
        on_click(&check_in, move |_| check_in_ticket(&desk, id))?;
        actions = actions.child(check_in)?;
    }
    {
        let desk = desk.clone();
        let ticket = ticket.clone();
        let bags = button("btn-small", "Baggage")?;
        on_click(&bags, move |_| show_baggage(&desk, &ticket))?;
        actions = actions.child(bags)?;
    }

    Ok(vec![
        Cell::from(ticket.ticket_code.as_str()),
        Cell::from(ticket.passenger_name.clone().unwrap_or_default()),
        Cell::from(ticket.flight_number.clone().unwrap_or_else(|| ticket.flight_id.to_string())),
        Cell::from(ticket.seat_number.clone().unwrap_or_default()),
        Cell::from(ticket.status.as_str()),
        Cell::from(actions.build()),
    ])
}

fn check_in_ticket(desk: &Desk, id: i64) {
    let desk = desk.clone();
    spawn_local(async move {
        match desk.ctx.api().check_in(id).await {
            Ok(ticket) => {
                desk.ctx
                    .state
                    .show_notice(NoticeKind::Success, format!("{} checked in", ticket.ticket_code));
                load_tickets(&desk, 0);
            }
            Err(e) => report(&desk.ctx, &e),
        }
    });
}

fn show_baggage(desk: &Desk, ticket: &Ticket) {
    let desk = desk.clone();
    let ticket = ticket.clone();
    let token = desk.ctx.state.view_token();
    spawn_local(async move {
        match desk.ctx.api().list_baggage(ticket.id).await {
            Ok(_) if token.is_cancelled() => {}
            Ok(pieces) => {
                if let Err(e) = render_baggage(&desk, &ticket, &pieces) {
                    log::error!("❌ [STAFF] Rendering baggage failed: {:?}", e);
                }
            }
            Err(e) => report(&desk.ctx, &e),
        }
    });
}

fn render_baggage(desk: &Desk, ticket: &Ticket, pieces: &[Baggage]) -> Result<(), JsValue> {
    let rows = pieces
        .iter()
        .map(|piece| {
            vec![
                Cell::from(piece.tag_number.clone().unwrap_or_default()),
                Cell::from(format!("{:.1} kg", piece.weight_kg)),
                Cell::from(format!("{:.2}", piece.fee)),
                Cell::from(piece.status.clone().unwrap_or_default()),
            ]
        })
        .collect();
    let table = render_table(&["Tag", "Weight", "Fee", "Status"], rows, "No baggage checked yet.")?;

    let weight_id = format!("baggage-weight-{}", ticket.id);
    let form = ElementBuilder::new("form")?
        .class("inline-form")
        .child(labeled_input(&weight_id, "Weight (kg)", "number", "23")?)?
        .child(
            ElementBuilder::new("button")?
                .attr("type", "submit")?
                .class("btn-primary")
                .text("Add piece")
                .build(),
        )?
        .build();
    {
        let desk = desk.clone();
        let ticket = ticket.clone();
        on_submit(&form, move || {
            match input_value(&weight_id).trim().parse::<f64>() {
                Ok(weight_kg) => add_piece(&desk, &ticket, weight_kg),
                Err(_) => desk
                    .ctx
                    .state
                    .show_notice(NoticeKind::Error, "Enter the weight in kilograms"),
            }
        })?;
    }

    let panel = ElementBuilder::new("div")?
        .child(text_element("h3", "", &format!("Ticket {}", ticket.ticket_code))?)?
        .child(table)?
        .child(form)?
        .build();
    replace_with(&desk.baggage, &panel)
}

fn add_piece(desk: &Desk, ticket: &Ticket, weight_kg: f64) {
    let desk = desk.clone();
    let ticket = ticket.clone();
    spawn_local(async move {
        let request = NewBaggage {
            ticket_id: ticket.id,
            weight_kg,
        };
        match desk.ctx.api().add_baggage(&request).await {
            Ok(piece) => {
                desk.ctx.state.show_notice(
                    NoticeKind::Success,
                    format!("Baggage added, fee {:.2}", piece.fee),
                );
                show_baggage(&desk, &ticket);
            }
            Err(e) => report(&desk.ctx, &e),
        }
    });
}

fn export_visible(desk: &Desk) {
    let tickets = desk.visible.borrow();
    let csv = to_csv(tickets.as_slice());
    let name = export_file_name("tickets", chrono::Utc::now().date_naive());
    if let Err(e) = crate::utils::export::download_csv(&name, &csv) {
        log::error!("❌ [STAFF] CSV export failed: {:?}", e);
        desk.ctx
            .state
            .show_notice(NoticeKind::Error, "The export could not be downloaded");
    }
}
