// ============================================================================
// PASSENGER DASHBOARD - Flight search, booking and "my tickets"
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppContext;
use crate::dom::{append_child, input_value, on_submit, select_value, text_element, ElementBuilder};
use crate::models::{BookingRequest, Flight, PaymentRequest, SeatClass, Ticket};
use crate::services::{FlightSearch, Query, SortDirection, TicketField};
use crate::state::NoticeKind;
use crate::views::shared::{
    button, labeled_input, loading_placeholder, render_pager, render_table, replace_with, report, section, Cell,
};

const ORIGIN_ID: &str = "search-origin";
const DESTINATION_ID: &str = "search-destination";
const DATE_ID: &str = "search-date";

/// Handles shared by the two sections
#[derive(Clone)]
struct Panels {
    ctx: AppContext,
    search: Rc<RefCell<FlightSearch>>,
    flights: Element,
    tickets: Element,
}

pub fn render_passenger_dashboard(ctx: &AppContext) -> Result<Element, JsValue> {
    let panels = Panels {
        ctx: ctx.clone(),
        search: Rc::new(RefCell::new(FlightSearch::default())),
        flights: ElementBuilder::new("div")?.class("flight-results").build(),
        tickets: ElementBuilder::new("div")?.class("ticket-list").build(),
    };

    let loyalty = ctx
        .state
        .auth
        .passenger()
        .map(|p| format!("Loyalty points: {}", p.loyalty_points))
        .unwrap_or_default();

    let form = ElementBuilder::new("form")?
        .class("search-form")
        .child(labeled_input(ORIGIN_ID, "From", "text", "HAN")?)?
        .child(labeled_input(DESTINATION_ID, "To", "text", "SGN")?)?
        .child(labeled_input(DATE_ID, "Date", "date", "")?)?
        .child(
            ElementBuilder::new("button")?
                .attr("type", "submit")?
                .class("btn-primary")
                .text("Search")
                .build(),
        )?
        .build();
    {
        let panels = panels.clone();
        on_submit(&form, move || {
            *panels.search.borrow_mut() = FlightSearch {
                origin: input_value(ORIGIN_ID).trim().to_string(),
                destination: input_value(DESTINATION_ID).trim().to_string(),
                date: NaiveDate::parse_from_str(&input_value(DATE_ID), "%Y-%m-%d").ok(),
            };
            load_flights(&panels, 0);
        })?;
    }

    let search_section = section("Find a flight")?;
    append_child(&search_section, &form)?;
    append_child(&search_section, &panels.flights)?;

    let tickets_section = section("My tickets")?;
    append_child(&tickets_section, &panels.tickets)?;

    load_flights(&panels, 0);
    load_tickets(&panels);

    Ok(ElementBuilder::new("div")?
        .class("dashboard passenger-dashboard")
        .child(text_element("p", "dashboard-subtitle", &loyalty)?)?
        .child(search_section)?
        .child(tickets_section)?
        .build())
}

fn load_flights(panels: &Panels, page: u32) {
    let query = panels.search.borrow().to_query().page(page);
    let token = panels.ctx.state.view_token();
    let panels = panels.clone();
    if let Ok(placeholder) = loading_placeholder() {
        let _ = replace_with(&panels.flights, &placeholder);
    }

    spawn_local(async move {
        match panels.ctx.api().search_flights(&query, &token).await {
            Ok(result) => {
                let rows = result
                    .content
                    .iter()
                    .map(|flight| flight_row(&panels, flight))
                    .collect::<Result<Vec<_>, JsValue>>();
                let rendered = rows.and_then(|rows| {
                    let table = render_table(
                        &["Flight", "Route", "Departure", "Duration", "Seats", "From", ""],
                        rows,
                        "No flights match your search.",
                    )?;
                    let pager = {
                        let panels = panels.clone();
                        render_pager(&result, move |target| load_flights(&panels, target))?
                    };
                    replace_with(&panels.flights, &table)?;
                    append_child(&panels.flights, &pager)
                });
                if let Err(e) = rendered {
                    log::error!("❌ [PASSENGER] Rendering flights failed: {:?}", e);
                }
            }
            Err(e) => report(&panels.ctx, &e),
        }
    });
}

fn flight_row(panels: &Panels, flight: &Flight) -> Result<Vec<Cell>, JsValue> {
    let class_id = format!("seat-class-{}", flight.id);
    let mut select = ElementBuilder::new("select")?.id(&class_id)?;
    for class in SeatClass::all() {
        select = select.child(
            ElementBuilder::new("option")?
                .attr("value", class.as_str())?
                .text(class.as_str())
                .build(),
        )?;
    }

    let book = {
        let panels = panels.clone();
        let flight_id = flight.id;
        let flight_number = flight.flight_number.clone();
        ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-small")
            .text("Book")
            .on_click(move |_| {
                let seat_class = SeatClass::parse(&select_value(&class_id)).unwrap_or(SeatClass::Economy);
                book(&panels, flight_id, &flight_number, seat_class);
            })?
            .build()
    };

    let actions = ElementBuilder::new("div")?
        .class("row-actions")
        .child(select.build())?
        .child(book)?
        .build();

    Ok(vec![
        Cell::from(flight.flight_number.as_str()),
        Cell::from(format!("{} → {}", flight.route.origin, flight.route.destination)),
        Cell::from(flight.departure_time.format("%Y-%m-%d %H:%M").to_string()),
        Cell::from(flight.duration_label()),
        Cell::from(flight.available_seats.map(|s| s.to_string()).unwrap_or_default()),
        Cell::from(flight.base_price.map(|p| format!("{:.2}", p)).unwrap_or_default()),
        Cell::from(actions),
    ])
}

fn book(panels: &Panels, flight_id: i64, flight_number: &str, seat_class: SeatClass) {
    let panels = panels.clone();
    let flight_number = flight_number.to_string();
    spawn_local(async move {
        let request = BookingRequest {
            flight_id,
            seat_class,
            seat_number: None,
        };
        match panels.ctx.api().book_ticket(&request).await {
            Ok(ticket) => {
                panels.ctx.state.show_notice(
                    NoticeKind::Success,
                    format!("Booked {} on {}", ticket.ticket_code, flight_number),
                );
                load_tickets(&panels);
            }
            Err(e) => report(&panels.ctx, &e),
        }
    });
}

fn load_tickets(panels: &Panels) {
    let query = Query::new()
        .size(50)
        .sort_by(TicketField::BookedAt, SortDirection::Desc);
    let token = panels.ctx.state.view_token();
    let panels = panels.clone();

    spawn_local(async move {
        match panels.ctx.api().my_tickets(&query, &token).await {
            Ok(page) => {
                let rendered = page
                    .content
                    .iter()
                    .map(|ticket| ticket_row(&panels, ticket))
                    .collect::<Result<Vec<_>, JsValue>>()
                    .and_then(|rows| {
                        render_table(
                            &["Ticket", "Flight", "Class", "Seat", "Status", "Price", ""],
                            rows,
                            "You have no tickets yet.",
                        )
                    })
                    .and_then(|table| replace_with(&panels.tickets, &table));
                if let Err(e) = rendered {
                    log::error!("❌ [PASSENGER] Rendering tickets failed: {:?}", e);
                }
            }
            Err(e) => report(&panels.ctx, &e),
        }
    });
}

#[derive(Clone, Copy)]
enum TicketAction {
    Pay,
    CheckIn,
    Cancel,
}

fn ticket_row(panels: &Panels, ticket: &Ticket) -> Result<Vec<Cell>, JsValue> {
    let mut actions = ElementBuilder::new("div")?.class("row-actions");
    let available = [
        (ticket.can_pay(), TicketAction::Pay, "Pay"),
        (ticket.can_check_in(), TicketAction::CheckIn, "Check in"),
        (ticket.can_cancel(), TicketAction::Cancel, "Cancel"),
    ];
    for (allowed, action, label) in available {
        if !allowed {
            continue;
        }
        let panels = panels.clone();
        let id = ticket.id;
        let btn = button("btn-small", label)?;
        crate::dom::on_click(&btn, move |_| run_ticket_action(&panels, id, action))?;
        actions = actions.child(btn)?;
    }

    Ok(vec![
        Cell::from(ticket.ticket_code.as_str()),
        Cell::from(ticket.flight_number.clone().unwrap_or_else(|| ticket.flight_id.to_string())),
        Cell::from(ticket.seat_class.map(|c| c.as_str()).unwrap_or("")),
        Cell::from(ticket.seat_number.clone().unwrap_or_default()),
        Cell::from(ticket.status.as_str()),
        Cell::from(ticket.price.map(|p| format!("{:.2}", p)).unwrap_or_default()),
        Cell::from(actions.build()),
    ])
}

fn run_ticket_action(panels: &Panels, id: i64, action: TicketAction) {
    let panels = panels.clone();
    spawn_local(async move {
        let api = panels.ctx.api();
        let result = match action {
            TicketAction::Pay => {
                api.pay_ticket(id, &PaymentRequest { method: "CARD".to_string() })
                    .await
            }
            TicketAction::CheckIn => api.check_in(id).await,
            TicketAction::Cancel => api.cancel_ticket(id).await,
        };
        match result {
            Ok(ticket) => {
                panels.ctx.state.show_notice(
                    NoticeKind::Success,
                    format!("Ticket {} is now {}", ticket.ticket_code, ticket.status.as_str()),
                );
                load_tickets(&panels);
            }
            Err(e) => report(&panels.ctx, &e),
        }
    });
}
