// ============================================================================
// EXPORT - Tabular records to a spreadsheet-friendly CSV download
// ============================================================================

/// Prefix that makes spreadsheet applications detect UTF-8
const UTF8_BOM: &str = "\u{feff}";

/// Rows that can be written as one line of a table
pub trait ExportRow {
    fn headers() -> Vec<&'static str>;
    fn cells(&self) -> Vec<String>;
}

/// Builds RFC 4180 CSV (CRLF line endings, BOM prefixed)
pub fn to_csv<R: ExportRow>(rows: &[R]) -> String {
    let mut out = String::from(UTF8_BOM);
    push_line(&mut out, R::headers().into_iter().map(str::to_string));
    for row in rows {
        push_line(&mut out, row.cells().into_iter());
    }
    out
}

fn push_line(out: &mut String, cells: impl Iterator<Item = String>) {
    let line: Vec<String> = cells.map(|cell| escape_cell(&cell)).collect();
    out.push_str(&line.join(","));
    out.push_str("\r\n");
}

fn escape_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// `users_2025-03-01.csv`
pub fn export_file_name(prefix: &str, date: chrono::NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

impl ExportRow for crate::models::User {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Username", "Email", "Phone", "Role"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            self.email.clone().unwrap_or_default(),
            self.phone.clone().unwrap_or_default(),
            self.role.to_string(),
        ]
    }
}

impl ExportRow for crate::models::Ticket {
    fn headers() -> Vec<&'static str> {
        vec!["Ticket", "Flight", "Passenger", "Seat", "Status", "Price"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.ticket_code.clone(),
            self.flight_number.clone().unwrap_or_else(|| self.flight_id.to_string()),
            self.passenger_name.clone().unwrap_or_default(),
            self.seat_number.clone().unwrap_or_default(),
            self.status.as_str().to_string(),
            self.price.map(|p| format!("{:.2}", p)).unwrap_or_default(),
        ]
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::download_csv;

#[cfg(target_arch = "wasm32")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    /// Triggers a browser download of `content` as `file_name`
    pub fn download_csv(file_name: &str, content: &str) -> Result<(), JsValue> {
        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let options = BlobPropertyBag::new();
        options.set_type("text/csv;charset=utf-8");
        let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = Url::create_object_url_with_blob(&blob)?;

        let document = crate::dom::document().ok_or_else(|| JsValue::from_str("No document"))?;
        let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();
        Url::revoke_object_url(&url)?;

        log::info!("📤 [EXPORT] {} downloaded", file_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{User, UserRole};

    #[test]
    fn csv_escapes_special_characters() {
        let users = vec![
            User {
                id: 1,
                username: "alice".into(),
                email: Some("alice@example.com".into()),
                phone: None,
                role: UserRole::Passenger,
                created_at: None,
            },
            User {
                id: 2,
                username: "o\"neil, jr".into(),
                email: None,
                phone: Some("line1\nline2".into()),
                role: UserRole::Admin,
                created_at: None,
            },
        ];

        let csv = to_csv(&users);
        let body = csv.strip_prefix(UTF8_BOM).unwrap();
        let mut lines = body.split("\r\n");
        assert_eq!(lines.next(), Some("ID,Username,Email,Phone,Role"));
        assert_eq!(lines.next(), Some("1,alice,alice@example.com,,PASSENGER"));
        assert_eq!(
            lines.next(),
            Some("2,\"o\"\"neil, jr\",,\"line1\nline2\",ADMIN")
        );
    }

    #[test]
    fn empty_export_still_has_headers() {
        let csv = to_csv::<User>(&[]);
        assert!(csv.ends_with("ID,Username,Email,Phone,Role\r\n"));
    }

    #[test]
    fn file_name_carries_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(export_file_name("users", date), "users_2025-03-01.csv");
    }
}
