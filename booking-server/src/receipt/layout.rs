//! Receipt layout
//!
//! Produces a renderer-independent list of lines. The renderer decides
//! fonts, spacing and page breaks.

use chrono::NaiveDate;
use shared::models::PaymentStatus;

use crate::auth::CurrentUser;
use crate::booking::BookingView;
use crate::utils::time::format_date;

/// One logical line of a receipt
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Title(String),
    Heading(String),
    /// `label: value`
    Field { label: String, value: String },
    Text(String),
    Separator,
    Blank,
}

/// Fluent line builder
#[derive(Debug, Default)]
pub struct ReceiptBuilder {
    lines: Vec<Line>,
}

impl ReceiptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: &str) -> &mut Self {
        self.lines.push(Line::Title(s.to_string()));
        self
    }

    pub fn heading(&mut self, s: &str) -> &mut Self {
        self.lines.push(Line::Heading(s.to_string()));
        self
    }

    pub fn field(&mut self, label: &str, value: impl ToString) -> &mut Self {
        self.lines.push(Line::Field {
            label: label.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Field that is left out when the value is blank
    pub fn field_if_present(&mut self, label: &str, value: &str) -> &mut Self {
        if !value.trim().is_empty() {
            self.field(label, value.trim());
        }
        self
    }

    pub fn text(&mut self, s: &str) -> &mut Self {
        self.lines.push(Line::Text(s.to_string()));
        self
    }

    pub fn separator(&mut self) -> &mut Self {
        self.lines.push(Line::Separator);
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(Line::Blank);
        self
    }

    pub fn build(self) -> Vec<Line> {
        self.lines
    }
}

/// A laid-out receipt, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptDocument {
    pub title: String,
    pub file_name: String,
    pub lines: Vec<Line>,
}

pub const PROFORMA_TITLE: &str = "PROFORMA INVOICE";
pub const RECEIPT_TITLE: &str = "PAYMENT RECEIPT";
pub const PROFORMA_NOTE: &str =
    "This is a proforma invoice and not a confirmation of payment.";

/// Anything other than a paid booking gets the proforma variant
pub fn is_proforma(status: PaymentStatus) -> bool {
    !status.is_paid()
}

/// `[Proforma-]Receipt-Booking-<key>.pdf`
///
/// Imported keys may hold quotes or control characters; anything outside
/// `[A-Za-z0-9_-]` becomes `_` so the name is always a valid header value.
pub fn receipt_file_name(booking_key: &str, status: PaymentStatus) -> String {
    let prefix = if is_proforma(status) { "Proforma-" } else { "" };
    let key: String = booking_key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}Receipt-Booking-{}.pdf", prefix, key)
}

/// Lay out the receipt for a booking
///
/// Customer details come from the caller's identity, not the user record.
pub fn build_receipt(
    view: &BookingView,
    customer: &CurrentUser,
    generated_on: NaiveDate,
    currency: &str,
) -> ReceiptDocument {
    let booking = &view.booking;
    let status = booking.payment_status;
    let title = if is_proforma(status) {
        PROFORMA_TITLE
    } else {
        RECEIPT_TITLE
    };

    let mut b = ReceiptBuilder::new();
    b.title(title)
        .field("Booking reference", booking.id_string())
        .field("Generated on", format_date(generated_on))
        .separator();

    b.heading("Customer")
        .field("Name", customer.display_name())
        .field("Email", &customer.email)
        .field_if_present("Contact", &customer.contactno)
        .blank();

    b.heading("Event")
        .field_if_present("Event", view.eventname.as_deref().unwrap_or_default())
        .field("Event date", format_date(booking.event_date))
        .field_if_present("Start time", &booking.start_at)
        .field("Duration (hours)", booking.max_total_hour)
        .field("Guests", booking.no_of_guest)
        .blank();

    b.heading("Services")
        .field_if_present("Hotel", view.hotel_name.as_deref().unwrap_or_default())
        .field_if_present("Catering", view.catername.as_deref().unwrap_or_default())
        .field_if_present("Photographer", &booking.photographer_name_desc)
        .field_if_present("DJ", &booking.dj_name_desc)
        .field_if_present("Makeup artist", &booking.makeupartist_name_desc)
        .field_if_present("Decorator", &booking.decorator_name_desc)
        .separator();

    b.field("Amount", format!("{} {}", currency, booking.amount))
        .field("Payment status", status.as_str());

    if is_proforma(status) {
        b.blank().text(PROFORMA_NOTE);
    }

    ReceiptDocument {
        title: title.to_string(),
        file_name: receipt_file_name(&booking.key_string(), status),
        lines: b.build(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::Booking;
    use shared::models::Role;

    fn customer() -> CurrentUser {
        CurrentUser {
            id: "user:u1".into(),
            email: "priya@example.com".into(),
            first_name: "Priya".into(),
            last_name: "Shah".into(),
            role: Role::User,
            contactno: "9876543210".into(),
            address: String::new(),
            gender: String::new(),
            jti: "t".into(),
            expires_at: 0,
        }
    }

    fn view(status: PaymentStatus) -> BookingView {
        let mut booking: Booking = serde_json::from_value(serde_json::json!({
            "id": "booking:b42",
            "user_id": "user:u1",
            "event_date": "2025-11-20",
            "start_at": "19:00",
            "max_total_hour": 5,
            "no_of_guest": 150,
            "amount": 6500,
            "dj_name_desc": "DJ Nova"
        }))
        .unwrap();
        booking.payment_status = status;
        BookingView {
            booking,
            hotel_name: Some("Lakeview".into()),
            catername: None,
            eventname: Some("Wedding".into()),
        }
    }

    fn field<'a>(doc: &'a ReceiptDocument, label: &str) -> Option<&'a str> {
        doc.lines.iter().find_map(|line| match line {
            Line::Field { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
    }

    #[test]
    fn test_file_name_prefix_follows_payment_status() {
        assert_eq!(
            receipt_file_name("b42", PaymentStatus::Paid),
            "Receipt-Booking-b42.pdf"
        );
        assert_eq!(
            receipt_file_name("b42", PaymentStatus::Unpaid),
            "Proforma-Receipt-Booking-b42.pdf"
        );
        assert_eq!(
            receipt_file_name("b42", PaymentStatus::Failed),
            "Proforma-Receipt-Booking-b42.pdf"
        );
    }

    #[test]
    fn test_file_name_masks_unsafe_key_characters() {
        let name = receipt_file_name("a\"b\r\nc d/é", PaymentStatus::Paid);
        assert_eq!(name, "Receipt-Booking-a_b__c_d__.pdf");
        assert!(axum::http::HeaderValue::from_str(&format!("attachment; filename=\"{}\"", name)).is_ok());
    }

    #[test]
    fn test_paid_receipt_layout() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let doc = build_receipt(&view(PaymentStatus::Paid), &customer(), date, "INR");

        assert_eq!(doc.title, RECEIPT_TITLE);
        assert_eq!(doc.file_name, "Receipt-Booking-b42.pdf");
        assert_eq!(doc.lines[0], Line::Title(RECEIPT_TITLE.into()));
        assert_eq!(field(&doc, "Name"), Some("Priya Shah"));
        assert_eq!(field(&doc, "Generated on"), Some("2025-11-01"));
        assert_eq!(field(&doc, "Hotel"), Some("Lakeview"));
        assert_eq!(field(&doc, "DJ"), Some("DJ Nova"));
        assert_eq!(field(&doc, "Catering"), None);
        assert_eq!(field(&doc, "Photographer"), None);
        assert_eq!(field(&doc, "Amount"), Some("INR 6500"));
        assert!(!doc.lines.contains(&Line::Text(PROFORMA_NOTE.into())));
    }

    #[test]
    fn test_proforma_carries_note() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let doc = build_receipt(&view(PaymentStatus::Unpaid), &customer(), date, "INR");

        assert_eq!(doc.title, PROFORMA_TITLE);
        assert_eq!(field(&doc, "Payment status"), Some("Unpaid"));
        assert_eq!(doc.lines.last(), Some(&Line::Text(PROFORMA_NOTE.into())));
    }
}
