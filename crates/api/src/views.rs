//! Embedded HTML views and a small substitution renderer.
//!
//! Views are compiled in with `include_str!` and consumed by name plus
//! an optional data payload. Every interpolated value is HTML-escaped;
//! only pre-rendered fragments (the admin rows) bypass escaping.

use chrono::{DateTime, Utc};
use order_store::Order;

pub const HOME: &str = include_str!("../views/home.html");
pub const CONTACT: &str = include_str!("../views/contact.html");
pub const ORDER_FORM: &str = include_str!("../views/order-form.html");

const CONFIRMATION: &str = include_str!("../views/confirmation.html");
const ADMIN: &str = include_str!("../views/admin.html");
const ADMIN_ROW: &str = include_str!("../views/admin-row.html");

/// Replaces each `{{key}}` placeholder with the escaped value.
/// Placeholders without a matching key are left untouched.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{{{key}}}}}"), &escape(value));
    }
    out
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Display form of a submission timestamp. Reformatting happens at
/// render time only; the stored value is never touched.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%B %e, %Y at %H:%M UTC").to_string()
}

/// Renders the confirmation page for a freshly persisted order.
pub fn confirmation(order: &Order) -> String {
    render(
        CONFIRMATION,
        &[
            ("fname", &order.first_name),
            ("lname", &order.last_name),
            ("email", &order.email),
            ("method", order.method.as_str()),
            ("size", order.size.as_str()),
            ("toppings", &order.toppings),
            ("comment", &order.comment),
            ("submitted_at", &format_timestamp(order.submitted_at)),
        ],
    )
}

/// Renders the admin listing. Orders are expected newest-first, as
/// returned by the store.
pub fn admin(orders: &[Order]) -> String {
    let rows: String = orders
        .iter()
        .map(|order| {
            render(
                ADMIN_ROW,
                &[
                    ("id", &order.id.to_string()),
                    ("fname", &order.first_name),
                    ("lname", &order.last_name),
                    ("email", &order.email),
                    ("method", order.method.as_str()),
                    ("size", order.size.as_str()),
                    ("toppings", &order.toppings),
                    ("comment", &order.comment),
                    ("submitted_at", &format_timestamp(order.submitted_at)),
                ],
            )
        })
        .collect();

    ADMIN.replace("{{rows}}", &rows)
}
