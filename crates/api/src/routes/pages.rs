//! Static marketing and form pages.

use axum::response::Html;

use crate::views;

/// GET / — home page.
pub async fn home() -> Html<&'static str> {
    Html(views::HOME)
}

/// GET /contact-us — contact page.
pub async fn contact() -> Html<&'static str> {
    Html(views::CONTACT)
}

/// GET /order — the order form.
pub async fn order_form() -> Html<&'static str> {
    Html(views::ORDER_FORM)
}
