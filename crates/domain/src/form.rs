//! Server-side validation of submitted order fields.
//!
//! Mirrors the client-side rules in `public/js/order-form.js`; the
//! client checks are bypassable with a direct POST, so they are
//! re-applied here before anything reaches the store.

use std::str::FromStr;

use order_store::{Fulfillment, NewOrder, Size};
use serde::Serialize;
use thiserror::Error;

/// Raw order form fields as submitted by the browser.
///
/// Toppings originate from multiple checkboxes sharing one name, so
/// they arrive as a sequence; every other field is a scalar.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub fname: String,
    pub lname: String,
    pub email: String,
    pub method: String,
    pub size: String,
    pub toppings: Vec<String>,
    pub comment: String,
}

impl OrderForm {
    /// Builds a form from decoded urlencoded pairs.
    ///
    /// Repeated `toppings` keys accumulate in submission order; for the
    /// scalar fields the last value wins. Unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "fname" => form.fname = value,
                "lname" => form.lname = value,
                "email" => form.email = value,
                "method" => form.method = value,
                "size" => form.size = value,
                "toppings" => form.toppings.push(value),
                "comment" => form.comment = value,
                _ => {}
            }
        }
        form
    }

    /// Validates the form into a [`NewOrder`].
    ///
    /// Every rule is evaluated independently (no short-circuit) so the
    /// result names exactly the failing fields. Toppings are normalized
    /// to their stored form: joined with ", ", empty string when none
    /// were selected.
    pub fn validate(self) -> Result<NewOrder, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let first_name = self.fname.trim();
        if first_name.is_empty() {
            errors.push("fname", "first name is required");
        }

        let last_name = self.lname.trim();
        if last_name.is_empty() {
            errors.push("lname", "last name is required");
        }

        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            errors.push("email", "a valid email address is required");
        }

        let method = match Fulfillment::from_str(self.method.trim()) {
            Ok(method) => Some(method),
            Err(_) => {
                errors.push("method", "choose pickup or delivery");
                None
            }
        };

        // The form's "none" placeholder parses like any other non-size
        // value and lands here as a missing selection.
        let size = match Size::from_str(self.size.trim()) {
            Ok(size) => Some(size),
            Err(_) => {
                errors.push("size", "choose a pizza size");
                None
            }
        };

        match (method, size) {
            (Some(method), Some(size)) if errors.is_empty() => Ok(NewOrder {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                method,
                size,
                toppings: self.toppings.join(", "),
                comment: self.comment.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// A single failed field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// All field rules that failed for one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("invalid order submission: {}", .errors.iter().map(|e| e.field).collect::<Vec<_>>().join(", "))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failed rules in evaluation order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Names of the failing fields in evaluation order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|e| e.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> OrderForm {
        OrderForm {
            fname: "Ada".to_string(),
            lname: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            method: "pickup".to_string(),
            size: "large".to_string(),
            toppings: vec!["pepperoni".to_string(), "olives".to_string()],
            comment: String::new(),
        }
    }

    fn failing_fields(form: OrderForm) -> Vec<&'static str> {
        form.validate().unwrap_err().field_names().collect()
    }

    #[test]
    fn valid_form_produces_normalized_order() {
        let order = valid_form().validate().unwrap();

        assert_eq!(order.first_name, "Ada");
        assert_eq!(order.email, "ada@x.com");
        assert_eq!(order.method, Fulfillment::Pickup);
        assert_eq!(order.size, Size::Large);
        assert_eq!(order.toppings, "pepperoni, olives");
    }

    #[test]
    fn names_are_trimmed() {
        let mut form = valid_form();
        form.fname = "  Ada ".to_string();
        form.lname = " Lovelace  ".to_string();

        let order = form.validate().unwrap();
        assert_eq!(order.first_name, "Ada");
        assert_eq!(order.last_name, "Lovelace");
    }

    #[test]
    fn no_toppings_stores_empty_string() {
        let mut form = valid_form();
        form.toppings.clear();

        let order = form.validate().unwrap();
        assert_eq!(order.toppings, "");
    }

    #[test]
    fn toppings_keep_submission_order() {
        let mut form = valid_form();
        form.toppings = vec![
            "olives".to_string(),
            "mushrooms".to_string(),
            "pepperoni".to_string(),
        ];

        let order = form.validate().unwrap();
        assert_eq!(order.toppings, "olives, mushrooms, pepperoni");
    }

    #[test]
    fn whitespace_only_name_fails() {
        let mut form = valid_form();
        form.fname = "   ".to_string();

        assert_eq!(failing_fields(form), vec!["fname"]);
    }

    #[test]
    fn email_without_at_sign_fails() {
        let mut form = valid_form();
        form.email = "ada.example.com".to_string();

        assert_eq!(failing_fields(form), vec!["email"]);
    }

    #[test]
    fn size_none_sentinel_fails() {
        let mut form = valid_form();
        form.size = "none".to_string();

        assert_eq!(failing_fields(form), vec!["size"]);
    }

    #[test]
    fn unknown_method_fails() {
        let mut form = valid_form();
        form.method = "teleport".to_string();

        assert_eq!(failing_fields(form), vec!["method"]);
    }

    #[test]
    fn all_rules_are_evaluated_not_short_circuited() {
        let form = OrderForm::default();

        assert_eq!(
            failing_fields(form),
            vec!["fname", "lname", "email", "method", "size"]
        );
    }

    #[test]
    fn from_pairs_collects_repeated_toppings() {
        let form = OrderForm::from_pairs(vec![
            ("fname".to_string(), "Ada".to_string()),
            ("toppings".to_string(), "pepperoni".to_string()),
            ("toppings".to_string(), "olives".to_string()),
            ("ignored".to_string(), "junk".to_string()),
        ]);

        assert_eq!(form.fname, "Ada");
        assert_eq!(form.toppings, vec!["pepperoni", "olives"]);
    }

    #[test]
    fn from_pairs_last_scalar_wins() {
        let form = OrderForm::from_pairs(vec![
            ("size".to_string(), "small".to_string()),
            ("size".to_string(), "large".to_string()),
        ]);

        assert_eq!(form.size, "large");
    }
}
