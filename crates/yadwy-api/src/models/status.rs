//! Display labels for the status strings the backend sends

use std::borrow::Cow;

/// Which vocabulary a status string belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Product,
    Payment,
    Fulfillment,
    Delivery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Info,
    Danger,
    Muted,
}

const PRODUCT: &[(&str, &str, Tone)] = &[
    ("active", "Active", Tone::Success),
    ("draft", "Draft", Tone::Muted),
    ("archived", "Archived", Tone::Muted),
];

const PAYMENT: &[(&str, &str, Tone)] = &[
    ("paid", "Paid", Tone::Success),
    ("pending", "Payment pending", Tone::Warning),
    ("refunded", "Refunded", Tone::Muted),
    ("partially_refunded", "Partially refunded", Tone::Warning),
    ("failed", "Payment failed", Tone::Danger),
];

const FULFILLMENT: &[(&str, &str, Tone)] = &[
    ("fulfilled", "Fulfilled", Tone::Success),
    ("unfulfilled", "Unfulfilled", Tone::Warning),
    ("partially_fulfilled", "Partially fulfilled", Tone::Warning),
    ("on_hold", "On hold", Tone::Warning),
    ("in_progress", "In progress", Tone::Info),
];

const DELIVERY: &[(&str, &str, Tone)] = &[
    ("delivered", "Delivered", Tone::Success),
    ("in_transit", "In transit", Tone::Info),
    ("pending", "Pending", Tone::Warning),
    ("failed", "Delivery failed", Tone::Danger),
];

impl StatusKind {
    fn table(self) -> &'static [(&'static str, &'static str, Tone)] {
        match self {
            StatusKind::Product => PRODUCT,
            StatusKind::Payment => PAYMENT,
            StatusKind::Fulfillment => FULFILLMENT,
            StatusKind::Delivery => DELIVERY,
        }
    }

    fn lookup(self, status: &str) -> Option<(&'static str, Tone)> {
        let normalized = status.trim().to_ascii_lowercase();
        self.table()
            .iter()
            .find(|(key, _, _)| *key == normalized)
            .map(|(_, label, tone)| (*label, *tone))
    }

    pub fn is_known(self, status: &str) -> bool {
        self.lookup(status).is_some()
    }

    /// Human label; unknown statuses are returned as sent
    pub fn label(self, status: &str) -> Cow<'_, str> {
        match self.lookup(status) {
            Some((label, _)) => Cow::Borrowed(label),
            None => Cow::Owned(status.to_string()),
        }
    }

    pub fn tone(self, status: &str) -> Tone {
        self.lookup(status).map_or(Tone::Muted, |(_, tone)| tone)
    }
}
