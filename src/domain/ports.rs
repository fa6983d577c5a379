use super::order::Order;
use std::sync::Arc;

/// Turns text into a printable digest.
pub trait HashService: Send + Sync {
    fn compute_hash(&self, data: &str) -> String;
}

/// Builds the redirect URL a payment provider expects for an order.
pub trait PaymentSystem: Send + Sync {
    /// Stable short name used in logs and structured output.
    fn name(&self) -> &'static str;
    fn paying_link(&self, order: &Order) -> String;
}

pub type HashServiceRef = Arc<dyn HashService>;
pub type PaymentSystemBox = Box<dyn PaymentSystem>;
