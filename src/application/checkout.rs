use crate::application::payment_systems::{Mastercard, Mir, Qiwi};
use crate::domain::order::Order;
use crate::domain::ports::{HashServiceRef, PaymentSystemBox};
use crate::error::Result;
use crate::infrastructure::hashing::{Md5HashService, Sha1HashService};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// A link produced by one payment system for one order.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct PayingLink {
    pub order_id: i64,
    pub system: &'static str,
    pub url: String,
}

/// Offers an order to every configured payment system.
///
/// Systems are queried in the order they were supplied, so the resulting links
/// keep a stable order across runs.
pub struct Checkout {
    systems: Vec<PaymentSystemBox>,
}

impl Checkout {
    pub fn new(systems: Vec<PaymentSystemBox>) -> Self {
        Self { systems }
    }

    /// The default line-up: Mastercard and Qiwi over a shared MD5 service,
    /// then Mir over SHA-1 signed with `mir_secret`.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::InvalidConfiguration` if `mir_secret` is blank.
    pub fn standard(mir_secret: &str) -> Result<Self> {
        let md5: HashServiceRef = Arc::new(Md5HashService::new());
        let sha1: HashServiceRef = Arc::new(Sha1HashService::new());

        let systems: Vec<PaymentSystemBox> = vec![
            Box::new(Mastercard::new(md5.clone())),
            Box::new(Qiwi::new(md5)),
            Box::new(Mir::new(sha1, mir_secret)?),
        ];

        Ok(Self::new(systems))
    }

    pub fn systems(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.systems.iter().map(|system| system.name())
    }

    pub fn paying_links(&self, order: &Order) -> Vec<PayingLink> {
        self.systems
            .iter()
            .map(|system| {
                let url = system.paying_link(order);
                debug!(order_id = order.id(), system = system.name(), %url, "paying link built");
                PayingLink {
                    order_id: order.id(),
                    system: system.name(),
                    url,
                }
            })
            .collect()
    }
}
