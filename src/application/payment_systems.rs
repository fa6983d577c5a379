use crate::domain::order::Order;
use crate::domain::ports::{HashServiceRef, PaymentSystem};
use crate::error::{PaymentError, Result};

/// Hashes the order id; puts the amount in clear with a `RUB` suffix.
pub struct Mastercard {
    hash_service: HashServiceRef,
}

impl Mastercard {
    pub fn new(hash_service: HashServiceRef) -> Self {
        Self { hash_service }
    }
}

impl PaymentSystem for Mastercard {
    fn name(&self) -> &'static str {
        "mastercard"
    }

    fn paying_link(&self, order: &Order) -> String {
        let hash = self.hash_service.compute_hash(&order.id().to_string());
        format!(
            "pay.system1.ru/order?amount={}RUB&hash={}",
            order.amount(),
            hash
        )
    }
}

/// Hashes id followed by amount; only the hash goes into the URL.
pub struct Qiwi {
    hash_service: HashServiceRef,
}

impl Qiwi {
    pub fn new(hash_service: HashServiceRef) -> Self {
        Self { hash_service }
    }
}

impl PaymentSystem for Qiwi {
    fn name(&self) -> &'static str {
        "qiwi"
    }

    fn paying_link(&self, order: &Order) -> String {
        let hash = self
            .hash_service
            .compute_hash(&format!("{}{}", order.id(), order.amount()));
        format!("order.system2.ru/pay?hash={hash}")
    }
}

/// Signs amount, id and a shared secret, in that order.
///
/// The `curency` query parameter is spelled the way the provider expects it.
pub struct Mir {
    hash_service: HashServiceRef,
    secret_key: String,
}

impl Mir {
    /// Fails when `secret_key` is empty or only whitespace.
    pub fn new(hash_service: HashServiceRef, secret_key: impl Into<String>) -> Result<Self> {
        let secret_key = secret_key.into();
        if secret_key.trim().is_empty() {
            return Err(PaymentError::InvalidConfiguration {
                field: "secret_key",
                reason: "must not be empty or whitespace".to_string(),
            });
        }

        Ok(Self {
            hash_service,
            secret_key,
        })
    }

    fn signed_data(&self, order: &Order) -> String {
        format!("{}{}{}", order.amount(), order.id(), self.secret_key)
    }
}

impl PaymentSystem for Mir {
    fn name(&self) -> &'static str {
        "mir"
    }

    fn paying_link(&self, order: &Order) -> String {
        let hash = self.hash_service.compute_hash(&self.signed_data(order));
        format!(
            "system3.com/pay?amount={}&curency=RUB&hash={}",
            order.amount(),
            hash
        )
    }
}
