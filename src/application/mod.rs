//! Application layer: the payment systems and the checkout that drives them.
//!
//! Each payment system owns the hash service it was built with. `Checkout`
//! only sequences them; it never inspects the links it collects.

pub mod checkout;
pub mod payment_systems;
