use serde::Deserialize;

/// A purchase for which paying links are generated.
///
/// Orders are plain values: they carry no identity beyond their fields and
/// cannot be changed once built.
#[derive(Debug, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Order {
    id: i64,
    amount: i64,
}

impl Order {
    pub fn new(id: i64, amount: i64) -> Self {
        Self { id, amount }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}
