use crate::domain::order::Order;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads orders from a CSV source with an `id,amount` header.
///
/// Whitespace around fields is trimmed, so hand-edited files with padded
/// columns parse the same as machine-written ones.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one order per record.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
