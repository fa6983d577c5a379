use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const DEFAULT_LINKS: [&str; 3] = [
    "pay.system1.ru/order?amount=12RUB&hash=aY1RoZ2KEhzlgUmde3AWaA==",
    "order.system2.ru/pay?hash=r8t6LxwVgoa0gGLNiFqYZg==",
    "system3.com/pay?amount=12&curency=RUB&hash=EKMkUvlEemC7bNhIeVw56S2r128=",
];

pub fn orders_csv(rows: &[(i64, i64)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "id, amount")?;
    for (id, amount) in rows {
        writeln!(file, "{id}, {amount}")?;
    }
    file.flush()?;
    Ok(file)
}
