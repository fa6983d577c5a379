use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paylink::application::checkout::Checkout;
use paylink::domain::order::Order;
use paylink::interfaces::csv::order_reader::OrderReader;
use paylink::interfaces::link_writer::{LinkWriter, OutputFormat};
use paylink::logging::init_cli_logger;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Order id, used when no orders file is given
    #[arg(long, default_value_t = 111, allow_negative_numbers = true)]
    id: i64,

    /// Order amount, used when no orders file is given
    #[arg(long, default_value_t = 12, allow_negative_numbers = true)]
    amount: i64,

    /// CSV file with an `id,amount` header. Overrides --id and --amount.
    #[arg(long)]
    orders: Option<PathBuf>,

    /// Secret shared with the Mir payment system
    #[arg(long, env = "PAYLINK_MIR_SECRET", default_value = "sss", hide_env_values = true)]
    secret: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let checkout = Checkout::standard(&cli.secret).into_diagnostic()?;

    let orders: Vec<Order> = match cli.orders {
        Some(path) => {
            info!(path = %path.display(), "reading orders");
            let file = File::open(path).into_diagnostic()?;
            OrderReader::new(file)
                .orders()
                .collect::<paylink::error::Result<_>>()
                .into_diagnostic()?
        }
        None => vec![Order::new(cli.id, cli.amount)],
    };

    let stdout = io::stdout();
    let mut writer = LinkWriter::new(stdout.lock(), cli.format);
    for order in &orders {
        writer
            .write_links(&checkout.paying_links(order))
            .into_diagnostic()?;
    }

    Ok(())
}
