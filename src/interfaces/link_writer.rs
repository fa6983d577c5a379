use crate::application::checkout::PayingLink;
use crate::error::Result;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One bare URL per line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes paying links to any `Write` sink, one per line.
pub struct LinkWriter<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> LinkWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn write_links(&mut self, links: &[PayingLink]) -> Result<()> {
        for link in links {
            match self.format {
                OutputFormat::Text => writeln!(self.writer, "{}", link.url)?,
                OutputFormat::Json => {
                    serde_json::to_writer(&mut self.writer, link)?;
                    writeln!(self.writer)?;
                }
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
