use anyhow::Result;
use clap::ValueEnum;
use jview_jndi::FlatRecord;
use std::io::Write;

/// Rendering of the flattened records on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// One `path = value` line per record; null values print as `null`.
    #[default]
    Text,
    /// A pretty-printed JSON array of `{path, name, value}` objects.
    Json,
}

pub(crate) fn write_records(out: &mut impl Write, format: Format, records: &[FlatRecord]) -> Result<()> {
    match format {
        Format::Text => {
            for record in records {
                writeln!(out, "{} = {}", record.path, record.value.as_deref().unwrap_or("null"))?;
            }
        },
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        },
    }
    out.flush()?;
    Ok(())
}
