use csv::{Terminator, WriterBuilder};

use crate::{ScrapeError, table_scraper::Table};

/// Renders `table` as CSV. Records are separated by `\n` with no trailing newline,
/// so an empty table becomes an empty string.
pub fn to_csv(table: &Table) -> Result<String, ScrapeError> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);
    for row in table {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ScrapeError::Serialize(e.into_error().into()))?;
    let text = String::from_utf8(bytes).map_err(|e| {
        ScrapeError::Serialize(std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    })?;

    Ok(match text.strip_suffix('\n') {
        Some(joined) => joined.to_string(),
        None => text,
    })
}
