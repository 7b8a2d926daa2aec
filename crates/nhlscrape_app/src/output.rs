use std::io::{self, Write};

use serde::Serialize;

use nhlscrape_interface::errors::{AppError, Result};
use nhlscrape_interface::table::Tabular;

/// Tab-separated rows under a header line, or a JSON array.
pub fn print_rows<T>(rows: &[T], json: bool) -> Result<()>
where
    T: Tabular + Serialize,
{
    if json {
        return print_json(rows);
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(T::columns().join("\t"));
    lines.extend(rows.iter().map(|row| row.cells().join("\t")));

    write_lines(&lines)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| AppError::JsonError {
        msg: e.to_string(),
    })?;

    write_lines(&[text])
}

pub fn write_lines(lines: &[String]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}").map_err(|e| AppError::OutputError {
            msg: e.to_string(),
        })?;
    }

    Ok(())
}
