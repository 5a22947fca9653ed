use crate::Result;
use crate::medals::MedalCount;
use crate::ranking::{MedalField, MedalTally, SortKey};
use core::fmt::Write;
use owo_colors::OwoColorize;
use strum::IntoEnumIterator;

const RANK_WIDTH: usize = 4;
const COUNT_WIDTH: usize = 8;
const NO_DATA: &str = "No medal data available.";

pub fn generate<W: Write>(rows: &[MedalCount], sort_key: SortKey, use_colors: bool, writer: &mut W) -> Result<()> {
    if rows.is_empty() {
        writeln!(writer, "{NO_DATA}")?;
        return Ok(());
    }

    let code_width = rows.iter().map(|row| row.code.chars().count()).max().unwrap_or(0).max("Country".len());
    let sorted = sort_key.primary_field();

    let mut header = format!("{:>RANK_WIDTH$}  {:<code_width$}", "#", "Country");
    for field in MedalField::iter() {
        let label = if field == sorted {
            format!("{}▼", column_label(field))
        } else {
            column_label(field).to_string()
        };
        header.push_str(&format!("{label:>COUNT_WIDTH$}"));
    }

    if use_colors {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{header}")?;
    }

    for (index, row) in rows.iter().enumerate() {
        write!(writer, "{:>RANK_WIDTH$}  {:<code_width$}", index + 1, row.code)?;
        for field in MedalField::iter() {
            let cell = format!("{:>COUNT_WIDTH$}", row.count(field));
            if use_colors && field == sorted {
                write!(writer, "{}", cell.cyan().bold())?;
            } else {
                write!(writer, "{cell}")?;
            }
        }
        writeln!(writer)?;
    }

    Ok(())
}

const fn column_label(field: MedalField) -> &'static str {
    match field {
        MedalField::Gold => "Gold",
        MedalField::Silver => "Silver",
        MedalField::Bronze => "Bronze",
        MedalField::Total => "Total",
    }
}
