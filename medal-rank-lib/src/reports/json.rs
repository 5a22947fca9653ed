use crate::Result;
use crate::medals::MedalCount;
use crate::ranking::SortKey;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(rows: &[MedalCount], sort_key: SortKey, writer: &mut W) -> Result<()> {
    let medals: Vec<_> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            json!({
                "rank": index + 1,
                "code": row.code,
                "gold": row.gold,
                "silver": row.silver,
                "bronze": row.bronze,
                "total": row.total,
            })
        })
        .collect();

    let output = json!({
        "sort": sort_key,
        "medals": medals,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
