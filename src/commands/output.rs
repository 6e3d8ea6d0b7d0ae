use crate::api::Listing;
use crate::error::Result;
use serde_json::Value;
use std::io::Write;

/// Width of the dashed line between listed resources
pub const SEPARATOR_WIDTH: usize = 20;

const MISSING_FIELD: &str = "None";

/// Print each listed resource as a small block, or the raw body when the
/// response had no list to show.
pub fn print_listing(out: &mut dyn Write, listing: &Listing) -> Result<()> {
    match listing {
        Listing::Items(items) => {
            for item in items {
                writeln!(
                    out,
                    "Display Name: {}",
                    item.display_name.as_deref().unwrap_or(MISSING_FIELD)
                )?;
                writeln!(out, "Name: {}", item.name.as_deref().unwrap_or(MISSING_FIELD))?;
                writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
            }
            Ok(())
        }
        Listing::Raw(body) => print_value(out, body),
    }
}

/// JSON is pretty-printed; a body that was not JSON is printed verbatim
pub fn print_value(out: &mut dyn Write, value: &Value) -> Result<()> {
    match value {
        Value::String(text) => writeln!(out, "{}", text)?,
        other => writeln!(out, "{}", serde_json::to_string_pretty(other)?)?,
    }
    Ok(())
}
