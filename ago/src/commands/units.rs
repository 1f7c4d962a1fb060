use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use libago::unit::UNITS;
use serde::Serialize;

/// A row of the unit table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitRow {
    pub code: &'static str,
    pub name: &'static str,
}

impl Formattable for UnitRow {
    fn format_pretty(&self) -> String {
        format!("{:<4} {}", self.code, self.name)
    }
}

/// Units in reporting order, most significant first
pub fn list_units() -> Vec<UnitRow> {
    UNITS
        .iter()
        .map(|&(code, name)| UnitRow { code, name })
        .collect()
}

/// Handle the units command
pub fn handle_units(ctx: &AppContext, fmt: OutputFormat) {
    match format::format_output_vec(&list_units(), fmt) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            format::error(ctx, &format!("formatting output: {}", e));
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "units_tests.rs"]
mod tests;
