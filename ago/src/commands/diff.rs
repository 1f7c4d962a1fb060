use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use chrono::{DateTime, Utc};
use libago::instant::resolve_instant_at;
use libago::unit::parse_precision;
use libago::{CalendarDiff, CalendarDiffer, Direction, InstantInput, TimeUnit};
use serde::Serialize;
use tracing::info;

/// Result of a diff command
#[derive(Debug, Clone, Serialize)]
pub struct DiffReport {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
    pub direction: Direction,
    #[serde(flatten)]
    pub diff: CalendarDiff,
    pub precision: Vec<TimeUnit>,
    pub message: String,
}

impl Formattable for DiffReport {
    fn format_pretty(&self) -> String {
        self.message.clone()
    }
}

/// Read a command-line instant; bare integers are Unix timestamps
pub fn parse_instant_arg(value: &str) -> InstantInput {
    match value.trim().parse::<i64>() {
        Ok(seconds) => InstantInput::Timestamp(seconds),
        Err(_) => InstantInput::Text(value.to_string()),
    }
}

/// Compute the diff between `from` and `to` (default: now)
pub fn run_diff(
    ctx: &AppContext,
    from: &str,
    to: Option<&str>,
    precision: Option<&str>,
) -> Result<DiffReport, String> {
    let ago = ctx.ago()?;

    let precision = match precision {
        Some(list) => parse_precision(list).map_err(|e| e.to_string())?,
        None => ago.precision().to_vec(),
    };

    let now = Utc::now();
    let from = resolve_instant_at(parse_instant_arg(from), now).map_err(|e| e.to_string())?;
    let to = resolve_instant_at(parse_instant_arg(to.unwrap_or("now")), now)
        .map_err(|e| e.to_string())?;

    let formatter = ago.formatter();
    let diff = formatter.differ().diff(&from, &to);
    let message = formatter
        .format_calendar_diff(&diff, &precision)
        .map_err(|e| e.to_string())?;

    info!(%from, %to, %message, "formatted diff");
    Ok(DiffReport {
        from,
        to,
        direction: diff.direction(),
        diff,
        precision,
        message,
    })
}

/// Handle the diff command
pub fn handle_diff(
    ctx: &AppContext,
    from: &str,
    to: Option<&str>,
    precision: Option<&str>,
    fmt: OutputFormat,
) {
    let report = match run_diff(ctx, from, to, precision) {
        Ok(report) => report,
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    };

    match format::format_output(&report, fmt) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            format::error(ctx, &format!("formatting output: {}", e));
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
