use crate::context::AppContext;
use crate::format;

/// Render the message for `count` units, in the past when `ago` is set
pub fn run_message(ctx: &AppContext, count: u32, unit: &str, ago: bool) -> Result<String, String> {
    ctx.ago()?
        .message(count, ago, unit)
        .map_err(|e| e.to_string())
}

/// Handle the message command
pub fn handle_message(ctx: &AppContext, count: u32, unit: &str, ago: bool) {
    match run_message(ctx, count, unit, ago) {
        Ok(message) => println!("{}", message),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
