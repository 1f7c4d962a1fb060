use crate::context::AppContext;
use crate::format;

/// Render the message used when there is no difference
pub fn run_empty(ctx: &AppContext) -> Result<String, String> {
    ctx.ago()?.empty().map_err(|e| e.to_string())
}

/// Handle the empty command
pub fn handle_empty(ctx: &AppContext) {
    match run_empty(ctx) {
        Ok(message) => println!("{}", message),
        Err(e) => {
            format::error(ctx, &e);
            std::process::exit(1);
        }
    }
}
