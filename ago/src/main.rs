use clap::{CommandFactory, Parser, Subcommand};
use libago::TranslatorKind;

mod commands;
mod context;
mod format;
mod logging;

/// Ago - Localized time differences
///
/// A CLI tool that prints the difference between two instants as a short
/// translated message such as "2 days ago" or "in 3 months".
#[derive(Parser, Debug)]
#[command(name = "ago")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    color: String,

    /// Locale of the messages (e.g. en, fr, fr_CA)
    #[arg(short, long, global = true)]
    locale: Option<String>,

    /// Message format: choice, plain
    #[arg(short, long, global = true)]
    translator: Option<TranslatorKind>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the difference between two instants
    Diff {
        /// Start instant: date-time, Unix timestamp, "now" or offset like "-3 days"
        #[arg(allow_hyphen_values = true)]
        from: String,
        /// End instant (defaults to now)
        #[arg(allow_hyphen_values = true)]
        to: Option<String>,
        /// Units to report, comma separated (e.g. y,m or year,month)
        #[arg(short, long)]
        precision: Option<String>,
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Print the message for a count of units
    Message {
        /// Number of units (must not be zero)
        count: u32,
        /// Unit name: year, month, day, hour, minute, second
        unit: String,
        /// Render in the past ("2 days ago") instead of the future ("in 2 days")
        #[arg(long)]
        ago: bool,
    },
    /// Print the message used when there is no difference
    Empty,
    /// List the supported units
    Units {
        /// Output format: pretty, json, yaml
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::init(context::VerbosityLevel::from_count(cli.verbose));

    // Build context with precedence: defaults > config file > env vars > CLI flags
    let ctx = context::AppContext::build(
        format::ColorChoice::from(cli.color.as_str()),
        context::CliOverrides {
            locale: cli.locale,
            translator: cli.translator,
        },
    );

    let renders_messages = matches!(
        cli.command,
        Commands::Diff { .. } | Commands::Message { .. } | Commands::Empty
    );
    if renders_messages && let Some(warning) = ctx.locale_warning() {
        format::warning(&ctx, &warning);
    }

    match cli.command {
        Commands::Diff {
            from,
            to,
            precision,
            format,
        } => {
            let fmt = format::OutputFormat::from(format.as_str());
            commands::diff::handle_diff(&ctx, &from, to.as_deref(), precision.as_deref(), fmt);
        }
        Commands::Message { count, unit, ago } => {
            commands::message::handle_message(&ctx, count, &unit, ago);
        }
        Commands::Empty => {
            commands::empty::handle_empty(&ctx);
        }
        Commands::Units { format } => {
            let fmt = format::OutputFormat::from(format.as_str());
            commands::units::handle_units(&ctx, fmt);
        }
        Commands::Version => {
            commands::version::print_version();
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}
