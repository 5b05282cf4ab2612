use std::io::{self, Write};

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing::debug;

use spendcard::audit::RequestLogger;
use spendcard::cli::{
    handle_cards_command, handle_dashboard_command, handle_requests_command,
    handle_transactions_command, CardArgs, RequestArgs, TransactionArgs,
};
use spendcard::config::{DisplayFormat, Settings, SpendPaths};
use spendcard::logging::{init_tracing, LogTarget};
use spendcard::sample;

#[derive(Parser)]
#[command(
    name = "spendcard",
    version,
    about = "Terminal dashboard for corporate cards and business banking",
    long_about = "spendcard shows a business-banking dashboard in the terminal: \
                  balances, cards, transactions and a wizard for requesting \
                  new cards. Without a subcommand it launches the interactive UI."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Skip the welcome animation and show the login form at once
        #[arg(long)]
        skip_intro: bool,
    },

    /// List cards
    Cards(CardArgs),

    /// List card transactions
    #[command(alias = "txn")]
    Transactions(TransactionArgs),

    /// Print a summary of the dashboard widgets
    Dashboard,

    /// Show card requests created with the wizard
    Requests(RequestArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let command = cli.command.unwrap_or(Commands::Tui { skip_intro: false });

    if let Commands::Tui { skip_intro } = command {
        // The UI owns the terminal, so diagnostics go to a file
        paths.ensure_directories()?;
        init_tracing(LogTarget::File(&paths.diagnostic_log()))?;
        settings.skip_intro |= skip_intro;
        return spendcard::tui::run_tui(&settings, &paths);
    }

    init_tracing(LogTarget::Stderr)?;
    debug!(base_dir = %paths.base_dir().display(), "paths resolved");

    let display = DisplayFormat::from_settings(&settings);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Tui { .. } => {}
        Commands::Cards(args) => {
            let today = Local::now().date_naive();
            handle_cards_command(&sample::cards(), &args, today, &display, &mut out)?;
        }
        Commands::Transactions(args) => {
            handle_transactions_command(&sample::transactions(), &args, &display, &mut out)?;
        }
        Commands::Dashboard => {
            handle_dashboard_command(&sample::dashboard(), &display, &mut out)?
        }
        Commands::Requests(args) => {
            let log = RequestLogger::new(paths.request_log());
            handle_requests_command(&log, &args, &mut out)?;
        }
        Commands::Config => {
            writeln!(out, "spendcard Configuration")?;
            writeln!(out, "=======================")?;
            writeln!(out, "Base directory:  {}", paths.base_dir().display())?;
            writeln!(out, "Settings file:   {}", paths.settings_file().display())?;
            writeln!(out, "Request log:     {}", paths.request_log().display())?;
            writeln!(out, "Diagnostic log:  {}", paths.diagnostic_log().display())?;
            writeln!(
                out,
                "Settings saved:  {}",
                if paths.is_initialized() { "yes" } else { "no (defaults)" }
            )?;
            writeln!(out)?;
            writeln!(out, "Settings:")?;
            writeln!(out, "  Currency:      {}", settings.currency_symbol)?;
            writeln!(out, "  Date format:   {}", settings.date_format)?;
            writeln!(out, "  Tick rate:     {} ms", settings.tick_rate_ms)?;
            writeln!(out, "  Skip intro:    {}", settings.skip_intro)?;
            writeln!(out, "  Theme:         {:?}", settings.theme)?;
        }
    }

    Ok(())
}
