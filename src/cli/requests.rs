//! Card request log CLI command

use std::io::Write;

use clap::Args;

use crate::audit::RequestLogger;
use crate::error::SpendResult;

/// Arguments of `spendcard requests`
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Number of most recent requests to show
    #[arg(short = 'n', long, default_value = "20")]
    pub limit: usize,
}

/// Show the card requests recorded by the wizard
pub fn handle_requests_command<W: Write>(
    log: &RequestLogger,
    args: &RequestArgs,
    out: &mut W,
) -> SpendResult<()> {
    if !log.exists() {
        writeln!(out, "No card requests yet.")?;
        return Ok(());
    }

    let entries = log.read_recent(args.limit)?;
    if entries.is_empty() {
        writeln!(out, "No card requests yet.")?;
    }
    for entry in entries {
        writeln!(out, "{}", entry.format_human_readable())?;
    }
    Ok(())
}
