//! Dashboard CLI command

use std::io::Write;

use crate::config::DisplayFormat;
use crate::display::format_dashboard;
use crate::error::SpendResult;
use crate::models::DashboardData;

/// Print the text summary of the dashboard widgets
pub fn handle_dashboard_command<W: Write>(
    data: &DashboardData,
    display: &DisplayFormat,
    out: &mut W,
) -> SpendResult<()> {
    write!(out, "{}", format_dashboard(data, display))?;
    Ok(())
}
