//! Dashboard summary formatting

use crate::config::DisplayFormat;
use crate::models::DashboardData;

/// Plain-text rendition of the dashboard widgets
pub fn format_dashboard(data: &DashboardData, format: &DisplayFormat) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n\n", data.greeting));

    output.push_str("Credit\n");
    output.push_str(&format!("  Limit:       {}\n", format.whole(data.credit_limit)));
    output.push_str(&format!("  Available:   {}\n", format.whole(data.available)));
    output.push_str(&format!(
        "  Used:        {} ({:.1}%)\n",
        format.whole(data.credit_used()),
        data.credit_utilization()
    ));
    output.push_str(&format!(
        "  This month:  {} ({:+.1}%)\n\n",
        format.signed(data.monthly_change),
        data.monthly_change_percent
    ));

    output.push_str("Accounts\n");
    for account in &data.accounts {
        output.push_str(&format!("  {:<18}{:>16}\n", account.name, format.money(account.balance)));
    }
    output.push_str(&format!("  {:<18}{:>16}\n\n", "Total", format.money(data.total_balance())));

    let mm = &data.money_movement;
    output.push_str(&format!("Money movement ({})\n", mm.period));
    output.push_str(&format!("  In:          {}\n", format.signed(mm.money_in)));
    output.push_str(&format!("  Out:         {}\n", format.money(mm.money_out)));
    output.push_str(&format!("  Net:         {}\n", format.signed(mm.net())));
    output.push_str("  Top sources:\n");
    for source in &mm.top_sources {
        output.push_str(&format!("    {:<20}{:>18}\n", source.name, format.money(source.amount)));
    }
    output.push_str("  Top spend:\n");
    for spend in &mm.top_spend {
        output.push_str(&format!("    {:<20}{:>18}\n", spend.name, format.money(spend.amount)));
    }
    output.push('\n');

    output.push_str(&format!(
        "Cashback: {} total, {} this month, {} available\n",
        format.whole(data.cashback.total),
        format.whole(data.cashback.this_month),
        format.whole(data.cashback.available)
    ));
    output.push_str(&format!(
        "CO₂: {} of {} t compensated ({}%)\n",
        data.co2.compensated, data.co2.total, data.co2.compensation_percent
    ));
    output.push_str(&format!(
        "Export: {}% done, {} receipts missing, {} days left\n",
        data.account_export.progress,
        data.account_export.missing_receipts,
        data.account_export.days_left
    ));
    output.push_str(&format!(
        "Bill pay: {} outstanding, {} overdue, {} in inbox\n",
        data.bill_pay.outstanding, data.bill_pay.overdue, data.bill_pay.inbox
    ));

    output
}
