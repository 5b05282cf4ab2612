//! Accounts view
//!
//! Bank account balances, the credit card summary and the accounting export.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

use crate::config::{DisplayFormat, Theme};
use crate::models::DashboardData;
use crate::tui::app::{App, FocusedPanel};

/// Render the accounts page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(8)])
        .split(area);

    render_balances(frame, app, chunks[0]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_credit_card(frame, &app.dashboard, &app.theme, &app.format, bottom[0]);
    render_export(frame, &app.dashboard, &app.theme, &app.format, bottom[1]);
}

fn render_balances(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let format = &app.format;
    let data = &app.dashboard;
    let total = data.total_balance();

    let block = Block::default()
        .title(" Bank accounts ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_style(app.focused_panel == FocusedPanel::Main));

    let header = Row::new(vec!["Account", "Balance", "Share"]).style(
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD),
    );

    let mut rows: Vec<Row> = data
        .accounts
        .iter()
        .map(|account| {
            Row::new(vec![
                Cell::from(account.name.as_str()),
                Cell::from(format.money(account.balance))
                    .style(Style::default().fg(theme.amount(account.balance.is_negative()))),
                Cell::from(format!("{:.1}%", account.balance.percent_of(total))),
            ])
        })
        .collect();
    rows.push(
        Row::new(vec![
            Cell::from("Total"),
            Cell::from(format.money(total)),
            Cell::from(""),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD)),
    );

    let widths = [
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(8),
    ];

    frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

fn render_credit_card(
    frame: &mut Frame,
    data: &DashboardData,
    theme: &Theme,
    format: &DisplayFormat,
    area: Rect,
) {
    let card = &data.credit_card;
    let block = Block::default()
        .title(" Credit card ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let lines = vec![
        Line::from(vec![
            Span::styled("Balance    ", Style::default().fg(theme.muted)),
            Span::styled(format.money(card.balance), Style::default().fg(theme.text)),
        ]),
        Line::from(vec![
            Span::styled("Available  ", Style::default().fg(theme.muted)),
            Span::styled(format.money(card.available), Style::default().fg(theme.success)),
        ]),
        Line::from(vec![
            Span::styled("Autopay    ", Style::default().fg(theme.muted)),
            Span::styled(card.autopay.as_str(), Style::default().fg(theme.text)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(theme.accent).bg(theme.selection_bg))
            .ratio((card.utilization / 100.0).clamp(0.0, 1.0))
            .label(format!("{:.0}% utilized", card.utilization)),
        chunks[1],
    );
}

fn render_export(
    frame: &mut Frame,
    data: &DashboardData,
    theme: &Theme,
    format: &DisplayFormat,
    area: Rect,
) {
    let export = &data.account_export;
    let block = Block::default()
        .title(" Accounting export ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let receipts_color = if export.missing_receipts > 0 {
        theme.warning
    } else {
        theme.success
    };
    let lines = vec![
        Line::from(vec![
            Span::styled("Ready      ", Style::default().fg(theme.muted)),
            Span::styled(
                format!(
                    "{} transactions · {}",
                    export.ready_transactions,
                    format.money(export.ready_amount)
                ),
                Style::default().fg(theme.text),
            ),
        ]),
        Line::from(vec![
            Span::styled("Receipts   ", Style::default().fg(theme.muted)),
            Span::styled(
                format!("{} missing", export.missing_receipts),
                Style::default().fg(receipts_color),
            ),
        ]),
        Line::from(vec![
            Span::styled("Deadline   ", Style::default().fg(theme.muted)),
            Span::styled(
                format!("{} days left", export.days_left),
                Style::default().fg(theme.text),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(theme.success).bg(theme.selection_bg))
            .percent(export.progress.min(100) as u16),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::RequestLogger;
    use crate::config::Settings;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;
    use tempfile::TempDir;

    #[test]
    fn test_balances_use_configured_currency() {
        let dir = TempDir::new().unwrap();
        let settings = Settings {
            skip_intro: true,
            currency_symbol: "$".into(),
            ..Settings::default()
        };
        let app = App::new(
            settings,
            Theme::default(),
            RequestLogger::new(dir.path().join("requests.log")),
            Instant::now(),
        );
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, &app, frame.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        let total = app.dashboard.total_balance().format_with_symbol("$");
        assert!(text.contains(&total));
        assert!(!text.contains('€'));
    }
}
