//! Dashboard view
//!
//! Read-only widgets over the dashboard data: credit overview, account
//! balances, side figures, the balance chart, money movement and recent
//! transactions.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Sparkline, Table},
    Frame,
};

use crate::config::{DisplayFormat, Theme};
use crate::models::{ChartPoint, Counterparty, DashboardData, MoneyMovement};
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

/// Render the dashboard page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = DashboardLayout::new(area);
    let data = &app.dashboard;
    let theme = &app.theme;
    let format = &app.format;

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {}", data.greeting),
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   n: new card", Style::default().fg(theme.muted)),
        ])),
        layout.greeting,
    );

    let overview = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(layout.overview);
    render_credit(frame, data, theme, format, overview[0]);
    render_accounts(frame, data, theme, format, overview[1]);
    render_side_figures(frame, data, theme, format, overview[2]);

    render_chart(frame, &data.chart, theme, layout.chart);
    render_money_movement(frame, &data.money_movement, theme, format, layout.movement);
    render_recent(frame, data, theme, format, layout.recent);
}

fn panel<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_style(false))
}

fn figure(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(theme.muted)),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}

fn render_credit(
    frame: &mut Frame,
    data: &DashboardData,
    theme: &Theme,
    format: &DisplayFormat,
    area: Rect,
) {
    let block = panel("Credit", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let change_color = theme.amount(data.monthly_change.is_negative());
    let lines = vec![
        Line::from(Span::styled(
            format.whole(data.available),
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        figure("Limit", format.whole(data.credit_limit), theme),
        figure("Used", format.whole(data.credit_used()), theme),
        Line::from(vec![
            Span::styled(format!("{:<12}", "This month"), Style::default().fg(theme.muted)),
            Span::styled(
                format!(
                    "{} ({:+.1}%)",
                    format.signed(data.monthly_change),
                    data.monthly_change_percent
                ),
                Style::default().fg(change_color),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let utilization = data.credit_utilization();
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(theme.accent).bg(theme.selection_bg))
            .ratio((utilization / 100.0).clamp(0.0, 1.0))
            .label(format!("{:.1}% utilized", utilization)),
        chunks[1],
    );
}

fn render_accounts(
    frame: &mut Frame,
    data: &DashboardData,
    theme: &Theme,
    format: &DisplayFormat,
    area: Rect,
) {
    let mut lines: Vec<Line> = data
        .accounts
        .iter()
        .map(|account| {
            Line::from(vec![
                Span::styled(
                    format!("{:<16}", account.name),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:>14}", format.money(account.balance)),
                    Style::default().fg(theme.amount(account.balance.is_negative())),
                ),
            ])
        })
        .collect();
    lines.push(Line::from(vec![
        Span::styled(
            format!("{:<16}", "Total"),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>14}", format.money(data.total_balance())),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).block(panel("Accounts", theme)), area);
}

fn render_side_figures(
    frame: &mut Frame,
    data: &DashboardData,
    theme: &Theme,
    format: &DisplayFormat,
    area: Rect,
) {
    let lines = vec![
        figure(
            "CO₂",
            format!(
                "{:.1}/{:.1} t ({}% offset)",
                data.co2.compensated, data.co2.total, data.co2.compensation_percent
            ),
            theme,
        ),
        figure(
            "Cashback",
            format!(
                "{} ({} available)",
                format.whole(data.cashback.total),
                format.whole(data.cashback.available)
            ),
            theme,
        ),
        figure(
            "Export",
            format!(
                "{}% · {} receipts missing",
                data.account_export.progress, data.account_export.missing_receipts
            ),
            theme,
        ),
        figure(
            "Bill pay",
            format!(
                "{} outstanding · {} overdue",
                data.bill_pay.outstanding, data.bill_pay.overdue
            ),
            theme,
        ),
        figure(
            "Invoices",
            format!(
                "{} open · {} overdue",
                data.invoicing.open.count, data.invoicing.overdue.count
            ),
            theme,
        ),
        figure(
            "Card",
            format!(
                "{} ({:.0}% used)",
                format.whole(data.credit_card.balance),
                data.credit_card.utilization
            ),
            theme,
        ),
    ];

    frame.render_widget(Paragraph::new(lines).block(panel("Overview", theme)), area);
}

/// Chart values in whole euros, floored at zero
pub fn chart_series(points: &[ChartPoint]) -> Vec<u64> {
    points
        .iter()
        .map(|p| p.value.euros().max(0) as u64)
        .collect()
}

fn render_chart(frame: &mut Frame, points: &[ChartPoint], theme: &Theme, area: Rect) {
    let title = match (points.first(), points.last()) {
        (Some(first), Some(last)) => format!("Balance {} to {}", first.date, last.date),
        _ => "Balance".to_string(),
    };
    let data = chart_series(points);
    frame.render_widget(
        Sparkline::default()
            .block(panel(&title, theme))
            .data(&data)
            .style(Style::default().fg(theme.highlight)),
        area,
    );
}

fn counterparty_lines(
    title: &'static str,
    list: &[Counterparty],
    theme: &Theme,
    format: &DisplayFormat,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(title, Style::default().fg(theme.muted)))];
    for item in list {
        let share = MoneyMovement::share_of_largest(list, item);
        let bar = "█".repeat(((share / 10.0).round() as usize).max(1));
        lines.push(Line::from(vec![
            Span::styled(format!("{:<3}", item.initials), Style::default().fg(theme.accent)),
            Span::styled(format!("{:<18}", item.name), Style::default().fg(theme.text)),
            Span::styled(
                format!("{:>13} ", format.money(item.amount)),
                Style::default().fg(theme.amount(item.amount.is_negative())),
            ),
            Span::styled(bar, Style::default().fg(theme.muted)),
        ]));
    }
    lines
}

fn render_money_movement(
    frame: &mut Frame,
    mm: &MoneyMovement,
    theme: &Theme,
    format: &DisplayFormat,
    area: Rect,
) {
    let block = panel("Money movement", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(30),
            Constraint::Percentage(50),
            Constraint::Percentage(50),
        ])
        .split(inner);

    let totals = vec![
        Line::from(Span::styled(mm.period.clone(), Style::default().fg(theme.muted))),
        Line::from(vec![
            Span::styled("In   ", Style::default().fg(theme.muted)),
            Span::styled(format.signed(mm.money_in), Style::default().fg(theme.success)),
        ]),
        Line::from(vec![
            Span::styled("Out  ", Style::default().fg(theme.muted)),
            Span::styled(format.money(mm.money_out), Style::default().fg(theme.danger)),
        ]),
        Line::from(vec![
            Span::styled("Net  ", Style::default().fg(theme.muted)),
            Span::styled(
                format.signed(mm.net()),
                Style::default()
                    .fg(theme.amount(mm.net().is_negative()))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "Avg in {} / out {}",
                format.money(mm.average_in),
                format.money(mm.average_out)
            ),
            Style::default().fg(theme.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(totals), columns[0]);
    frame.render_widget(
        Paragraph::new(counterparty_lines("Top sources", &mm.top_sources, theme, format)),
        columns[1],
    );
    frame.render_widget(
        Paragraph::new(counterparty_lines("Top spend", &mm.top_spend, theme, format)),
        columns[2],
    );
}

fn render_recent(
    frame: &mut Frame,
    data: &DashboardData,
    theme: &Theme,
    format: &DisplayFormat,
    area: Rect,
) {
    let header = Row::new(vec!["Date", "Description", "Amount", "Account", "Method"])
        .style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        );

    let rows: Vec<Row> = data
        .recent
        .iter()
        .map(|row| {
            let description = match &row.status {
                Some(status) => Line::from(vec![
                    Span::raw(format!("{} ", row.description)),
                    Span::styled(format!("[{}]", status), Style::default().fg(theme.danger)),
                ]),
                None => Line::from(row.description.clone()),
            };
            Row::new(vec![
                Cell::from(row.date.clone()),
                Cell::from(description),
                Cell::from(format.money(row.amount))
                    .style(Style::default().fg(theme.amount(row.amount.is_negative()))),
                Cell::from(row.account.clone()),
                Cell::from(row.method.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Min(20),
        Constraint::Length(14),
        Constraint::Length(16),
        Constraint::Length(14),
    ];

    frame.render_widget(
        Table::new(rows, widths)
            .header(header)
            .block(panel("Recent transactions", theme)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::sample;

    #[test]
    fn test_chart_series_in_euros() {
        let points = vec![
            ChartPoint {
                date: "Jun 1".into(),
                value: Money::from_euros_cents(1200, 99),
            },
            ChartPoint {
                date: "Jun 2".into(),
                value: Money::from_euros(-5),
            },
        ];
        assert_eq!(chart_series(&points), vec![1200, 0]);
    }

    #[test]
    fn test_counterparty_bars() {
        let data = sample::dashboard();
        let lines = counterparty_lines(
            "Top spend",
            &data.money_movement.top_spend,
            &Theme::default(),
            &DisplayFormat::new("$", "%Y-%m-%d"),
        );
        assert_eq!(lines.len(), data.money_movement.top_spend.len() + 1);
        let first: String = lines[1].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.contains('$'));
    }
}
