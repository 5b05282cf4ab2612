//! Transactions view
//!
//! Filter tabs, search and the transaction table

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs},
    Frame,
};

use crate::config::{DisplayFormat, Theme};
use crate::listing::TransactionFilter;
use crate::models::Transaction;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::ListPageLayout;

use super::render_search_bar;

/// Render the transactions page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = ListPageLayout::new(area);

    render_filter_tabs(frame, app, layout.header);
    render_search_bar(
        frame,
        app,
        layout.search,
        app.transactions.query(),
        "Search by merchant, member or card",
    );
    render_table(frame, app, layout.content);
}

fn render_filter_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let active = *app.transactions.filter();
    let selected = TransactionFilter::ALL
        .iter()
        .position(|f| *f == active)
        .unwrap_or(0);

    let block = Block::default()
        .title(format!(
            " Transactions ({}) ",
            app.transactions.count_label()
        ))
        .title_style(theme.title())
        .title_bottom(Line::from(" [/]: filter ").right_aligned())
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));

    let tabs = Tabs::new(TransactionFilter::ALL.iter().map(|f| f.label()))
        .block(block)
        .select(selected)
        .style(Style::default().fg(theme.muted))
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

    frame.render_widget(tabs, area);
}

/// Review badges: needs review, flagged, missing receipt
fn badges(txn: &Transaction) -> String {
    let mut out = String::new();
    if txn.review.needs_review {
        out.push('●');
    }
    if txn.review.is_flagged {
        out.push('⚑');
    }
    if txn.receipt_number.is_none() {
        out.push('⎘');
    }
    out
}

fn transaction_row<'a>(txn: &'a Transaction, theme: &Theme, format: &DisplayFormat) -> Row<'a> {
    let merchant = match txn.status.icon() {
        Some(icon) => Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(theme.warning)),
            Span::raw(txn.merchant.name.as_str()),
        ]),
        None => Line::from(txn.merchant.name.as_str()),
    };

    Row::new(vec![
        Cell::from(format.date(txn.date)),
        Cell::from(merchant),
        Cell::from(txn.member.as_str()),
        Cell::from(format!("{} ••{}", txn.card.label, txn.card.last_four)),
        Cell::from(txn.accounting.category.as_str()),
        Cell::from(format.money(txn.amount))
            .style(Style::default().fg(theme.amount(txn.amount.is_negative()))),
        Cell::from(badges(txn)).style(Style::default().fg(theme.danger)),
    ])
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(is_focused));

    if app.transactions.is_empty() {
        let message = if app.transactions.query().is_empty() {
            format!(
                "No {} transactions",
                app.transactions.filter().label().to_lowercase()
            )
        } else {
            format!("No transactions match \"{}\"", app.transactions.query())
        };
        frame.render_widget(
            Paragraph::new(message)
                .block(block)
                .style(Style::default().fg(theme.muted)),
            area,
        );
        return;
    }

    let widths = [
        Constraint::Length(11), // Date
        Constraint::Min(18),    // Merchant
        Constraint::Length(16), // Member
        Constraint::Length(18), // Card
        Constraint::Length(14), // Category
        Constraint::Length(13), // Amount
        Constraint::Length(4),  // Badges
    ];

    let header = Row::new(vec!["Date", "Merchant", "Member", "Card", "Category", "Amount", ""])
        .style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .height(1);

    let rows: Vec<Row> = app
        .transactions
        .visible()
        .map(|txn| transaction_row(txn, theme, &app.format))
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(theme.selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.transactions.selected_index()));

    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::RequestLogger;
    use crate::config::Settings;
    use crate::sample;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;
    use tempfile::TempDir;

    #[test]
    fn test_badges() {
        let mut txn = sample::transactions().remove(0);
        txn.review.needs_review = true;
        txn.review.is_flagged = false;
        txn.receipt_number = Some("R-1".into());
        assert_eq!(badges(&txn), "●");

        txn.review.is_flagged = true;
        txn.receipt_number = None;
        assert_eq!(badges(&txn), "●⚑⎘");
    }

    fn app_with(dir: &TempDir, settings: Settings) -> App {
        App::new(
            Settings {
                skip_intro: true,
                ..settings
            },
            Theme::default(),
            RequestLogger::new(dir.path().join("requests.log")),
            Instant::now(),
        )
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, app, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_search_miss() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, Settings::default());
        app.transactions.set_query("no-such-merchant");

        let text = draw(&app);
        assert!(text.contains("No transactions match"));
        assert!(text.contains("Needs Review"));
    }

    #[test]
    fn test_rows_use_configured_formats() {
        let dir = TempDir::new().unwrap();
        let app = app_with(
            &dir,
            Settings {
                currency_symbol: "$".into(),
                date_format: "%Y-%m-%d".into(),
                ..Settings::default()
            },
        );
        let first = app.transactions.visible().next().unwrap().clone();

        let text = draw(&app);
        assert!(text.contains(&first.date.format("%Y-%m-%d").to_string()));
        assert!(text.contains(&first.amount.format_with_symbol("$")));
        assert!(!text.contains('€'));
    }
}
