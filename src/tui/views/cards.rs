//! Cards view
//!
//! Searchable table of the company cards

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::config::{DisplayFormat, Theme};
use crate::models::{Card, CardStatus};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::ListPageLayout;

use super::render_search_bar;

/// Render the cards page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = ListPageLayout::new(area);

    render_header(frame, app, layout.header);
    render_search_bar(
        frame,
        app,
        layout.search,
        app.cards.query(),
        "Search by label, holder or last four",
    );
    render_table(frame, app, layout.content);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(format!(" Cards ({}) ", app.cards.count_label()))
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));

    let hints = Paragraph::new("Enter:Details  /:Search  n:New card")
        .block(block)
        .style(Style::default().fg(theme.muted));

    frame.render_widget(hints, area);
}

fn status_color(status: CardStatus, theme: &Theme) -> ratatui::style::Color {
    match status {
        CardStatus::Active => theme.success,
        CardStatus::Requested | CardStatus::Pending => theme.warning,
        CardStatus::Terminated | CardStatus::Expired => theme.danger,
    }
}

/// Table row of one card
fn card_row<'a>(card: &'a Card, theme: &Theme, format: &DisplayFormat) -> Row<'a> {
    Row::new(vec![
        Cell::from("▇▇").style(Style::default().fg(theme.card_swatch(card.color))),
        Cell::from(card.display_name()),
        Cell::from(card.holder.as_str()),
        Cell::from(card.kind.to_string()),
        Cell::from(Line::from(Span::styled(
            format!("{} {}", card.status.icon(), card.status),
            Style::default().fg(status_color(card.status, theme)),
        ))),
        Cell::from(format!(
            "{}/{}",
            format.whole(card.spending_limit),
            card.limit_frequency.period_noun()
        )),
        Cell::from(format!("{:.0}%", card.usage_percent())),
    ])
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let is_focused = app.focused_panel == FocusedPanel::Main;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(is_focused));

    if app.cards.is_empty() {
        let message = if app.cards.query().is_empty() {
            "No cards yet. Press 'n' to create one.".to_string()
        } else {
            format!("No cards match \"{}\"", app.cards.query())
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
        Constraint::Length(3),  // Swatch
        Constraint::Min(18),    // Card
        Constraint::Length(18), // Holder
        Constraint::Length(9),  // Type
        Constraint::Length(13), // Status
        Constraint::Length(14), // Limit
        Constraint::Length(6),  // Usage
    ];

    let header = Row::new(vec!["", "Card", "Holder", "Type", "Status", "Limit", "Used"])
        .style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .height(1);

    let rows: Vec<Row> = app
        .cards
        .visible()
        .map(|card| card_row(card, theme, &app.format))
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(theme.selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.cards.selected_index()));

    frame.render_stateful_widget(table, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::RequestLogger;
    use crate::config::Settings;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;
    use tempfile::TempDir;

    fn test_app(dir: &TempDir) -> App {
        app_with_settings(
            dir,
            Settings {
                skip_intro: true,
                ..Settings::default()
            },
        )
    }

    fn app_with_settings(dir: &TempDir, settings: Settings) -> App {
        App::new(
            settings,
            Theme::default(),
            RequestLogger::new(dir.path().join("requests.log")),
            Instant::now(),
        )
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_visible_cards() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, &app, frame.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        let first = app.cards.items()[0].holder.clone();
        assert!(text.contains(&first));
    }

    #[test]
    fn test_limits_use_configured_currency() {
        let dir = TempDir::new().unwrap();
        let app = app_with_settings(
            &dir,
            Settings {
                skip_intro: true,
                currency_symbol: "$".into(),
                date_format: "%Y-%m-%d".into(),
                ..Settings::default()
            },
        );
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, &app, frame.area()))
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("$5,000/month"));
        assert!(!text.contains('€'));
    }

    #[test]
    fn test_empty_state_names_query() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.cards.set_query("zzzz-nothing");
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|frame| render(frame, &app, frame.area()))
            .unwrap();

        assert!(buffer_text(&terminal).contains("No cards match"));
    }
}
