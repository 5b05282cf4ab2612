//! Status bar view
//!
//! Shows the current page, credit available, the status message and key hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.active_page),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("│ "),
        Span::styled("Available: ", Style::default().fg(theme.text)),
        Span::styled(
            app.format.whole(app.dashboard.available),
            Style::default().fg(theme.amount(app.dashboard.available.is_negative())),
        ),
    ];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(theme.warning),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Search => " Enter:Done  Esc:Clear ",
        InputMode::Editing => " Esc:Cancel ",
        InputMode::Normal => " q:Quit  ?:Help  /:Search  n:New card ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
