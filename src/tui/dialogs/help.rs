//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::Theme;
use crate::tui::app::{ActivePage, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());
    let theme = &app.theme;

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));

    let paragraph = Paragraph::new(help_lines(app.active_page, theme))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(theme.highlight),
    ))
}

/// Help lines for the current page
pub fn help_lines(page: ActivePage, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys", theme),
        Line::from(""),
        key_line("q", "Quit application", theme),
        key_line("?", "Show/hide help", theme),
        key_line("1-7", "Jump to page", theme),
        key_line("Tab", "Switch panel focus", theme),
        key_line("j/k", "Move selection up/down", theme),
        key_line("n", "New card", theme),
        Line::from(""),
    ];

    match page {
        ActivePage::Cards => {
            lines.push(heading("Cards", theme));
            lines.push(Line::from(""));
            lines.push(key_line("/", "Search by label, holder or digits", theme));
            lines.push(key_line("Enter", "Open card details", theme));
            lines.push(key_line("d", "Toggle spending breakdown", theme));
            lines.push(key_line("Esc", "Close drawer / clear search", theme));
        }
        ActivePage::Transactions => {
            lines.push(heading("Transactions", theme));
            lines.push(Line::from(""));
            lines.push(key_line("/", "Search by merchant, member or card", theme));
            lines.push(key_line("[ ]", "Previous/next filter tab", theme));
            lines.push(key_line("Enter", "Open transaction details", theme));
            lines.push(key_line("Esc", "Close drawer / clear search", theme));
        }
        ActivePage::Dashboard | ActivePage::Accounts => {
            lines.push(heading(page.label(), theme));
            lines.push(Line::from(""));
            lines.push(Line::from("Read-only overview of balances and activity."));
        }
        _ => {
            lines.push(heading(page.label(), theme));
            lines.push(Line::from(""));
            lines.push(Line::from("This page is not available yet."));
        }
    }

    lines.push(Line::from(""));
    lines.push(heading("Card Wizard", theme));
    lines.push(Line::from(""));
    lines.push(key_line("Tab/↑↓", "Move between fields", theme));
    lines.push(key_line("←/→", "Change selection", theme));
    lines.push(key_line("Space", "Toggle option", theme));
    lines.push(key_line("PgDn/PgUp", "Next/previous step", theme));
    lines.push(key_line("Enter", "Add entry / next step / create", theme));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(theme.muted),
    )));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(theme.accent)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(theme.text)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .flat_map(|l| l.spans.iter().map(|s| s.content.to_string()))
            .collect::<Vec<_>>()
            .join("|")
    }

    #[test]
    fn test_help_is_contextual() {
        let theme = Theme::default();
        let cards = text(&help_lines(ActivePage::Cards, &theme));
        assert!(cards.contains("Toggle spending breakdown"));
        assert!(!cards.contains("filter tab"));

        let txns = text(&help_lines(ActivePage::Transactions, &theme));
        assert!(txns.contains("Previous/next filter tab"));
    }

    #[test]
    fn test_placeholder_pages() {
        let theme = Theme::default();
        let payments = text(&help_lines(ActivePage::Payments, &theme));
        assert!(payments.contains("not available yet"));
    }
}
