//! Card detail drawer
//!
//! Slides in from the right over the cards page. Shows limits and usage,
//! recent card activity and the change history; `d` expands the spending
//! breakdown.

use std::time::Instant;

use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::config::{DisplayFormat, Theme};
use crate::sample::{self, CardActivity, HistoryEntry};
use crate::tui::app::{App, CardDrawerState};
use crate::tui::layout::drawer_rect;

/// Render the card drawer, if mounted
pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let Some(state) = app.card_drawer.item() else {
        return;
    };
    let area = drawer_rect(frame.area(), app.card_drawer.reveal(now));
    if area.width < 4 {
        return;
    }
    let theme = &app.theme;

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", state.card.display_name()))
        .title_style(theme.title())
        .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.card_swatch(state.card.color)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Usage gauge
            Constraint::Min(3),    // Details
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let card = &state.card;
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(theme.highlight).bg(theme.selection_bg))
            .ratio((card.usage_percent() / 100.0).clamp(0.0, 1.0))
            .label(format!("{:.0}% used", card.usage_percent())),
        chunks[0],
    );

    let lines = card_lines(
        state,
        app.today,
        &sample::card_activity(),
        &sample::card_history(),
        theme,
        &app.format,
    );
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        chunks[1],
    );

    let toggle = if state.show_details {
        "d: hide breakdown"
    } else {
        "d: show breakdown"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{}  Esc: close", toggle),
            Style::default().fg(theme.muted),
        )),
        chunks[2],
    );
}

fn heading(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD),
    ))
}

fn row(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<16}", label), Style::default().fg(theme.accent)),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}

/// Drawer body for one card
pub fn card_lines(
    state: &CardDrawerState,
    today: NaiveDate,
    activity: &[CardActivity],
    history: &[HistoryEntry],
    theme: &Theme,
    format: &DisplayFormat,
) -> Vec<Line<'static>> {
    let card = &state.card;
    let mut lines = vec![
        row("Holder", card.holder.clone(), theme),
        row("Status", format!("{} {}", card.status.icon(), card.status), theme),
        row("Type", card.kind.to_string(), theme),
        Line::from(""),
        heading("Spending", theme),
        row(
            "Limit",
            format!(
                "{} per {}",
                format.whole(card.spending_limit),
                card.limit_frequency.period_noun()
            ),
            theme,
        ),
        row("Available", format.money(card.available), theme),
        row(
            "Used",
            format!("{} ({:.1}%)", format.money(card.used()), card.usage_percent()),
            theme,
        ),
        row(
            "Resets",
            format.date(card.limit_frequency.next_reset(today)),
            theme,
        ),
    ];

    if state.show_details {
        lines.push(row(
            "Per purchase",
            format.whole(card.single_transaction_limit),
            theme,
        ));
        lines.push(row(
            "Transactions",
            format!(
                "{}/{} per {}",
                card.transaction_count,
                card.max_transaction_count,
                card.transaction_frequency.period_noun()
            ),
            theme,
        ));
        lines.push(row(
            "Count resets",
            format.date(card.transaction_frequency.next_reset(today)),
            theme,
        ));
    }

    lines.push(Line::from(""));
    lines.push(heading("Details", theme));
    lines.push(row("Account", card.account.clone(), theme));
    lines.push(row(
        "Valid",
        format!(
            "{} to {}",
            format.date(card.issued),
            format.date(card.valid_until)
        ),
        theme,
    ));
    lines.push(row("Team", card.team_or_default().to_string(), theme));
    if let Some(project) = &card.project {
        lines.push(row("Project", project.clone(), theme));
    }

    lines.push(Line::from(""));
    lines.push(heading("Recent transactions", theme));
    for item in activity {
        let status = if item.completed { "" } else { " (pending)" };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<22}", item.merchant),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("{:>12}", format.money(item.amount)),
                Style::default().fg(theme.text),
            ),
            Span::styled(
                format!("  {}{}", format.date(item.date), status),
                Style::default().fg(theme.muted),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("History", theme));
    for entry in history {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}  ", format.date(entry.date)),
                Style::default().fg(theme.muted),
            ),
            Span::styled(entry.action.clone(), Style::default().fg(theme.text)),
            Span::styled(
                format!(" by {}", entry.actor),
                Style::default().fg(theme.muted),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("            {}", entry.details),
            Style::default().fg(theme.muted),
        )));
    }

    lines
}
