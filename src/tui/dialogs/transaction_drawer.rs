//! Transaction detail drawer

use std::time::Instant;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::{DisplayFormat, Theme};
use crate::models::{Transaction, TransactionStatus};
use crate::tui::app::App;
use crate::tui::layout::drawer_rect;

/// Render the transaction drawer, if mounted
pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let Some(txn) = app.transaction_drawer.item() else {
        return;
    };
    let area = drawer_rect(frame.area(), app.transaction_drawer.reveal(now));
    if area.width < 4 {
        return;
    }
    let theme = &app.theme;

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(format!(" {} ", txn.merchant.name))
        .title_style(theme.title())
        .title_bottom(Line::from(Span::styled(
            " Esc: close ",
            Style::default().fg(theme.muted),
        )))
        .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
        .border_style(theme.border_style(true));

    frame.render_widget(
        Paragraph::new(transaction_lines(txn, theme, &app.format))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn status_color(status: TransactionStatus, theme: &Theme) -> ratatui::style::Color {
    match status {
        TransactionStatus::Successful => theme.success,
        TransactionStatus::Pending => theme.warning,
        TransactionStatus::Declined => theme.danger,
        TransactionStatus::Refunded => theme.info,
    }
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
        Span::styled(format!("{:<20}", label), Style::default().fg(theme.accent)),
        Span::styled(value, Style::default().fg(theme.text)),
    ])
}

/// Drawer body for one transaction
pub fn transaction_lines(
    txn: &Transaction,
    theme: &Theme,
    format: &DisplayFormat,
) -> Vec<Line<'static>> {
    let status = match txn.status.icon() {
        Some(icon) => format!("{} {}", icon, txn.status),
        None => txn.status.to_string(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format.money(txn.amount),
            Style::default()
                .fg(theme.amount(txn.amount.is_negative()))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("{}  ", format.date(txn.date)),
                Style::default().fg(theme.muted),
            ),
            Span::styled(status, Style::default().fg(status_color(txn.status, theme))),
        ]),
    ];

    let mut badges = Vec::new();
    if txn.review.needs_review {
        badges.push(Span::styled(
            "[Needs review] ",
            Style::default().fg(theme.warning),
        ));
    }
    if txn.review.is_flagged {
        badges.push(Span::styled("[Flagged] ", Style::default().fg(theme.danger)));
    }
    if !badges.is_empty() {
        lines.push(Line::from(badges));
    }

    lines.push(Line::from(""));
    lines.push(heading("Card", theme));
    lines.push(row(
        "Card",
        format!("{} ••{} ({})", txn.card.label, txn.card.last_four, txn.card.kind),
        theme,
    ));
    lines.push(row("Member", txn.member.clone(), theme));
    lines.push(row("Merchant category", txn.merchant.category.clone(), theme));
    lines.push(row("CO₂ emission", format!("{} kg", txn.co2_kg), theme));

    lines.push(Line::from(""));
    lines.push(heading("Accounting", theme));
    lines.push(row("Category", txn.accounting.category.clone(), theme));
    lines.push(row(
        "VAT",
        format!("{} ({}%)", format.money(txn.vat()), txn.accounting.vat_rate),
        theme,
    ));
    lines.push(row("Project", txn.project_or_default().to_string(), theme));
    lines.push(row("Team", txn.team_or_default().to_string(), theme));
    if let Some(reference) = &txn.accounting.consumer_reference {
        lines.push(row("Reference", reference.clone(), theme));
    }
    lines.push(row(
        "Receipt",
        txn.receipt_number
            .clone()
            .unwrap_or_else(|| "Missing".to_string()),
        theme,
    ));
    let export = match txn.export.export_date {
        Some(date) if txn.export.is_exported => format!("Exported {}", format.date(date)),
        _ => "Not exported".to_string(),
    };
    lines.push(row("Export", export, theme));

    lines.push(Line::from(""));
    lines.push(heading("Details", theme));
    lines.push(row("Cardholder", txn.details.cardholder.clone(), theme));
    lines.push(row("Account", txn.details.account.clone(), theme));
    if let Some(note) = &txn.details.note {
        lines.push(row("Note", note.clone(), theme));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_vat_line() {
        let txn = sample::transactions().into_iter().next().unwrap();
        let body = text(&transaction_lines(&txn, &Theme::default(), &DisplayFormat::default()));
        assert!(body.contains(&format!("{} (19%)", txn.vat())));
        assert!(body.contains("RCP-2024-0001"));
    }

    #[test]
    fn test_body_follows_display_format() {
        let txn = sample::transactions().into_iter().next().unwrap();
        let format = DisplayFormat::new("$", "%Y-%m-%d");
        let body = text(&transaction_lines(&txn, &Theme::default(), &format));
        assert!(body.contains("$47.90 (19%)"));
        assert!(body.contains("Exported 2024-01-16"));
        assert!(body.contains(&txn.date.format("%Y-%m-%d").to_string()));
        assert!(!body.contains('€'));
    }

    #[test]
    fn test_review_badges() {
        let txns = sample::transactions();
        let flagged = txns.iter().find(|t| t.review.is_flagged).unwrap();
        let body = text(&transaction_lines(flagged, &Theme::default(), &DisplayFormat::default()));
        assert!(body.contains("[Needs review]"));
        assert!(body.contains("[Flagged]"));

        let clean = txns
            .iter()
            .find(|t| !t.review.needs_review && !t.review.is_flagged)
            .unwrap();
        let body = text(&transaction_lines(clean, &Theme::default(), &DisplayFormat::default()));
        assert!(!body.contains("[Flagged]"));
    }
}
