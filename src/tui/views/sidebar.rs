//! Sidebar view
//!
//! Brand header, page list and the "New Card" shortcut

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::tui::app::{ActivePage, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, app, layout.header);
    render_pages(frame, app, layout.pages);
    render_footer(frame, app, layout.footer);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .title(" spendcard ")
        .title_style(
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));

    let version = Paragraph::new(format!("v{}", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(theme.muted));

    frame.render_widget(version, area);
}

fn render_pages(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(theme.border_style(is_focused));

    let items: Vec<ListItem> = ActivePage::ALL
        .iter()
        .map(|page| {
            let active = app.active_page == *page;
            let style = if active {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else if page.is_placeholder() {
                Style::default().fg(theme.muted)
            } else {
                Style::default().fg(theme.text)
            };

            let indicator = if active { "▶" } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(
                    format!("[{}] ", page.shortcut()),
                    Style::default().fg(theme.highlight),
                ),
                Span::styled(page.label(), style),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.selected());

    let mut state = ListState::default();
    if is_focused {
        state.select(Some(app.sidebar_index));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(false));

    let line = Line::from(vec![
        Span::styled("[n] ", Style::default().fg(theme.highlight)),
        Span::styled("+ New Card", Style::default().fg(theme.text)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
