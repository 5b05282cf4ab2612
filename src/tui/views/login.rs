//! Login screen view
//!
//! Welcome banner, then the email/password form. After submit the form stays
//! visible with a loading gauge in place of the button.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::config::Theme;
use crate::login::{LoginField, LoginPhase, LoginScreen};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

const BANNER: [&str; 3] = [
    "┌─┐┌─┐┌─┐┌┐┌┌┬┐┌─┐┌─┐┬─┐┌┬┐",
    "└─┐├─┘├┤ │││ ││├┤ ├─┤├┬┘ ││",
    "└─┘┴  └─┘┘└┘─┴┘└─┘┴ ┴┴└──┴┘",
];

/// Render the login screen
pub fn render(frame: &mut Frame, login: &LoginScreen, theme: &Theme, now: Instant) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    match login.phase() {
        LoginPhase::Welcome => render_welcome(frame, theme, area),
        LoginPhase::Interlude | LoginPhase::Done => {}
        LoginPhase::Form | LoginPhase::Loading => render_form(frame, login, theme, area, now),
    }
}

fn render_welcome(frame: &mut Frame, theme: &Theme, area: Rect) {
    let mut lines: Vec<Line> = BANNER
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                *row,
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Welcome back",
        Style::default().fg(theme.text),
    )));

    let rect = centered_rect_fixed(32, lines.len() as u16, area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
}

fn render_form(frame: &mut Frame, login: &LoginScreen, theme: &Theme, area: Rect, now: Instant) {
    let rect = centered_rect_fixed(50, 13, area);
    let block = Block::default()
        .title(" Log in ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style(true));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(1),
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Length(1), // Button or gauge
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new("Use any email and password").style(Style::default().fg(theme.muted)),
        chunks[0],
    );

    let loading = login.phase() == LoginPhase::Loading;
    let editing = |field: LoginField| !loading && login.focus == field;

    render_field(
        frame,
        theme,
        chunks[2],
        TextInput::new()
            .placeholder("name@company.com")
            .content(login.email.as_str())
            .focused(editing(LoginField::Email)),
        "Email",
        editing(LoginField::Email),
    );
    render_field(
        frame,
        theme,
        chunks[3],
        TextInput::new()
            .placeholder("••••••••")
            .content(login.password.masked())
            .focused(editing(LoginField::Password)),
        "Password",
        editing(LoginField::Password),
    );

    if loading {
        let progress = login.loading_progress(now);
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(theme.accent).bg(theme.selection_bg))
                .ratio(progress.clamp(0.0, 1.0))
                .label("Signing in…"),
            chunks[4],
        );
    } else {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    "[ Log in ]",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Enter: submit  Tab: next field", Style::default().fg(theme.muted)),
            ])),
            chunks[4],
        );
    }
}

fn render_field(
    frame: &mut Frame,
    theme: &Theme,
    area: Rect,
    input: TextInput,
    title: &str,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(input.accent(theme.accent), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationTimings;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(login: &LoginScreen, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render(frame, login, &Theme::default(), now))
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
    fn test_welcome_then_form() {
        let now = Instant::now();
        let login = LoginScreen::new(AnimationTimings::default(), now, false);
        assert!(draw(&login, now).contains("Welcome back"));

        let login = LoginScreen::new(AnimationTimings::default(), now, true);
        let text = draw(&login, now);
        assert!(text.contains("Log in"));
        assert!(!text.contains("Welcome back"));
    }

    #[test]
    fn test_password_is_masked() {
        let now = Instant::now();
        let mut login = LoginScreen::new(AnimationTimings::default(), now, true);
        login.focus_next();
        for c in "hunter2".chars() {
            login.insert(c);
        }
        let text = draw(&login, now);
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn test_loading_shows_gauge() {
        let now = Instant::now();
        let mut login = LoginScreen::new(AnimationTimings::default(), now, true);
        assert!(login.submit(now));
        assert!(draw(&login, now).contains("Signing in"));
    }
}
