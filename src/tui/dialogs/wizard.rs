//! Card wizard dialog
//!
//! Modal five-step form for requesting a new card. Each step shows a list of
//! controls; Tab moves between them, PageDown/PageUp move between steps and
//! Enter on the summary creates the card request.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::config::Theme;
use crate::models::CardColor;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::TextInput;
use crate::wizard::options::{
    cycle_choice, label_for, Choice, DAYS, LIMIT_PERIODS, PROJECTS, SPENDING_CATEGORIES, TEAMS,
    VALID_PERIODS,
};
use crate::wizard::{
    CardTypeId, CardWizard, FieldUpdate, ListEdit, ListField, ListMode, Step, TimeWindow,
    WizardFormState,
};

/// One editable control of a wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Assignee,
    UseTemplate,
    CardType,
    ValidPeriod,
    LimitPeriod,
    LimitAmount,
    LimitCount,
    TransactionLimit,
    CategoriesMode,
    Categories,
    MerchantsMode,
    Merchants,
    TimeMode,
    Days,
    TimeStart,
    TimeEnd,
    RegionsMode,
    Regions,
    Atm,
    CardName,
    Color,
    Team,
    Project,
    Create,
}

/// How a control is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Free text typed straight into the form
    Text,
    /// On/off, flipped with Space
    Toggle,
    /// One of a fixed set, stepped with Left/Right
    Select,
    /// Several of a fixed set, cursor with Left/Right, Space toggles
    Checklist,
    /// Free-form list: type a value, Enter adds it
    Entry,
    Button,
}

impl Control {
    /// Controls shown on `step`, in focus order
    pub fn for_step(step: Step) -> &'static [Control] {
        match step {
            Step::CardSetup => &[Self::Assignee, Self::UseTemplate, Self::CardType],
            Step::LimitsValidity => &[
                Self::ValidPeriod,
                Self::LimitAmount,
                Self::LimitPeriod,
                Self::LimitCount,
                Self::TransactionLimit,
            ],
            Step::CardControls => &[
                Self::CategoriesMode,
                Self::Categories,
                Self::MerchantsMode,
                Self::Merchants,
                Self::TimeMode,
                Self::Days,
                Self::TimeStart,
                Self::TimeEnd,
                Self::RegionsMode,
                Self::Regions,
                Self::Atm,
            ],
            Step::Customization => &[Self::CardName, Self::Color, Self::Team, Self::Project],
            Step::Summary => &[Self::Create],
        }
    }

    pub fn kind(&self) -> ControlKind {
        match self {
            Self::Assignee
            | Self::LimitAmount
            | Self::LimitCount
            | Self::TransactionLimit
            | Self::TimeStart
            | Self::TimeEnd
            | Self::CardName => ControlKind::Text,
            Self::UseTemplate
            | Self::CategoriesMode
            | Self::MerchantsMode
            | Self::TimeMode
            | Self::RegionsMode
            | Self::Atm => ControlKind::Toggle,
            Self::CardType
            | Self::ValidPeriod
            | Self::LimitPeriod
            | Self::Color
            | Self::Team
            | Self::Project => ControlKind::Select,
            Self::Categories | Self::Days => ControlKind::Checklist,
            Self::Merchants | Self::Regions => ControlKind::Entry,
            Self::Create => ControlKind::Button,
        }
    }

    /// Text fields holding a money amount
    pub fn is_amount(&self) -> bool {
        matches!(self, Self::LimitAmount | Self::TransactionLimit)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Assignee => "Assignee",
            Self::UseTemplate => "Use template",
            Self::CardType => "Card type",
            Self::ValidPeriod => "Valid for",
            Self::LimitPeriod => "Limit period",
            Self::LimitAmount => "Spending limit",
            Self::LimitCount => "Max transactions",
            Self::TransactionLimit => "Per transaction",
            Self::CategoriesMode => "Categories",
            Self::Categories => "",
            Self::MerchantsMode => "Merchants",
            Self::Merchants => "Add merchant",
            Self::TimeMode => "Time",
            Self::Days => "",
            Self::TimeStart => "From (HH:MM)",
            Self::TimeEnd => "Until (HH:MM)",
            Self::RegionsMode => "Regions",
            Self::Regions => "Add region",
            Self::Atm => "ATM withdrawals",
            Self::CardName => "Card name",
            Self::Color => "Color",
            Self::Team => "Team",
            Self::Project => "Project",
            Self::Create => "Create Card",
        }
    }

    /// Fixed options of a checklist control
    fn checklist(&self) -> Option<(ListField, &'static [&'static str])> {
        match self {
            Self::Categories => Some((ListField::Categories, &SPENDING_CATEGORIES[..])),
            Self::Days => Some((ListField::AllowedDays, &DAYS[..])),
            _ => None,
        }
    }

    /// Select options backed by a choice catalogue
    fn choices(&self) -> Option<&'static [Choice]> {
        match self {
            Self::ValidPeriod => Some(VALID_PERIODS),
            Self::LimitPeriod => Some(LIMIT_PERIODS),
            Self::Team => Some(TEAMS),
            Self::Project => Some(PROJECTS),
            _ => None,
        }
    }
}

/// Step through card types like a select list: none, then each type, then none
fn cycle_card_type(current: Option<CardTypeId>, forward: bool) -> Option<CardTypeId> {
    let all = CardTypeId::ALL;
    match (current.and_then(|c| all.iter().position(|t| *t == c)), forward) {
        (None, true) => all.first().copied(),
        (None, false) => all.last().copied(),
        (Some(i), true) => all.get(i + 1).copied(),
        (Some(i), false) => i.checked_sub(1).and_then(|j| all.get(j).copied()),
    }
}

fn cycle_color(current: CardColor, forward: bool) -> CardColor {
    let all = CardColor::SELECTABLE;
    let pos = all.iter().position(|c| *c == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % all.len()
    } else {
        (pos + all.len() - 1) % all.len()
    };
    all[next]
}

/// State of the wizard dialog: the wizard plus focus and entry buffers
#[derive(Debug, Clone, Default)]
pub struct WizardDialogState {
    pub wizard: CardWizard,
    /// Focused control within the current step
    pub focus: usize,
    /// Cursor within a focused checklist
    pub check_cursor: usize,
    /// Pending merchant or region entry
    pub entry: TextInput,
    /// Feedback from the last list edit
    pub notice: Option<String>,
}

impl WizardDialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controls(&self) -> &'static [Control] {
        Control::for_step(self.wizard.step())
    }

    pub fn focused(&self) -> Control {
        let controls = self.controls();
        controls[self.focus.min(controls.len() - 1)]
    }

    fn reset_focus_state(&mut self) {
        self.check_cursor = 0;
        self.entry.clear();
        self.notice = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.controls().len();
        self.reset_focus_state();
    }

    pub fn focus_prev(&mut self) {
        let len = self.controls().len();
        self.focus = (self.focus + len - 1) % len;
        self.reset_focus_state();
    }

    pub fn advance(&mut self) {
        self.wizard.advance();
        self.focus = 0;
        self.reset_focus_state();
    }

    pub fn retreat(&mut self) {
        self.wizard.retreat();
        self.focus = 0;
        self.reset_focus_state();
    }

    fn form(&self) -> &WizardFormState {
        self.wizard.form()
    }

    /// Current text of a text control
    pub fn text_value(&self, control: Control) -> &str {
        let form = self.form();
        match control {
            Control::Assignee => &form.assignee,
            Control::LimitAmount => &form.limit_amount,
            Control::LimitCount => &form.limit_count,
            Control::TransactionLimit => &form.transaction_limit,
            Control::TimeStart => &form.allowed_times.start,
            Control::TimeEnd => &form.allowed_times.end,
            Control::CardName => &form.card_name,
            _ => "",
        }
    }

    fn text_update(&self, control: Control, value: String) -> Option<FieldUpdate> {
        let window = &self.form().allowed_times;
        let update = match control {
            Control::Assignee => FieldUpdate::Assignee(value),
            Control::LimitAmount => FieldUpdate::LimitAmount(value),
            Control::LimitCount => FieldUpdate::LimitCount(value),
            Control::TransactionLimit => FieldUpdate::TransactionLimit(value),
            Control::TimeStart => FieldUpdate::AllowedTimes(TimeWindow {
                start: value,
                end: window.end.clone(),
            }),
            Control::TimeEnd => FieldUpdate::AllowedTimes(TimeWindow {
                start: window.start.clone(),
                end: value,
            }),
            Control::CardName => FieldUpdate::CardName(value),
            _ => return None,
        };
        Some(update)
    }

    /// Type a character into the focused control
    pub fn insert(&mut self, c: char) {
        let control = self.focused();
        match control.kind() {
            ControlKind::Text => {
                let mut value = self.text_value(control).to_string();
                value.push(c);
                if let Some(update) = self.text_update(control, value) {
                    self.wizard.set_field(update);
                }
            }
            ControlKind::Entry => {
                self.notice = None;
                self.entry.insert(c);
            }
            _ => {}
        }
    }

    /// Delete backwards in the focused control. On an empty entry field this
    /// removes the last listed value.
    pub fn backspace(&mut self) {
        let control = self.focused();
        match control.kind() {
            ControlKind::Text => {
                let mut value = self.text_value(control).to_string();
                value.pop();
                if let Some(update) = self.text_update(control, value) {
                    self.wizard.set_field(update);
                }
            }
            ControlKind::Entry if self.entry.value().is_empty() => {
                let last = self.entry_list(control).last().cloned();
                if let Some(last) = last {
                    match control {
                        Control::Merchants => self.wizard.remove_merchant(&last),
                        _ => self.wizard.remove_region(&last),
                    }
                    self.notice = Some(format!("Removed {}", last));
                }
            }
            ControlKind::Entry => self.entry.backspace(),
            _ => {}
        }
    }

    fn entry_list(&self, control: Control) -> &[String] {
        match control {
            Control::Merchants => &self.form().merchants,
            Control::Regions => &self.form().regions,
            _ => &[],
        }
    }

    /// Left/Right: step a select or move the checklist cursor
    pub fn cycle(&mut self, forward: bool) {
        let control = self.focused();
        match control.kind() {
            ControlKind::Select => self.step_select(control, forward),
            ControlKind::Checklist => {
                if let Some((_, options)) = control.checklist() {
                    let len = options.len();
                    self.check_cursor = if forward {
                        (self.check_cursor + 1) % len
                    } else {
                        (self.check_cursor + len - 1) % len
                    };
                }
            }
            ControlKind::Toggle => self.activate(),
            _ => {}
        }
    }

    fn step_select(&mut self, control: Control, forward: bool) {
        let form = self.form();
        let update = match control {
            Control::CardType => {
                FieldUpdate::CardType(cycle_card_type(form.card_type, forward))
            }
            Control::Color => FieldUpdate::CardColor(cycle_color(form.card_color, forward)),
            Control::ValidPeriod => FieldUpdate::ValidPeriod(cycle_choice(
                VALID_PERIODS,
                &form.valid_period,
                forward,
            )),
            Control::LimitPeriod => FieldUpdate::LimitPeriod(cycle_choice(
                LIMIT_PERIODS,
                &form.limit_period,
                forward,
            )),
            Control::Team => FieldUpdate::Team(cycle_choice(TEAMS, &form.team, forward)),
            Control::Project => {
                FieldUpdate::Project(cycle_choice(PROJECTS, &form.project, forward))
            }
            _ => return,
        };
        self.wizard.set_field(update);
    }

    /// Space: flip a toggle or the checklist entry under the cursor
    pub fn activate(&mut self) {
        let control = self.focused();
        let form = self.form();
        let update = match control {
            Control::UseTemplate => FieldUpdate::UseTemplate(!form.use_template),
            Control::Atm => FieldUpdate::AtmWithdrawal(!form.atm_withdrawal),
            Control::CategoriesMode => FieldUpdate::CategoriesMode(form.categories_mode.toggled()),
            Control::MerchantsMode => FieldUpdate::MerchantsMode(form.merchants_mode.toggled()),
            Control::TimeMode => FieldUpdate::TimeMode(form.time_mode.toggled()),
            Control::RegionsMode => FieldUpdate::RegionsMode(form.regions_mode.toggled()),
            Control::Categories | Control::Days => {
                if let Some((field, options)) = control.checklist() {
                    if let Some(item) = options.get(self.check_cursor) {
                        self.wizard.toggle_in_array(field, item);
                    }
                }
                return;
            }
            _ => return,
        };
        self.wizard.set_field(update);
    }

    /// Enter on an entry field: add the typed value to its list
    pub fn submit_entry(&mut self) -> Option<ListEdit> {
        let control = self.focused();
        let value = self.entry.value().to_string();
        let outcome = match control {
            Control::Merchants => self.wizard.add_merchant(&value),
            Control::Regions => self.wizard.add_region(&value),
            _ => return None,
        };
        self.notice = match outcome {
            ListEdit::Added => {
                self.entry.clear();
                None
            }
            ListEdit::Blank => Some("Type a name first".to_string()),
            ListEdit::Duplicate => Some(format!("{} is already listed", value.trim())),
        };
        Some(outcome)
    }
}

/// Render the wizard dialog
pub fn render(frame: &mut Frame, app: &App) {
    let Some(state) = app.wizard.as_ref() else {
        return;
    };
    let theme = &app.theme;
    let area = centered_rect(80, 90, frame.area());

    frame.render_widget(Clear, area);

    let step = state.wizard.step();
    let block = Block::default()
        .title(" New Card ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_style(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Step title
            Constraint::Length(1), // Step description
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Spacer
            Constraint::Min(3),    // Controls
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(step.to_string(), theme.title())),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(step.description(), Style::default().fg(theme.muted))),
        chunks[1],
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(theme.highlight).bg(theme.selection_bg))
            .ratio(step.progress())
            .label(format!("{}/{}", step.number(), Step::COUNT)),
        chunks[2],
    );

    let (lines, focus_line) = if step.is_last() {
        summary_lines(state, theme, app.format.currency_symbol())
    } else {
        control_lines(state, theme, app.format.currency_symbol())
    };
    let visible = chunks[4].height as usize;
    let scroll = (focus_line + 2).saturating_sub(visible) as u16;
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).scroll((scroll, 0)),
        chunks[4],
    );

    if let Some(notice) = &state.notice {
        frame.render_widget(
            Paragraph::new(Span::styled(notice.as_str(), Style::default().fg(theme.warning))),
            chunks[5],
        );
    }

    let mut hints = vec![
        hint("Tab", "Next field", theme),
        hint("PgDn", "Next step", theme),
        hint("PgUp", "Back", theme),
    ];
    if step.is_last() {
        hints.push(hint("Enter", "Create Card", theme));
    }
    hints.push(hint("Esc", "Cancel", theme));
    frame.render_widget(Paragraph::new(Line::from(hints.concat())), chunks[6]);
}

fn hint(key: &'static str, action: &'static str, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("[{}]", key), Style::default().fg(theme.accent)),
        Span::raw(format!(" {}  ", action)),
    ]
}

fn label_span(control: Control, focused: bool, theme: &Theme) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent)
    };
    let marker = if focused { "▶ " } else { "  " };
    Span::styled(format!("{}{:<20}", marker, control.label()), style)
}

fn select_value(state: &WizardDialogState, control: Control) -> String {
    let form = state.wizard.form();
    match control {
        Control::CardType => form
            .card_type
            .map(|t| format!("{} ({})", t.name(), t.description()))
            .unwrap_or_else(|| "Select a card type".to_string()),
        Control::Color => form.card_color.name().to_string(),
        _ => {
            let id = match control {
                Control::ValidPeriod => &form.valid_period,
                Control::LimitPeriod => &form.limit_period,
                Control::Team => &form.team,
                Control::Project => &form.project,
                _ => return String::new(),
            };
            control
                .choices()
                .and_then(|choices| label_for(choices, id))
                .unwrap_or("Select…")
                .to_string()
        }
    }
}

fn mode_value(mode: ListMode) -> String {
    mode.to_string()
}

fn toggle_value(state: &WizardDialogState, control: Control) -> String {
    let form = state.wizard.form();
    match control {
        Control::UseTemplate => checkbox(form.use_template, "Start from a template"),
        Control::Atm => checkbox(form.atm_withdrawal, "Allow cash withdrawals"),
        Control::CategoriesMode => mode_value(form.categories_mode),
        Control::MerchantsMode => mode_value(form.merchants_mode),
        Control::TimeMode => mode_value(form.time_mode),
        Control::RegionsMode => mode_value(form.regions_mode),
        _ => String::new(),
    }
}

fn checkbox(on: bool, text: &str) -> String {
    format!("[{}] {}", if on { "x" } else { " " }, text)
}

/// Lines of the current step's controls, and the line of the focused one
fn control_lines(
    state: &WizardDialogState,
    theme: &Theme,
    currency_symbol: &str,
) -> (Vec<Line<'static>>, usize) {
    let form = state.wizard.form();
    let focused = state.focused();
    let mut lines = Vec::new();
    let mut focus_line = 0;

    for &control in state.controls() {
        let is_focused = control == focused;
        if is_focused {
            focus_line = lines.len();
        }
        let value_style = Style::default().fg(theme.text);

        match control.kind() {
            ControlKind::Text => {
                let value = state.text_value(control);
                let mut spans = vec![label_span(control, is_focused, theme)];
                if value.is_empty() && !is_focused {
                    spans.push(Span::styled("—", Style::default().fg(theme.muted)));
                } else {
                    if control.is_amount() {
                        spans.push(Span::styled(
                            currency_symbol.to_string(),
                            Style::default().fg(theme.muted),
                        ));
                    }
                    spans.push(Span::styled(value.to_string(), value_style));
                }
                if is_focused {
                    spans.push(Span::styled(" ", Style::default().bg(theme.accent)));
                }
                lines.push(Line::from(spans));
            }
            ControlKind::Toggle => {
                lines.push(Line::from(vec![
                    label_span(control, is_focused, theme),
                    Span::styled(toggle_value(state, control), value_style),
                ]));
            }
            ControlKind::Select => {
                lines.push(Line::from(vec![
                    label_span(control, is_focused, theme),
                    Span::styled("◀ ", Style::default().fg(theme.muted)),
                    Span::styled(select_value(state, control), value_style),
                    Span::styled(" ▶", Style::default().fg(theme.muted)),
                ]));
            }
            ControlKind::Checklist => {
                if let Some((field, options)) = control.checklist() {
                    let selected = form.list(field);
                    let mut spans = vec![Span::raw("    ")];
                    for (i, option) in options.iter().enumerate() {
                        let on = selected.iter().any(|s| s == option);
                        let mut style = if on {
                            Style::default().fg(theme.highlight)
                        } else {
                            Style::default().fg(theme.text)
                        };
                        if is_focused && i == state.check_cursor {
                            style = style.add_modifier(Modifier::REVERSED);
                        }
                        spans.push(Span::styled(
                            format!("[{}] {}", if on { "x" } else { " " }, option),
                            style,
                        ));
                        spans.push(Span::raw("  "));
                    }
                    lines.push(Line::from(spans));
                }
            }
            ControlKind::Entry => {
                let listed = state.entry_list(control);
                let input = TextInput::new()
                    .content(if is_focused { state.entry.value() } else { "" })
                    .placeholder("type and press Enter");
                let mut spans = vec![label_span(control, is_focused, theme)];
                if is_focused {
                    spans.push(Span::styled(input.value().to_string(), value_style));
                    spans.push(Span::styled(" ", Style::default().bg(theme.accent)));
                } else {
                    spans.push(Span::styled(
                        input.placeholder.clone(),
                        Style::default().fg(theme.muted),
                    ));
                }
                lines.push(Line::from(spans));
                let chips = if listed.is_empty() {
                    "none".to_string()
                } else {
                    listed.join(" · ")
                };
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(chips, Style::default().fg(theme.highlight)),
                ]));
            }
            ControlKind::Button => {}
        }
    }

    (lines, focus_line)
}

/// Summary sections followed by advisory warnings
fn summary_lines(
    state: &WizardDialogState,
    theme: &Theme,
    currency_symbol: &str,
) -> (Vec<Line<'static>>, usize) {
    let mut lines = Vec::new();
    for section in state.wizard.summary(currency_symbol).sections {
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        )));
        for (label, value) in section.rows {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<20}", label), Style::default().fg(theme.accent)),
                Span::styled(value, Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::from(""));
    }

    let issues = state.wizard.validate();
    if !issues.is_empty() {
        lines.push(Line::from(Span::styled(
            "Warnings",
            Style::default()
                .fg(theme.warning)
                .add_modifier(Modifier::BOLD),
        )));
        for issue in issues {
            lines.push(Line::from(Span::styled(
                format!("  ! {}", issue),
                Style::default().fg(theme.warning),
            )));
        }
    }

    (lines, 0)
}

/// Handle a key while the wizard is open. Returns true if consumed.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) -> bool {
    let Some(state) = app.wizard.as_mut() else {
        return false;
    };

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            app.set_status("Card creation cancelled");
        }
        KeyCode::Tab | KeyCode::Down => state.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.focus_prev(),
        KeyCode::PageDown => state.advance(),
        KeyCode::PageUp => state.retreat(),
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => state.advance(),
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => state.retreat(),
        KeyCode::Left | KeyCode::Right | KeyCode::Home | KeyCode::End | KeyCode::Delete
            if state.focused().kind() == ControlKind::Entry =>
        {
            match key.code {
                KeyCode::Left => state.entry.move_left(),
                KeyCode::Right => state.entry.move_right(),
                KeyCode::Home => state.entry.move_start(),
                KeyCode::End => state.entry.move_end(),
                _ => state.entry.delete(),
            }
        }
        KeyCode::Left => state.cycle(false),
        KeyCode::Right => state.cycle(true),
        KeyCode::Enter => match state.focused().kind() {
            ControlKind::Button => app.create_card_request(now),
            ControlKind::Entry => {
                state.submit_entry();
            }
            _ => state.advance(),
        },
        KeyCode::Char(' ')
            if !matches!(state.focused().kind(), ControlKind::Text | ControlKind::Entry) =>
        {
            state.activate();
        }
        KeyCode::Backspace => state.backspace(),
        KeyCode::Char(c) => state.insert(c),
        _ => return false,
    }
    true
}
