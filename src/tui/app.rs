//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Timed behaviour (login sequence, drawers, toasts) advances in [`App::tick`]
//! with the time passed in by the event loop.

use std::fmt;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::audit::{RequestEntry, RequestLogger};
use crate::config::{DisplayFormat, Settings, Theme};
use crate::drawer::Drawer;
use crate::listing::{CardList, TransactionList};
use crate::login::LoginScreen;
use crate::models::{Card, DashboardData, Transaction};
use crate::sample;

use super::dialogs::wizard::WizardDialogState;
use super::widgets::{Notification, NotificationQueue};

/// Page selected in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePage {
    #[default]
    Dashboard,
    Accounts,
    Cards,
    Transactions,
    Payments,
    Analytics,
    Settings,
}

impl ActivePage {
    /// Sidebar order
    pub const ALL: [ActivePage; 7] = [
        ActivePage::Dashboard,
        ActivePage::Accounts,
        ActivePage::Cards,
        ActivePage::Transactions,
        ActivePage::Payments,
        ActivePage::Analytics,
        ActivePage::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Accounts => "Accounts",
            Self::Cards => "Cards",
            Self::Transactions => "Transactions",
            Self::Payments => "Payments",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }

    /// Number key that jumps to this page
    pub fn shortcut(&self) -> char {
        match self {
            Self::Dashboard => '1',
            Self::Accounts => '2',
            Self::Cards => '3',
            Self::Transactions => '4',
            Self::Payments => '5',
            Self::Analytics => '6',
            Self::Settings => '7',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.shortcut() == c)
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    /// Pages without a real view yet
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Payments | Self::Analytics | Self::Settings)
    }
}

impl fmt::Display for ActivePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    Sidebar,
    Main,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the search bar of the current list page
    Search,
    /// Typing into a dialog form
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Wizard,
    Help,
}

/// Item shown in the card drawer
#[derive(Debug, Clone, PartialEq)]
pub struct CardDrawerState {
    pub card: Card,
    /// Spending breakdown expanded
    pub show_details: bool,
}

/// Main application state
pub struct App {
    pub settings: Settings,
    pub theme: Theme,
    /// Currency symbol and date format from the settings
    pub format: DisplayFormat,
    pub request_log: RequestLogger,

    pub should_quit: bool,
    pub active_page: ActivePage,
    pub focused_panel: FocusedPanel,
    pub input_mode: InputMode,
    pub active_dialog: ActiveDialog,

    /// Highlighted page in the sidebar
    pub sidebar_index: usize,

    /// Login screen, until the sequence is done
    pub login: Option<LoginScreen>,

    pub dashboard: DashboardData,
    pub cards: CardList,
    pub transactions: TransactionList,

    pub card_drawer: Drawer<CardDrawerState>,
    pub transaction_drawer: Drawer<Transaction>,

    /// Card wizard, while the dialog is open
    pub wizard: Option<WizardDialogState>,

    pub status_message: Option<String>,
    pub notifications: NotificationQueue,

    /// Reference date for derived figures such as limit resets
    pub today: NaiveDate,
    /// Terminal area of the last frame, for mouse hit tests
    pub viewport: Rect,
}

impl App {
    pub fn new(settings: Settings, theme: Theme, request_log: RequestLogger, now: Instant) -> Self {
        let login = LoginScreen::new(settings.animation, now, settings.skip_intro);
        let card_drawer = Drawer::new(&settings.animation);
        let transaction_drawer = Drawer::new(&settings.animation);
        let format = DisplayFormat::from_settings(&settings);

        Self {
            settings,
            theme,
            format,
            request_log,
            should_quit: false,
            active_page: ActivePage::default(),
            focused_panel: FocusedPanel::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            sidebar_index: 0,
            login: Some(login),
            dashboard: sample::dashboard(),
            cards: CardList::new(sample::cards()),
            transactions: TransactionList::new(sample::transactions()),
            card_drawer,
            transaction_drawer,
            wizard: None,
            status_message: None,
            notifications: NotificationQueue::new(),
            today: Local::now().date_naive(),
            viewport: Rect::default(),
        }
    }

    /// Advance every timed sequence to `now`
    pub fn tick(&mut self, now: Instant) {
        if let Some(login) = self.login.as_mut() {
            login.tick(now);
            if login.is_done() {
                self.login = None;
                self.switch_page(ActivePage::Dashboard);
            }
        }
        self.card_drawer.tick(now);
        self.transaction_drawer.tick(now);
        self.notifications.remove_expired(now);
    }

    /// Whether the login screen still covers the app
    pub fn in_login(&self) -> bool {
        self.login.is_some()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Show a page. Open drawers belong to the page they were opened on.
    pub fn switch_page(&mut self, page: ActivePage) {
        if self.active_page != page {
            info!(page = %page, "navigated");
        }
        self.active_page = page;
        self.sidebar_index = page.index();
        self.input_mode = InputMode::Normal;
        self.card_drawer = Drawer::new(&self.settings.animation);
        self.transaction_drawer = Drawer::new(&self.settings.animation);
    }

    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::Wizard {
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn close_dialog(&mut self) {
        if self.active_dialog == ActiveDialog::Wizard {
            self.wizard = None;
        }
        self.active_dialog = ActiveDialog::None;
        self.input_mode = InputMode::Normal;
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Open the card wizard on step 1 with an empty form.
    /// The dashboard and the cards page both come here.
    pub fn open_new_card(&mut self) {
        info!(page = %self.active_page, "card wizard opened");
        self.wizard = Some(WizardDialogState::new());
        self.open_dialog(ActiveDialog::Wizard);
    }

    /// Submit the wizard: record the request and close the dialog.
    /// The card list is left as it is.
    pub fn create_card_request(&mut self, now: Instant) {
        let Some(state) = self.wizard.take() else {
            return;
        };
        let request = state.wizard.submit();
        let entry = RequestEntry::submitted(&request);

        match self.request_log.log(&entry) {
            Ok(()) => {
                info!(
                    request_id = %request.id,
                    card = request.display_name(),
                    warnings = request.warnings.len(),
                    "card request created"
                );
                let message = format!("Card request for {} submitted", request.display_name());
                self.set_status(message.clone());
                self.notifications.push(Notification::success(message, now));
            }
            Err(e) => {
                warn!(error = %e, "failed to record card request");
                self.set_status(format!("Could not record card request: {}", e));
                self.notifications
                    .push(Notification::error(format!("Card request not recorded: {}", e), now));
            }
        }

        self.close_dialog();
    }

    /// Open the drawer for the selected card
    pub fn open_selected_card(&mut self, now: Instant) {
        if let Some(card) = self.cards.selected().cloned() {
            debug!(card = %card.id, "card drawer");
            self.card_drawer.open(
                CardDrawerState {
                    card,
                    show_details: false,
                },
                now,
            );
        }
    }

    /// Open the drawer for the selected transaction
    pub fn open_selected_transaction(&mut self, now: Instant) {
        if let Some(txn) = self.transactions.selected().cloned() {
            debug!(transaction = %txn.id, "transaction drawer");
            self.transaction_drawer.open(txn, now);
        }
    }

    /// Whether a drawer is mounted over the current page
    pub fn has_drawer(&self) -> bool {
        self.card_drawer.is_visible() || self.transaction_drawer.is_visible()
    }

    /// Close whichever drawer is mounted
    pub fn close_drawer(&mut self, now: Instant) {
        self.card_drawer.close(now);
        self.transaction_drawer.close(now);
    }

    /// Toggle the spending breakdown of the card drawer
    pub fn toggle_card_details(&mut self) {
        if let Some(state) = self.card_drawer.item_mut() {
            state.show_details = !state.show_details;
        }
    }

    /// Whether the current page has a searchable list
    pub fn page_has_search(&self) -> bool {
        matches!(
            self.active_page,
            ActivePage::Cards | ActivePage::Transactions
        )
    }

    pub fn start_search(&mut self) {
        if self.page_has_search() {
            self.input_mode = InputMode::Search;
            self.focused_panel = FocusedPanel::Main;
        }
    }

    pub fn stop_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Type into the search bar of the current page
    pub fn search_push(&mut self, c: char) {
        match self.active_page {
            ActivePage::Cards => self.cards.push_query_char(c),
            ActivePage::Transactions => self.transactions.push_query_char(c),
            _ => return,
        }
        self.log_query();
    }

    pub fn search_pop(&mut self) {
        match self.active_page {
            ActivePage::Cards => self.cards.pop_query_char(),
            ActivePage::Transactions => self.transactions.pop_query_char(),
            _ => return,
        }
        self.log_query();
    }

    /// Empty the search bar of the current page
    pub fn search_clear(&mut self) {
        match self.active_page {
            ActivePage::Cards => self.cards.set_query(""),
            ActivePage::Transactions => self.transactions.set_query(""),
            _ => return,
        }
        self.log_query();
    }

    fn log_query(&self) {
        match self.active_page {
            ActivePage::Cards => debug!(
                query = self.cards.query(),
                visible = self.cards.visible_len(),
                "card search"
            ),
            ActivePage::Transactions => debug!(
                query = self.transactions.query(),
                visible = self.transactions.visible_len(),
                "transaction search"
            ),
            _ => {}
        }
    }

    /// Step the transaction filter tabs
    pub fn cycle_transaction_filter(&mut self, forward: bool) {
        let current = *self.transactions.filter();
        let next = if forward { current.next() } else { current.prev() };
        self.transactions.set_filter(next);
        debug!(filter = %next, visible = self.transactions.visible_len(), "transaction filter");
    }

    /// Move selection up in the focused panel
    pub fn move_up(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                self.sidebar_index = self.sidebar_index.saturating_sub(1);
            }
            FocusedPanel::Main => match self.active_page {
                ActivePage::Cards => self.cards.select_prev(),
                ActivePage::Transactions => self.transactions.select_prev(),
                _ => {}
            },
        }
    }

    /// Move selection down in the focused panel
    pub fn move_down(&mut self) {
        match self.focused_panel {
            FocusedPanel::Sidebar => {
                if self.sidebar_index + 1 < ActivePage::ALL.len() {
                    self.sidebar_index += 1;
                }
            }
            FocusedPanel::Main => match self.active_page {
                ActivePage::Cards => self.cards.select_next(),
                ActivePage::Transactions => self.transactions.select_next(),
                _ => {}
            },
        }
    }
}
