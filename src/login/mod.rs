//! Login screen sequence
//!
//! The login screen is a timed sequence with no credential check: a welcome
//! banner, a short pause, the form, then a loading phase after submit that
//! ends in [`LoginPhase::Done`].

mod secret;

pub use secret::SecretBuffer;

use std::time::Instant;

use tracing::info;

use crate::config::AnimationTimings;
use crate::timeline::Timeline;

/// Phase of the login sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPhase {
    Welcome,
    /// Welcome hidden, form not yet shown
    Interlude,
    Form,
    Loading,
    Done,
}

/// Focused login form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn toggled(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::Email,
        }
    }
}

/// Login screen state
#[derive(Debug)]
pub struct LoginScreen {
    phase: LoginPhase,
    timeline: Option<Timeline<LoginPhase>>,
    timings: AnimationTimings,
    pub email: String,
    pub password: SecretBuffer,
    pub focus: LoginField,
}

impl LoginScreen {
    /// Start the sequence at `now`. With `skip_intro` the form shows at once.
    pub fn new(timings: AnimationTimings, now: Instant, skip_intro: bool) -> Self {
        let (phase, timeline) = if skip_intro {
            (LoginPhase::Form, None)
        } else {
            let timeline = Timeline::new(now)
                .at(timings.welcome_hide(), LoginPhase::Interlude)
                .at(timings.form_show(), LoginPhase::Form);
            (LoginPhase::Welcome, Some(timeline))
        };

        Self {
            phase,
            timeline,
            timings,
            email: String::new(),
            password: SecretBuffer::new(),
            focus: LoginField::default(),
        }
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    /// Advance timed phases. Returns the phase entered, if any.
    pub fn tick(&mut self, now: Instant) -> Option<LoginPhase> {
        let timeline = self.timeline.as_mut()?;
        let entered = timeline.poll(now);
        if timeline.is_finished() {
            self.timeline = None;
        }
        if let Some(phase) = entered {
            self.phase = phase;
            if phase == LoginPhase::Done {
                info!(email = %self.email, "login completed");
            }
        }
        entered
    }

    /// Submit the form. Only meaningful while the form is shown.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.phase != LoginPhase::Form {
            return false;
        }
        self.phase = LoginPhase::Loading;
        self.timeline = Some(Timeline::new(now).at(self.timings.loading(), LoginPhase::Done));
        self.tick(now);
        true
    }

    pub fn is_done(&self) -> bool {
        self.phase == LoginPhase::Done
    }

    /// Show the welcome banner
    pub fn shows_welcome(&self) -> bool {
        self.phase == LoginPhase::Welcome
    }

    /// Show the form (also during loading, with the button busy)
    pub fn shows_form(&self) -> bool {
        matches!(self.phase, LoginPhase::Form | LoginPhase::Loading)
    }

    /// Share of the loading phase elapsed
    pub fn loading_progress(&self, now: Instant) -> f64 {
        match (self.phase, &self.timeline) {
            (LoginPhase::Loading, Some(t)) => t.progress(now),
            (LoginPhase::Done, _) => 1.0,
            _ => 0.0,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.toggled();
    }

    pub fn insert(&mut self, c: char) {
        if self.phase != LoginPhase::Form {
            return;
        }
        match self.focus {
            LoginField::Email => self.email.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    pub fn backspace(&mut self) {
        if self.phase != LoginPhase::Form {
            return;
        }
        match self.focus {
            LoginField::Email => {
                self.email.pop();
            }
            LoginField::Password => self.password.pop(),
        }
    }
}
