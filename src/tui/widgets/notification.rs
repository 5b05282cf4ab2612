//! Toast notification widget
//!
//! Short-lived messages such as "card request submitted". Expiry is checked
//! against the tick time passed in by the app.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::config::Theme;

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationType {
    /// Colour of this notification type in `theme`
    pub fn color(&self, theme: &Theme) -> Color {
        match self {
            Self::Info => theme.info,
            Self::Success => theme.success,
            Self::Warning => theme.warning,
            Self::Error => theme.danger,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(
        message: impl Into<String>,
        notification_type: NotificationType,
        created_at: Instant,
    ) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at,
            duration: Duration::from_secs(3),
        }
    }

    pub fn info(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationType::Info, now)
    }

    pub fn success(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationType::Success, now)
    }

    pub fn warning(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationType::Warning, now)
    }

    pub fn error(message: impl Into<String>, now: Instant) -> Self {
        Self::new(message, NotificationType::Error, now).with_duration(Duration::from_secs(5))
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
    theme: &'a Theme,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification, theme: &'a Theme) -> Self {
        Self {
            notification,
            theme,
        }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.notification_type;
        let color = kind.color(self.theme);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", kind.icon(), kind.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(self.theme.text))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// A queue of notifications, shown one at a time
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Drop the front notification once it has expired, so the next one
    /// gets its full display time
    pub fn remove_expired(&mut self, now: Instant) {
        if self.notifications.first().is_some_and(|n| n.is_expired(now)) {
            self.notifications.remove(0);
            if let Some(next) = self.notifications.first_mut() {
                next.created_at = now;
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeName;

    #[test]
    fn test_notification_creation() {
        let n = Notification::info("Test message", Instant::now());
        assert_eq!(n.message, "Test message");
        assert_eq!(n.notification_type, NotificationType::Info);
    }

    #[test]
    fn test_notification_colors_follow_theme() {
        let theme = Theme::from_name(ThemeName::HighContrast);
        assert_eq!(NotificationType::Success.color(&theme), Color::Green);
        assert_eq!(NotificationType::Error.color(&theme), Color::Red);
    }

    #[test]
    fn test_queue_expires_front_only() {
        let start = Instant::now();
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::info("First", start));
        queue.push(Notification::success("Second", start));
        assert_eq!(queue.len(), 2);

        queue.remove_expired(start + Duration::from_secs(1));
        assert_eq!(queue.current().map(|n| n.message.as_str()), Some("First"));

        let later = start + Duration::from_secs(3);
        queue.remove_expired(later);
        assert_eq!(queue.current().map(|n| n.message.as_str()), Some("Second"));

        queue.remove_expired(later + Duration::from_secs(1));
        assert_eq!(queue.len(), 1);
        queue.remove_expired(later + Duration::from_secs(3));
        assert!(queue.is_empty());
    }
}
