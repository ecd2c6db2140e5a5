//! Toast notification widget
//!
//! Non-blocking, self-expiring messages drawn over the bottom of the
//! screen. Used for the one-time reveal of the simulated code.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Info,
    Error,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Error => Color::Red,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Info => " i Info ",
            Self::Error => " x Error ",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Set how long the toast stays visible
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Anchor the display window at `created_at`
    pub fn shown_at(mut self, created_at: Instant) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.notification.notification_type.title())
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// Notifications waiting to be shown, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.notifications.push_back(notification);
    }

    /// Drop the visible toast once it has been on screen long enough
    ///
    /// Only the front toast ages; queued ones start their window when
    /// they become visible.
    pub fn remove_expired(&mut self, now: Instant) {
        while self
            .notifications
            .front()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.notifications.pop_front();
            if let Some(next) = self.notifications.front_mut() {
                next.created_at = now;
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::info("Test message");
        assert_eq!(n.message, "Test message");
        assert_eq!(n.notification_type, NotificationType::Info);
        assert_eq!(NotificationType::Error.color(), Color::Red);
    }

    #[test]
    fn test_expiry() {
        let t0 = Instant::now();
        let n = Notification::info("Done")
            .with_duration(Duration::from_secs(2))
            .shown_at(t0);
        assert!(!n.is_expired_at(t0 + Duration::from_secs(1)));
        assert!(n.is_expired_at(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn test_queue_shows_one_at_a_time() {
        let t0 = Instant::now();
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::info("First").with_duration(Duration::from_secs(1)).shown_at(t0));
        queue.push(Notification::info("Second").with_duration(Duration::from_secs(1)).shown_at(t0));
        assert_eq!(queue.current().unwrap().message, "First");

        // Second was queued at t0 but its window starts when First leaves
        queue.remove_expired(t0 + Duration::from_secs(1));
        assert_eq!(queue.current().unwrap().message, "Second");
        queue.remove_expired(t0 + Duration::from_millis(1500));
        assert_eq!(queue.current().unwrap().message, "Second");
        queue.remove_expired(t0 + Duration::from_secs(2));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut queue = NotificationQueue::new();
        queue.push(Notification::error("a"));
        queue.push(Notification::error("b"));
        queue.clear();
        assert!(queue.is_empty());
    }
}
