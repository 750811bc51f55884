//! src/view/components/notification_overlay.rs
use crate::model::app_state::{Notification, NotificationLevel};
use crate::view::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::trace;

pub struct NotificationOverlay;

impl NotificationOverlay {
    /// Toast anchored to the bottom-right corner of `screen`.
    pub fn render(frame: &mut Frame<'_>, notification: &Notification, screen: Rect) {
        let area = toast_area(screen, notification.message.chars().count());
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (border_style, icon) = match notification.level {
            NotificationLevel::Info => (Style::default().fg(theme::CYAN), "ℹ"),
            NotificationLevel::Success => (Style::default().fg(theme::GREEN), "✓"),
            NotificationLevel::Error => (Style::default().fg(theme::RED), "✕"),
        };

        trace!(
            target: "fileshelf_core::view::components::notification_overlay",
            level = ?notification.level,
            message_len = notification.message.len(),
            "Rendering toast"
        );

        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {icon} "))
            .title_style(border_style.bold())
            .border_style(border_style)
            .style(Style::default().bg(theme::BACKGROUND));

        let message = Paragraph::new(notification.message.as_str())
            .block(block)
            .style(Style::default().fg(theme::FOREGROUND))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(message, area);
    }
}

/// Box sized to the message, clamped to the screen, two rows above the bottom.
#[must_use]
pub fn toast_area(screen: Rect, message_chars: usize) -> Rect {
    let wanted = u16::try_from(message_chars).unwrap_or(u16::MAX).saturating_add(4);
    let width = wanted.clamp(16, 48).min(screen.width);
    let height = 3.min(screen.height);

    Rect {
        x: screen.x + screen.width - width,
        y: (screen.y + screen.height).saturating_sub(height + 2).max(screen.y),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_fits_inside_screen() {
        let screen = Rect::new(0, 0, 80, 24);
        let area = toast_area(screen, "URL copied!".len());
        assert_eq!(area.width, 16);
        assert_eq!(area.height, 3);
        assert_eq!(area.x + area.width, 80);
        assert_eq!(area.y, 19);

        let tiny = Rect::new(0, 0, 10, 2);
        let area = toast_area(tiny, 100);
        assert_eq!(area.width, 10);
        assert_eq!(area.height, 2);
        assert_eq!(area.y, 0);
    }
}
