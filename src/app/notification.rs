//! Mock system notification
//!
//! A banner that slides over whatever screen is showing. It hides itself
//! after a few seconds; clicking it both hides it and jumps to the trust
//! center.

use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tracing::info;

use crate::app::state::Screen;
use crate::app::timer::{TimerEvent, TimerId, TimerScope};
use crate::{delays, LENDER_NAME};

#[derive(Debug)]
pub struct NotificationOverlay {
    visible: bool,
    accessed_at: Option<DateTime<Local>>,
    timers: TimerScope,
    hide_timer: Option<TimerId>,
}

impl NotificationOverlay {
    pub fn new(timers: TimerScope) -> Self {
        Self {
            visible: false,
            accessed_at: None,
            timers,
            hide_timer: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the banner and (re)start its auto-hide countdown
    pub fn show(&mut self) {
        self.visible = true;
        self.accessed_at = Some(Local::now());
        if let Some(previous) = self.hide_timer.take() {
            self.timers.cancel(previous);
        }
        self.hide_timer = Some(
            self.timers
                .after(delays::NOTIFICATION_AUTO_HIDE, TimerEvent::NotificationExpired),
        );
        info!("Notification shown");
    }

    /// Click on the banner: hide it and return the screen to open
    pub fn dismiss(&mut self) -> Screen {
        self.hide();
        info!("Notification clicked");
        Screen::TrustCenter
    }

    fn hide(&mut self) {
        self.visible = false;
        if let Some(timer) = self.hide_timer.take() {
            self.timers.cancel(timer);
        }
    }

    /// Accept a fired timer if it belongs to the overlay
    pub fn claim(&mut self, id: TimerId) -> bool {
        self.timers.claim(id)
    }

    pub fn on_timer(&mut self, event: TimerEvent) {
        if event == TimerEvent::NotificationExpired {
            self.visible = false;
            self.hide_timer = None;
            info!("Notification auto-hidden");
        }
    }

    /// Banner text
    pub fn message(&self) -> String {
        let time = self
            .accessed_at
            .map(|at| at.format("%-I:%M %p").to_string())
            .unwrap_or_else(|| "just now".to_string());
        format!(
            "{} accessed your bank data today at {} to verify your loan.",
            LENDER_NAME, time
        )
    }

    /// Area the banner occupies inside `area`
    pub fn banner_area(area: Rect) -> Rect {
        let inset = 1u16.min(area.width / 2);
        Rect {
            x: area.x + inset,
            y: area.y + 1u16.min(area.height),
            width: area.width.saturating_sub(inset * 2),
            height: 5u16.min(area.height.saturating_sub(1)),
        }
    }

    /// Draw the banner on top of `area`. Returns where it was drawn.
    pub fn render(&self, f: &mut Frame, area: Rect) -> Option<Rect> {
        if !self.visible {
            return None;
        }

        let banner = Self::banner_area(area);
        let text = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} • Now", LENDER_NAME),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(self.message()),
            Line::from(Span::styled(
                "View details.",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
        ];

        let widget = Paragraph::new(text).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .style(Style::default().bg(Color::DarkGray)),
        );

        f.render_widget(Clear, banner);
        f.render_widget(widget, banner);
        Some(banner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::timer::Scheduler;
    use std::time::Duration;
    use tokio::time;

    #[tokio::test(start_paused = true)]
    async fn test_show_then_auto_hide() {
        let (scheduler, mut rx) = Scheduler::new();
        let mut overlay = NotificationOverlay::new(scheduler.scope());
        overlay.show();
        assert!(overlay.is_visible());
        assert!(overlay.message().contains("accessed your bank data"));

        time::sleep(Duration::from_millis(5001)).await;
        let fired = rx.try_recv().expect("auto-hide fired");
        assert!(overlay.claim(fired.id));
        overlay.on_timer(fired.event);
        assert!(!overlay.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reshow_replaces_pending_hide() {
        let (scheduler, mut rx) = Scheduler::new();
        let mut overlay = NotificationOverlay::new(scheduler.scope());
        overlay.show();
        time::sleep(Duration::from_millis(3000)).await;
        overlay.show();

        // The first countdown would have ended here
        time::sleep(Duration::from_millis(2500)).await;
        assert!(rx.try_recv().is_err());

        time::sleep(Duration::from_millis(2501)).await;
        let fired = rx.try_recv().expect("second auto-hide fired");
        assert!(overlay.claim(fired.id));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_hides_and_targets_trust_center() {
        let (scheduler, mut rx) = Scheduler::new();
        let mut overlay = NotificationOverlay::new(scheduler.scope());
        overlay.show();
        assert_eq!(overlay.dismiss(), Screen::TrustCenter);
        assert!(!overlay.is_visible());

        // The pending auto-hide was cancelled with it
        time::sleep(Duration::from_secs(6)).await;
        assert!(rx.try_recv().is_err());
    }
}
