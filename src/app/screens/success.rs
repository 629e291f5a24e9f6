//! Consent approved screen; moves on to processing by itself

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::state::{Action, NavigationAction, Screen};
use crate::app::timer::{TimerEvent, TimerScope};
use crate::app::widgets::{button, render_help};
use crate::delays;
use crate::models::CONSENT_INFO;

#[derive(Debug)]
pub struct SuccessScreen {
    timers: TimerScope,
}

impl SuccessScreen {
    pub fn new(mut timers: TimerScope) -> Self {
        timers.after(delays::SUCCESS_REDIRECT, TimerEvent::SuccessRedirect);
        Self { timers }
    }

    pub fn handle(&mut self, action: NavigationAction) -> Option<Action> {
        match action {
            NavigationAction::Select | NavigationAction::Shortcut('m') => {
                Some(Action::Navigate(Screen::TrustCenter))
            }
            _ => None,
        }
    }

    pub fn on_timer(&mut self, event: TimerEvent) -> Option<Action> {
        (event == TimerEvent::SuccessRedirect).then_some(Action::Navigate(Screen::Processing))
    }

    pub(crate) fn timers_mut(&mut self) -> &mut TimerScope {
        &mut self.timers
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Badge
                Constraint::Min(6),    // Message
                Constraint::Length(2), // Button
                Constraint::Length(2), // Help text
            ])
            .split(area);

        let badge = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "✓ Consent Approved",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Green)));
        f.render_widget(badge, chunks[0]);

        let message = Paragraph::new(vec![
            Line::from("Your bank statements are being shared securely."),
            Line::from(""),
            Line::from(Span::styled(
                format!("Access expires automatically in {}.", CONSENT_INFO.duration),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Redirecting to loan processing...",
                Style::default().fg(Color::Yellow),
            )),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(message, chunks[1]);

        let cta = Paragraph::new(button("Manage Permissions", true, false))
            .alignment(Alignment::Center);
        f.render_widget(cta, chunks[2]);

        render_help(f, chunks[3], &[("m", "Manage Permissions")]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::timer::Scheduler;
    use std::time::Duration;
    use tokio::time;

    #[tokio::test(start_paused = true)]
    async fn test_redirects_after_three_seconds() {
        let (scheduler, mut rx) = Scheduler::new();
        let mut screen = SuccessScreen::new(scheduler.scope());

        time::sleep(Duration::from_millis(2999)).await;
        assert!(rx.try_recv().is_err());
        time::sleep(Duration::from_millis(2)).await;
        let fired = rx.try_recv().unwrap();
        assert!(screen.timers_mut().claim(fired.id));
        assert_eq!(
            screen.on_timer(fired.event),
            Some(Action::Navigate(Screen::Processing))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_manage_permissions_shortcut() {
        let (scheduler, _rx) = Scheduler::new();
        let mut screen = SuccessScreen::new(scheduler.scope());
        assert_eq!(
            screen.handle(NavigationAction::Shortcut('m')),
            Some(Action::Navigate(Screen::TrustCenter))
        );
    }
}
