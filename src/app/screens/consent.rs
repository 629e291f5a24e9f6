//! Consent review screen
//!
//! Shows what the lender asks for and from which account. Without a selected
//! bank there is nothing to consent to, so the screen draws nothing and
//! ignores input.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tracing::info;

use crate::app::state::{Action, NavigationAction, Screen};
use crate::app::widgets::{button, centered_rect, render_header, render_help};
use crate::models::consent::{HIDDEN_DATA, VISIBLE_DATA};
use crate::models::{BankAccount, CONSENT_INFO};
use crate::LENDER_NAME;

#[derive(Debug, Default)]
pub struct ConsentScreen {
    details_open: bool,
}

impl ConsentScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Privacy details modal is showing
    pub fn details_open(&self) -> bool {
        self.details_open
    }

    pub fn handle(&mut self, action: NavigationAction, bank: Option<&BankAccount>) -> Option<Action> {
        let bank = bank?;

        if self.details_open {
            if matches!(
                action,
                NavigationAction::Select | NavigationAction::Back | NavigationAction::Shortcut('i')
            ) {
                self.details_open = false;
            }
            return None;
        }

        match action {
            NavigationAction::Select | NavigationAction::Shortcut('a') => {
                info!("Consent approved for {}", bank.id);
                Some(Action::Navigate(Screen::BankOtp))
            }
            NavigationAction::Back | NavigationAction::Shortcut('d') => {
                info!("Consent denied");
                Some(Action::Navigate(Screen::BankSelection))
            }
            NavigationAction::Shortcut('i') => {
                self.details_open = true;
                None
            }
            _ => None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, bank: Option<&BankAccount>) {
        let Some(bank) = bank else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Min(12),   // Consent card
                Constraint::Length(2), // Buttons
                Constraint::Length(2), // Help text
            ])
            .split(area);

        render_header(
            f,
            chunks[0],
            "Review Consent",
            &format!("{} is requesting access to your data", LENDER_NAME),
            Color::Green,
        );

        let label = Style::default().fg(Color::Gray);
        let value = Style::default().add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled("Purpose", label)),
            Line::from(Span::styled(CONSENT_INFO.purpose, value)),
            Line::from(""),
            Line::from(Span::styled("Data Shared", label)),
        ];
        for item in CONSENT_INFO.data_points {
            lines.push(Line::from(format!("• {}", item)));
        }
        lines.extend([
            Line::from(""),
            Line::from(vec![
                Span::styled("Duration: ", label),
                Span::styled(CONSENT_INFO.duration, value),
            ]),
            Line::from(vec![
                Span::styled("From: ", label),
                Span::styled(bank.bank_name, value),
                Span::raw(format!(" ({})", bank.summary())),
            ]),
            Line::from(vec![
                Span::styled("Via: ", label),
                Span::raw(CONSENT_INFO.partner),
            ]),
        ]);

        let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title("Consent Request")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        f.render_widget(card, chunks[1]);

        let buttons = Paragraph::new(Line::from(
            [
                button("Deny", true, false).spans,
                vec![Span::raw("  ")],
                button("Approve", true, false).spans,
            ]
            .concat(),
        ))
        .alignment(Alignment::Center);
        f.render_widget(buttons, chunks[2]);

        render_help(
            f,
            chunks[3],
            &[("Enter", "Approve"), ("d", "Deny"), ("i", "Privacy"), ("Esc", "Back")],
        );

        if self.details_open {
            self.render_details(f, area);
        }
    }

    fn render_details(&self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(90, 14, area);

        let mut lines = vec![Line::from(Span::styled(
            "What we WILL see",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))];
        lines.extend(VISIBLE_DATA.iter().map(|item| Line::from(format!("  ✓ {}", item))));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "What we CANNOT see",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.extend(HIDDEN_DATA.iter().map(|item| Line::from(format!("  ✗ {}", item))));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Enter to close",
            Style::default().fg(Color::DarkGray),
        )));

        let modal = Paragraph::new(lines).block(
            Block::default()
                .title("Privacy Details")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        f.render_widget(Clear, popup);
        f.render_widget(modal, popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::bank::find_account;

    #[test]
    fn test_without_bank_input_is_ignored() {
        let mut screen = ConsentScreen::new();
        assert_eq!(screen.handle(NavigationAction::Select, None), None);
        assert_eq!(screen.handle(NavigationAction::Back, None), None);
        assert_eq!(screen.handle(NavigationAction::Shortcut('i'), None), None);
        assert!(!screen.details_open());
    }

    #[test]
    fn test_approve_and_deny_targets() {
        let bank = find_account("hdfc");
        let mut screen = ConsentScreen::new();
        assert_eq!(
            screen.handle(NavigationAction::Select, bank),
            Some(Action::Navigate(Screen::BankOtp))
        );
        assert_eq!(
            screen.handle(NavigationAction::Shortcut('d'), bank),
            Some(Action::Navigate(Screen::BankSelection))
        );
        assert_eq!(
            screen.handle(NavigationAction::Back, bank),
            Some(Action::Navigate(Screen::BankSelection))
        );
    }

    #[test]
    fn test_details_modal_swallows_input_until_closed() {
        let bank = find_account("icici");
        let mut screen = ConsentScreen::new();
        screen.handle(NavigationAction::Shortcut('i'), bank);
        assert!(screen.details_open());

        assert_eq!(screen.handle(NavigationAction::Select, bank), None);
        assert!(!screen.details_open());
        assert_eq!(
            screen.handle(NavigationAction::Select, bank),
            Some(Action::Navigate(Screen::BankOtp))
        );
    }
}
