//! Education screen implementation
//!
//! Explains how Account Aggregator verification works before the customer
//! logs in. Continue always leads to the AA login rather than straight to
//! consent, since consent needs the bank account picked after login.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::state::{Action, NavigationAction, Screen};
use crate::app::widgets::{button, render_header, render_help};
use crate::LENDER_NAME;

const VALUE_PROPS: [(&str, &str); 3] = [
    (
        "Bank-grade encryption",
        "Your statements travel encrypted end to end.",
    ),
    (
        "Time-bound access",
        "Access expires automatically after 30 days.",
    ),
    (
        "No passwords, no payments",
        "We never see your netbanking password or move money.",
    ),
];

#[derive(Debug, Default)]
pub struct EducationScreen;

impl EducationScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&mut self, action: NavigationAction) -> Option<Action> {
        match action {
            NavigationAction::Select => Some(Action::Navigate(Screen::Login)),
            NavigationAction::Back => Some(Action::Navigate(Screen::Home)),
            _ => None,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Length(5), // Diagram
                Constraint::Min(9),    // Value props
                Constraint::Length(2), // Button
                Constraint::Length(2), // Help text
            ])
            .split(area);

        render_header(
            f,
            chunks[0],
            "How We Verify Your Income",
            "A government-backed framework to view your bank statements securely.",
            Color::Cyan,
        );

        let diagram = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Your Bank", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  ──▶  "),
                Span::styled("AA Network", Style::default().fg(Color::Green)),
                Span::raw("  ──▶  "),
                Span::styled(LENDER_NAME, Style::default().fg(Color::Cyan)),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(diagram, chunks[1]);

        let mut lines = Vec::new();
        for (title, body) in VALUE_PROPS {
            lines.push(Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(body, Style::default().fg(Color::Gray))));
            lines.push(Line::from(""));
        }
        let props = Paragraph::new(lines).wrap(Wrap { trim: true });
        f.render_widget(props, chunks[2]);

        let cta = Paragraph::new(button("Continue Securely", true, false))
            .alignment(Alignment::Center);
        f.render_widget(cta, chunks[3]);

        render_help(f, chunks[4], &[("Enter", "Continue"), ("Esc", "Back")]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_targets() {
        let mut screen = EducationScreen::new();
        assert_eq!(
            screen.handle(NavigationAction::Select),
            Some(Action::Navigate(Screen::Login))
        );
        assert_eq!(
            screen.handle(NavigationAction::Back),
            Some(Action::Navigate(Screen::Home))
        );
        assert_eq!(screen.handle(NavigationAction::Digit('1')), None);
    }
}
