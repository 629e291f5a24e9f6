//! Loan offer screen
//!
//! Shows the approved offer. Accepting it swaps to the disbursal message and
//! raises the access notification a moment later.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};
use tracing::info;

use crate::app::state::{Action, NavigationAction, Screen};
use crate::app::timer::{TimerEvent, TimerScope};
use crate::app::widgets::{button, render_header, render_help};
use crate::delays;
use crate::models::LoanState;
use crate::util::units::{format_rate, format_rupees, format_tenure};

/// Flat processing fee in rupees
pub const PROCESSING_FEE: u64 = 999;

#[derive(Debug)]
pub struct ResultScreen {
    timers: TimerScope,
    accepted: bool,
}

impl ResultScreen {
    pub fn new(timers: TimerScope) -> Self {
        Self {
            timers,
            accepted: false,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the offer. Only the first call does anything.
    pub fn accept(&mut self) -> bool {
        if self.accepted {
            return false;
        }
        self.accepted = true;
        self.timers
            .after(delays::NOTIFY_AFTER_ACCEPT, TimerEvent::ShowNotification);
        info!("Loan offer accepted");
        true
    }

    pub fn handle(&mut self, action: NavigationAction) -> Option<Action> {
        match action {
            NavigationAction::Select if !self.accepted => {
                self.accept();
                None
            }
            NavigationAction::Select | NavigationAction::Shortcut('t') => {
                Some(Action::Navigate(Screen::TrustCenter))
            }
            _ => None,
        }
    }

    pub fn on_timer(&mut self, event: TimerEvent) -> Option<Action> {
        (event == TimerEvent::ShowNotification).then_some(Action::ShowNotification)
    }

    pub(crate) fn timers_mut(&mut self) -> &mut TimerScope {
        &mut self.timers
    }

    pub fn render(&self, f: &mut Frame, area: Rect, loan: &LoanState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Length(3), // Amount
                Constraint::Min(7),    // Offer details
                Constraint::Length(2), // Button
                Constraint::Length(2), // Help text
            ])
            .split(area);

        if self.accepted {
            render_header(
                f,
                chunks[0],
                "Money on the way!",
                "The amount will reach your account within 24 hours.",
                Color::Green,
            );
        } else {
            render_header(
                f,
                chunks[0],
                "Congratulations!",
                "Your loan has been approved.",
                Color::Green,
            );
        }

        let amount = Paragraph::new(Line::from(Span::styled(
            format_rupees(loan.amount),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().title("Approved Amount").borders(Borders::ALL));
        f.render_widget(amount, chunks[1]);

        let emi = format_rupees(loan.monthly_emi());
        let tenure = format_tenure(loan.tenure);
        let rate = format_rate(loan.interest_rate);
        let fee = format_rupees(PROCESSING_FEE);
        let rows = vec![
            Row::new(vec!["Monthly EMI", emi.as_str()]),
            Row::new(vec!["Tenure", tenure.as_str()]),
            Row::new(vec!["Interest Rate", rate.as_str()]),
            Row::new(vec!["Processing Fee", fee.as_str()]),
        ];
        let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(12)])
            .block(Block::default().title("Offer Details").borders(Borders::ALL))
            .column_spacing(2);
        f.render_widget(table, chunks[2]);

        let cta = if self.accepted {
            button("View Data Permissions", true, false)
        } else {
            button("Accept Offer", true, false)
        };
        f.render_widget(Paragraph::new(cta).alignment(Alignment::Center), chunks[3]);

        render_help(
            f,
            chunks[4],
            &[("Enter", if self.accepted { "Permissions" } else { "Accept" }), ("t", "Trust Center")],
        );
    }
}
