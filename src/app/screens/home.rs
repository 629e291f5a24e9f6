//! Home screen implementation
//!
//! Loan configuration: amount and tenure sliders with a live EMI estimate.
//! The only screen that writes the shared loan state.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::app::state::{Action, NavigationAction, Screen};
use crate::app::widgets::{button, render_header, render_help, render_slider, Slider};
use crate::models::{LoanLimits, LoanState};
use crate::util::units::{format_rate, format_rupees, format_tenure};

/// Which slider has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanField {
    Amount,
    Tenure,
}

/// Home screen component
#[derive(Debug)]
pub struct HomeScreen {
    limits: LoanLimits,
    focused: LoanField,
}

impl HomeScreen {
    pub fn new(limits: LoanLimits) -> Self {
        Self {
            limits,
            focused: LoanField::Amount,
        }
    }

    pub fn focused(&self) -> LoanField {
        self.focused
    }

    pub fn amount_slider(&self, loan: &LoanState) -> Slider {
        Slider::new(self.limits.min_amount, loan.max_amount, self.limits.amount_step)
    }

    pub fn tenure_slider(&self) -> Slider {
        Slider::new(
            u64::from(self.limits.min_tenure),
            u64::from(self.limits.max_tenure),
            u64::from(self.limits.tenure_step),
        )
    }

    /// Move the amount slider to `value`
    pub fn set_amount(&self, loan: &mut LoanState, value: u64) {
        loan.amount = self.amount_slider(loan).clamp(value);
    }

    /// Move the tenure slider to `months`
    pub fn set_tenure(&self, loan: &mut LoanState, months: u32) {
        loan.tenure = self.tenure_slider().clamp(u64::from(months)) as u32;
    }

    /// Step the focused slider up or down
    pub fn adjust(&self, loan: &mut LoanState, increase: bool) {
        match self.focused {
            LoanField::Amount => {
                let slider = self.amount_slider(loan);
                loan.amount = if increase {
                    slider.increment(loan.amount)
                } else {
                    slider.decrement(loan.amount)
                };
            }
            LoanField::Tenure => {
                let slider = self.tenure_slider();
                let current = u64::from(loan.tenure);
                let next = if increase {
                    slider.increment(current)
                } else {
                    slider.decrement(current)
                };
                loan.tenure = next as u32;
            }
        }
    }

    fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            LoanField::Amount => LoanField::Tenure,
            LoanField::Tenure => LoanField::Amount,
        };
    }

    /// Handle input; the loan is the only shared state this screen writes
    pub fn handle(&mut self, action: NavigationAction, loan: &mut LoanState) -> Option<Action> {
        match action {
            NavigationAction::Up
            | NavigationAction::Down
            | NavigationAction::Next
            | NavigationAction::Previous => self.toggle_focus(),
            NavigationAction::Left => self.adjust(loan, false),
            NavigationAction::Right => self.adjust(loan, true),
            NavigationAction::Select => return Some(Action::Navigate(Screen::Education)),
            _ => {}
        }
        None
    }

    /// Render the home screen
    pub fn render(&self, f: &mut Frame, area: Rect, loan: &LoanState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Amount slider
                Constraint::Length(3), // Tenure slider
                Constraint::Min(6),    // EMI summary
                Constraint::Length(2), // Button
                Constraint::Length(2), // Help text
            ])
            .split(area);

        render_header(
            f,
            chunks[0],
            "QuickLoan",
            "Instant personal loans, verified in minutes",
            Color::Cyan,
        );

        let amount = self.amount_slider(loan);
        render_slider(
            f,
            chunks[1],
            "I want to borrow",
            format_rupees(loan.amount),
            amount.ratio(loan.amount),
            self.focused == LoanField::Amount,
        );

        let tenure = self.tenure_slider();
        render_slider(
            f,
            chunks[2],
            "For a duration of",
            format_tenure(loan.tenure),
            tenure.ratio(u64::from(loan.tenure)),
            self.focused == LoanField::Tenure,
        );

        self.render_summary(f, chunks[3], loan);

        let cta = Paragraph::new(button("Check Eligibility", true, false))
            .alignment(Alignment::Center);
        f.render_widget(cta, chunks[4]);

        render_help(
            f,
            chunks[5],
            &[("↑↓", "Field"), ("←→", "Adjust"), ("Enter", "Continue")],
        );
    }

    fn render_summary(&self, f: &mut Frame, area: Rect, loan: &LoanState) {
        let emi = format_rupees(loan.monthly_emi());
        let rate = format_rate(loan.interest_rate);
        let total = format_rupees(loan.total_payable());

        let rows = vec![
            Row::new(vec!["Monthly EMI", emi.as_str()])
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Row::new(vec!["Interest Rate", rate.as_str()]),
            Row::new(vec!["Total Payable", total.as_str()]),
        ];

        let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(12)])
            .block(
                Block::default()
                    .title("Your Estimate")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .column_spacing(2);

        f.render_widget(table, area);
    }
}
