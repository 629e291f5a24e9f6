//! Bank authorization screen
//!
//! The customer's bank sends a 6-digit OTP to approve the consent request.
//! A resend countdown ticks once a second. Without a selected bank the
//! screen is inert.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::info;

use crate::app::state::{Action, NavigationAction, Screen};
use crate::app::timer::{TimerEvent, TimerId, TimerScope};
use crate::app::widgets::{button, digit_boxes, render_header, render_help, DigitEntry};
use crate::delays;
use crate::models::BankAccount;
use crate::util::units::format_countdown;

/// Request reference like "AA-REQ-4821"
fn request_reference() -> String {
    let mut rng = SmallRng::from_entropy();
    format!("AA-REQ-{}", rng.gen_range(1000..10000))
}

#[derive(Debug)]
pub struct BankOtpScreen {
    timers: TimerScope,
    active: bool,
    otp: DigitEntry<6>,
    seconds_left: u32,
    countdown: Option<TimerId>,
    verify_timer: Option<TimerId>,
    reference: String,
}

impl BankOtpScreen {
    pub fn new(bank: Option<&BankAccount>, timers: TimerScope) -> Self {
        let mut screen = Self {
            timers,
            active: bank.is_some(),
            otp: DigitEntry::new(),
            seconds_left: 0,
            countdown: None,
            verify_timer: None,
            reference: request_reference(),
        };
        if screen.active {
            screen.start_countdown();
        }
        screen
    }

    fn start_countdown(&mut self) {
        if let Some(previous) = self.countdown.take() {
            self.timers.cancel(previous);
        }
        self.seconds_left = delays::RESEND_COUNTDOWN_SECS;
        self.countdown = Some(self.timers.every(delays::RESEND_TICK, TimerEvent::ResendTick));
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn otp(&self) -> &DigitEntry<6> {
        &self.otp
    }

    pub fn is_verifying(&self) -> bool {
        self.verify_timer.is_some()
    }

    pub fn can_resend(&self) -> bool {
        self.active && self.seconds_left == 0
    }

    /// Restart the countdown; only once it has run out
    pub fn resend(&mut self) -> bool {
        if !self.can_resend() {
            return false;
        }
        info!("Resending bank OTP");
        self.start_countdown();
        true
    }

    pub fn can_verify(&self) -> bool {
        self.active && self.otp.is_complete() && !self.is_verifying()
    }

    pub fn verify(&mut self) -> bool {
        if !self.can_verify() {
            return false;
        }
        info!("Verifying bank OTP for {}", self.reference);
        self.verify_timer = Some(
            self.timers
                .after(delays::VERIFY_BANK_OTP, TimerEvent::BankOtpVerified),
        );
        true
    }

    pub fn handle(&mut self, action: NavigationAction) -> Option<Action> {
        if !self.active {
            return None;
        }
        match action {
            NavigationAction::Back | NavigationAction::Shortcut('c') => {
                return Some(Action::Navigate(Screen::Consent));
            }
            _ if self.is_verifying() => {}
            NavigationAction::Digit(c) => {
                self.otp.enter(c);
            }
            NavigationAction::Erase => self.otp.erase(),
            NavigationAction::Left => self.otp.set_focus(self.otp.focus().saturating_sub(1)),
            NavigationAction::Right => self.otp.set_focus(self.otp.focus() + 1),
            NavigationAction::Select => {
                self.verify();
            }
            NavigationAction::Shortcut('r') => {
                self.resend();
            }
            _ => {}
        }
        None
    }

    pub fn on_timer(&mut self, event: TimerEvent) -> Option<Action> {
        match event {
            TimerEvent::ResendTick => {
                self.seconds_left = self.seconds_left.saturating_sub(1);
                if self.seconds_left == 0 {
                    if let Some(id) = self.countdown.take() {
                        self.timers.cancel(id);
                    }
                }
                None
            }
            TimerEvent::BankOtpVerified => {
                self.verify_timer = None;
                info!("Bank authorization approved");
                Some(Action::Navigate(Screen::Success))
            }
            _ => None,
        }
    }

    pub(crate) fn timers_mut(&mut self) -> &mut TimerScope {
        &mut self.timers
    }

    pub fn render(&self, f: &mut Frame, area: Rect, bank: Option<&BankAccount>) {
        let Some(bank) = bank else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Length(3), // OTP boxes
                Constraint::Length(2), // Countdown
                Constraint::Min(3),    // Reference
                Constraint::Length(2), // Button
                Constraint::Length(2), // Help text
            ])
            .split(area);

        render_header(
            f,
            chunks[0],
            &format!("{} Authorization", bank.bank_name),
            &format!("Enter the OTP sent by {} to approve the request.", bank.bank_name),
            Color::Blue,
        );

        let boxes = Paragraph::new(digit_boxes(&self.otp, Color::Blue))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(boxes, chunks[1]);

        let countdown = if self.seconds_left > 0 {
            Line::from(Span::styled(
                format!("Resend OTP in {}", format_countdown(self.seconds_left)),
                Style::default().fg(Color::Gray),
            ))
        } else {
            Line::from(Span::styled(
                "Resend OTP (r)",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ))
        };
        f.render_widget(Paragraph::new(countdown).alignment(Alignment::Center), chunks[2]);

        let reference = Paragraph::new(vec![
            Line::from(Span::styled("Request Reference", Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                self.reference.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(reference, chunks[3]);

        let cta = Paragraph::new(button("Verify & Approve", self.can_verify(), self.is_verifying()))
            .alignment(Alignment::Center);
        f.render_widget(cta, chunks[4]);

        render_help(
            f,
            chunks[5],
            &[("0-9", "Type"), ("Enter", "Verify"), ("r", "Resend"), ("c", "Cancel Request")],
        );
    }
}
