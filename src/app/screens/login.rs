//! Identity login screen
//!
//! Two steps: enter a 10-digit mobile number and request an OTP, then type
//! the 4-digit OTP and verify it.

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
use crate::app::widgets::{button, digit_boxes, render_header, render_help, DigitEntry, MobileNumberField};
use crate::delays;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStep {
    Mobile,
    Otp,
}

#[derive(Debug)]
pub struct LoginScreen {
    timers: TimerScope,
    step: LoginStep,
    mobile: MobileNumberField,
    otp: DigitEntry<4>,
    pending: Option<TimerId>,
}

impl LoginScreen {
    pub fn new(timers: TimerScope) -> Self {
        Self {
            timers,
            step: LoginStep::Mobile,
            mobile: MobileNumberField::new(),
            otp: DigitEntry::new(),
            pending: None,
        }
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    pub fn mobile(&self) -> &MobileNumberField {
        &self.mobile
    }

    pub fn otp(&self) -> &DigitEntry<4> {
        &self.otp
    }

    /// A send or verify request is in flight
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the typed mobile number (non-digits dropped, max 10)
    pub fn set_mobile(&mut self, text: &str) {
        if self.step == LoginStep::Mobile && !self.is_loading() {
            self.mobile.set_text(text);
        }
    }

    pub fn can_request_otp(&self) -> bool {
        self.step == LoginStep::Mobile && self.mobile.is_complete() && !self.is_loading()
    }

    /// "Get OTP": only with exactly 10 digits and nothing in flight
    pub fn request_otp(&mut self) -> bool {
        if !self.can_request_otp() {
            return false;
        }
        info!("Sending login OTP");
        self.pending = Some(self.timers.after(delays::SEND_OTP, TimerEvent::OtpSent));
        true
    }

    pub fn can_verify(&self) -> bool {
        self.step == LoginStep::Otp && self.otp.is_complete() && !self.is_loading()
    }

    pub fn verify(&mut self) -> bool {
        if !self.can_verify() {
            return false;
        }
        info!("Verifying login OTP");
        self.pending = Some(
            self.timers
                .after(delays::VERIFY_LOGIN_OTP, TimerEvent::LoginVerified),
        );
        true
    }

    /// Back out of the OTP step, abandoning any verification in flight
    fn back_to_mobile(&mut self) {
        if let Some(id) = self.pending.take() {
            self.timers.cancel(id);
        }
        self.otp.clear();
        self.step = LoginStep::Mobile;
    }

    pub fn handle(&mut self, action: NavigationAction) -> Option<Action> {
        match (self.step, action) {
            (LoginStep::Mobile, NavigationAction::Back) => {
                return Some(Action::Navigate(Screen::Education));
            }
            (LoginStep::Otp, NavigationAction::Back) => self.back_to_mobile(),
            (_, _) if self.is_loading() => {}
            (LoginStep::Mobile, NavigationAction::Digit(c)) => {
                self.mobile.push(c);
            }
            (LoginStep::Mobile, NavigationAction::Erase) => {
                self.mobile.pop();
            }
            (LoginStep::Mobile, NavigationAction::Select) => {
                self.request_otp();
            }
            (LoginStep::Otp, NavigationAction::Digit(c)) => {
                self.otp.enter(c);
            }
            (LoginStep::Otp, NavigationAction::Erase) => self.otp.erase(),
            (LoginStep::Otp, NavigationAction::Left) => {
                self.otp.set_focus(self.otp.focus().saturating_sub(1));
            }
            (LoginStep::Otp, NavigationAction::Right) => {
                self.otp.set_focus(self.otp.focus() + 1);
            }
            (LoginStep::Otp, NavigationAction::Select) => {
                self.verify();
            }
            _ => {}
        }
        None
    }

    pub fn on_timer(&mut self, event: TimerEvent) -> Option<Action> {
        match event {
            TimerEvent::OtpSent if self.step == LoginStep::Mobile => {
                self.pending = None;
                self.step = LoginStep::Otp;
                info!("Login OTP sent");
                None
            }
            TimerEvent::LoginVerified if self.step == LoginStep::Otp => {
                self.pending = None;
                info!("Login verified");
                Some(Action::Navigate(Screen::BankSelection))
            }
            _ => None,
        }
    }

    pub(crate) fn timers_mut(&mut self) -> &mut TimerScope {
        &mut self.timers
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Length(3), // Input
                Constraint::Min(4),    // Info
                Constraint::Length(2), // Button
                Constraint::Length(2), // Help text
            ])
            .split(area);

        match self.step {
            LoginStep::Mobile => {
                render_header(
                    f,
                    chunks[0],
                    "Verify your Identity",
                    "Log in to the AA network with your mobile number.",
                    Color::Green,
                );

                let text = if self.mobile.is_empty() {
                    Line::from(Span::styled(
                        "Enter 10-digit mobile number",
                        Style::default().fg(Color::DarkGray),
                    ))
                } else {
                    Line::from(vec![
                        Span::raw("+91 "),
                        Span::styled(
                            self.mobile.display(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ])
                };
                let input = Paragraph::new(text).block(
                    Block::default()
                        .title("Mobile Number")
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Green)),
                );
                f.render_widget(input, chunks[1]);

                let info = Paragraph::new(Line::from(Span::styled(
                    "Use the number linked to your bank accounts.",
                    Style::default().fg(Color::Gray),
                )));
                f.render_widget(info, chunks[2]);

                let cta = Paragraph::new(button("Get OTP", self.can_request_otp(), self.is_loading()))
                    .alignment(Alignment::Center);
                f.render_widget(cta, chunks[3]);

                render_help(f, chunks[4], &[("0-9", "Type"), ("Enter", "Get OTP"), ("Esc", "Back")]);
            }
            LoginStep::Otp => {
                let subtitle = format!("We sent a code to +91 {}", self.mobile.display());
                render_header(f, chunks[0], "Enter OTP", &subtitle, Color::Green);

                let boxes = Paragraph::new(digit_boxes(&self.otp, Color::Green))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
                f.render_widget(boxes, chunks[1]);

                let cta = Paragraph::new(button("Verify", self.can_verify(), self.is_loading()))
                    .alignment(Alignment::Center);
                f.render_widget(cta, chunks[3]);

                render_help(
                    f,
                    chunks[4],
                    &[("0-9", "Type"), ("Enter", "Verify"), ("Esc", "Change number")],
                );
            }
        }
    }
}
