//! TUI screen components
//!
//! One module per screen of the flow, plus the registry that mounts a
//! screen's component and routes input, timers and rendering to it.

pub mod bank_otp;
pub mod bank_selection;
pub mod consent;
pub mod education;
pub mod home;
pub mod login;
pub mod processing;
pub mod result;
pub mod success;
pub mod trust_center;

pub use bank_otp::BankOtpScreen;
pub use bank_selection::BankSelectionScreen;
pub use consent::ConsentScreen;
pub use education::EducationScreen;
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use processing::ProcessingScreen;
pub use result::ResultScreen;
pub use success::SuccessScreen;
pub use trust_center::TrustCenterScreen;

use ratatui::{layout::Rect, Frame};

use crate::app::shared::SharedState;
use crate::app::state::{Action, NavigationAction, Screen};
use crate::app::timer::{Scheduler, TimerEvent, TimerScope};
use crate::models::{ConsentRecord, LoanLimits};

/// What a component may read while being mounted
pub struct MountContext<'a> {
    pub scheduler: &'a Scheduler,
    pub shared: &'a SharedState,
    pub limits: &'a LoanLimits,
}

/// The mounted component of the current screen
#[derive(Debug)]
pub enum ActiveScreen {
    Home(HomeScreen),
    Education(EducationScreen),
    Login(LoginScreen),
    BankSelection(BankSelectionScreen),
    Consent(ConsentScreen),
    BankOtp(BankOtpScreen),
    Success(SuccessScreen),
    Processing(ProcessingScreen),
    Result(ResultScreen),
    TrustCenter(TrustCenterScreen),
}

/// Build the component for `screen`. Screens that start timers do so here.
pub fn mount(screen: Screen, ctx: MountContext<'_>) -> ActiveScreen {
    let scope = || ctx.scheduler.scope();
    match screen {
        Screen::Home => ActiveScreen::Home(HomeScreen::new(ctx.limits.clone())),
        Screen::Education => ActiveScreen::Education(EducationScreen::new()),
        Screen::Login => ActiveScreen::Login(LoginScreen::new(scope())),
        Screen::BankSelection => ActiveScreen::BankSelection(BankSelectionScreen::new(scope())),
        Screen::Consent => ActiveScreen::Consent(ConsentScreen::new()),
        Screen::BankOtp => {
            ActiveScreen::BankOtp(BankOtpScreen::new(ctx.shared.selected_bank(), scope()))
        }
        Screen::Success => ActiveScreen::Success(SuccessScreen::new(scope())),
        Screen::Processing => ActiveScreen::Processing(ProcessingScreen::new(scope())),
        Screen::Result => ActiveScreen::Result(ResultScreen::new(scope())),
        Screen::TrustCenter => ActiveScreen::TrustCenter(TrustCenterScreen::new(scope())),
    }
}

impl ActiveScreen {
    pub fn screen(&self) -> Screen {
        match self {
            ActiveScreen::Home(_) => Screen::Home,
            ActiveScreen::Education(_) => Screen::Education,
            ActiveScreen::Login(_) => Screen::Login,
            ActiveScreen::BankSelection(_) => Screen::BankSelection,
            ActiveScreen::Consent(_) => Screen::Consent,
            ActiveScreen::BankOtp(_) => Screen::BankOtp,
            ActiveScreen::Success(_) => Screen::Success,
            ActiveScreen::Processing(_) => Screen::Processing,
            ActiveScreen::Result(_) => Screen::Result,
            ActiveScreen::TrustCenter(_) => Screen::TrustCenter,
        }
    }

    /// Timers owned by the component, if it has any
    pub fn timers_mut(&mut self) -> Option<&mut TimerScope> {
        match self {
            ActiveScreen::Login(s) => Some(s.timers_mut()),
            ActiveScreen::BankSelection(s) => Some(s.timers_mut()),
            ActiveScreen::BankOtp(s) => Some(s.timers_mut()),
            ActiveScreen::Success(s) => Some(s.timers_mut()),
            ActiveScreen::Processing(s) => Some(s.timers_mut()),
            ActiveScreen::Result(s) => Some(s.timers_mut()),
            ActiveScreen::TrustCenter(s) => Some(s.timers_mut()),
            ActiveScreen::Home(_) | ActiveScreen::Education(_) | ActiveScreen::Consent(_) => None,
        }
    }

    /// Route input. Write access to shared state is lent only to the
    /// screen that owns the field.
    pub fn handle(
        &mut self,
        action: NavigationAction,
        shared: &mut SharedState,
        consent: &mut ConsentRecord,
    ) -> Option<Action> {
        match self {
            ActiveScreen::Home(s) => {
                let mut loan = shared.loan().clone();
                let next = s.handle(action, &mut loan);
                if &loan != shared.loan() {
                    shared.set_loan_state(loan);
                }
                next
            }
            ActiveScreen::Education(s) => s.handle(action),
            ActiveScreen::Login(s) => s.handle(action),
            ActiveScreen::BankSelection(s) => s.handle(action, shared),
            ActiveScreen::Consent(s) => s.handle(action, shared.selected_bank()),
            ActiveScreen::BankOtp(s) => s.handle(action),
            ActiveScreen::Success(s) => s.handle(action),
            ActiveScreen::Processing(_) => None,
            ActiveScreen::Result(s) => s.handle(action),
            ActiveScreen::TrustCenter(s) => s.handle(action, consent),
        }
    }

    /// Deliver a timer the component's scope has already claimed
    pub fn on_timer(&mut self, event: TimerEvent) -> Option<Action> {
        match self {
            ActiveScreen::Login(s) => s.on_timer(event),
            ActiveScreen::BankSelection(s) => s.on_timer(event),
            ActiveScreen::BankOtp(s) => s.on_timer(event),
            ActiveScreen::Success(s) => s.on_timer(event),
            ActiveScreen::Processing(s) => s.on_timer(event),
            ActiveScreen::Result(s) => s.on_timer(event),
            ActiveScreen::TrustCenter(s) => s.on_timer(event),
            ActiveScreen::Home(_) | ActiveScreen::Education(_) | ActiveScreen::Consent(_) => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, shared: &SharedState, consent: &ConsentRecord) {
        match self {
            ActiveScreen::Home(s) => s.render(f, area, shared.loan()),
            ActiveScreen::Education(s) => s.render(f, area),
            ActiveScreen::Login(s) => s.render(f, area),
            ActiveScreen::BankSelection(s) => s.render(f, area),
            ActiveScreen::Consent(s) => s.render(f, area, shared.selected_bank()),
            ActiveScreen::BankOtp(s) => s.render(f, area, shared.selected_bank()),
            ActiveScreen::Success(s) => s.render(f, area),
            ActiveScreen::Processing(s) => s.render(f, area),
            ActiveScreen::Result(s) => s.render(f, area, shared.loan()),
            ActiveScreen::TrustCenter(s) => s.render(f, area, consent),
        }
    }
}
