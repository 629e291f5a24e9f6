//! Rendering checks against ratatui's test backend

use std::time::Duration;

use quickloan_aa::app::{NavigationAction, Screen, Session};
use quickloan_aa::config::AppConfig;
use ratatui::{backend::TestBackend, Terminal};
use tokio::time;

fn draw(session: &mut Session) -> String {
    let backend = TestBackend::new(60, 40);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| session.render(f)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

async fn consent_for_first_account(session: &mut Session) {
    time::sleep(Duration::from_millis(2001)).await;
    session.pump();
    session.handle_action(NavigationAction::Select);
    session.handle_action(NavigationAction::Select);
}

#[tokio::test(start_paused = true)]
async fn test_every_screen_renders() {
    let config = AppConfig::default();
    for screen in Screen::ALL {
        let mut session = Session::starting_at(&config, screen);
        let _ = draw(&mut session);
    }
}

#[tokio::test(start_paused = true)]
async fn test_home_shows_loan_estimate() {
    let mut session = Session::new(&AppConfig::default());
    let screen = draw(&mut session);
    assert!(screen.contains("₹2,00,000"));
    assert!(screen.contains("Monthly EMI"));
    assert!(screen.contains("11.5% p.a."));
}

#[tokio::test(start_paused = true)]
async fn test_consent_without_bank_renders_nothing() {
    let mut session = Session::starting_at(&AppConfig::default(), Screen::Consent);
    let screen = draw(&mut session);
    assert!(!screen.contains("Review Consent"));
    assert!(!screen.contains("Approve"));
}

#[tokio::test(start_paused = true)]
async fn test_bank_otp_without_bank_renders_nothing() {
    let mut session = Session::starting_at(&AppConfig::default(), Screen::BankOtp);
    let screen = draw(&mut session);
    assert!(!screen.contains("Authorization"));
    assert!(!screen.contains("AA-REQ"));
}

#[tokio::test(start_paused = true)]
async fn test_consent_with_bank_shows_source() {
    let mut session = Session::starting_at(&AppConfig::default(), Screen::BankSelection);
    consent_for_first_account(&mut session).await;
    assert_eq!(session.current_screen(), Screen::Consent);

    let screen = draw(&mut session);
    assert!(screen.contains("Review Consent"));
    assert!(screen.contains("HDFC Bank"));
    assert!(screen.contains("4582"));
}

#[tokio::test(start_paused = true)]
async fn test_notification_click_by_mouse() {
    let mut session = Session::starting_at(&AppConfig::default(), Screen::Result);
    session.handle_action(NavigationAction::Select);
    time::sleep(Duration::from_millis(1001)).await;
    session.pump();

    let screen = draw(&mut session);
    assert!(screen.contains("accessed your bank data"));

    // The phone frame is centred: 60 columns wide, 48 for the phone,
    // banner starts two rows below the frame's top border
    assert!(!session.handle_click(0, 0));
    assert!(session.handle_click(30, 4));
    assert_eq!(session.current_screen(), Screen::TrustCenter);
    assert!(!session.overlay().is_visible());
}
