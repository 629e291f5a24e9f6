//! End-to-end tests of the consent flow in virtual time

use std::time::Duration;

use quickloan_aa::app::{NavigationAction, Screen, Session};
use quickloan_aa::config::AppConfig;
use tokio::time;

/// Let `ms` of virtual time pass, then deliver whatever fired
async fn advance(session: &mut Session, ms: u64) -> usize {
    time::sleep(Duration::from_millis(ms)).await;
    session.pump()
}

fn type_digits(session: &mut Session, digits: &str) {
    for c in digits.chars() {
        session.handle_action(NavigationAction::Digit(c));
    }
}

fn press(session: &mut Session, action: NavigationAction) {
    session.handle_action(action);
}

#[tokio::test(start_paused = true)]
async fn test_full_flow_from_home_to_trust_center() {
    let mut session = Session::new(&AppConfig::default());
    assert_eq!(session.current_screen(), Screen::Home);

    // Loan configuration
    press(&mut session, NavigationAction::Right);
    assert_eq!(session.shared().loan().amount, 205_000);
    press(&mut session, NavigationAction::Select);
    assert_eq!(session.current_screen(), Screen::Education);

    press(&mut session, NavigationAction::Select);
    assert_eq!(session.current_screen(), Screen::Login);

    // Identity login
    type_digits(&mut session, "9876543210");
    press(&mut session, NavigationAction::Select);
    advance(&mut session, 1001).await;
    type_digits(&mut session, "4321");
    press(&mut session, NavigationAction::Select);
    advance(&mut session, 1499).await;
    assert_eq!(session.current_screen(), Screen::Login);
    advance(&mut session, 2).await;
    assert_eq!(session.current_screen(), Screen::BankSelection);

    // Account discovery and selection of SBI
    advance(&mut session, 2001).await;
    press(&mut session, NavigationAction::Down);
    press(&mut session, NavigationAction::Down);
    press(&mut session, NavigationAction::Select);
    press(&mut session, NavigationAction::Select);
    assert_eq!(session.current_screen(), Screen::Consent);
    assert_eq!(session.shared().selected_bank().map(|b| b.id), Some("sbi"));

    // Consent and bank authorization
    press(&mut session, NavigationAction::Select);
    assert_eq!(session.current_screen(), Screen::BankOtp);
    type_digits(&mut session, "123456");
    press(&mut session, NavigationAction::Select);
    advance(&mut session, 2001).await;
    assert_eq!(session.current_screen(), Screen::Success);

    advance(&mut session, 3001).await;
    assert_eq!(session.current_screen(), Screen::Processing);

    advance(&mut session, 4999).await;
    assert_eq!(session.current_screen(), Screen::Processing);
    advance(&mut session, 2).await;
    assert_eq!(session.current_screen(), Screen::Result);

    // Accept the offer and open the notification
    press(&mut session, NavigationAction::Select);
    assert!(!session.overlay().is_visible());
    advance(&mut session, 1001).await;
    assert!(session.overlay().is_visible());

    assert!(session.click_notification());
    assert!(!session.overlay().is_visible());
    assert_eq!(session.current_screen(), Screen::TrustCenter);

    // Revoke and leave
    assert!(session.consent().is_active());
    press(&mut session, NavigationAction::Shortcut('r'));
    assert!(!session.consent().is_active());
    press(&mut session, NavigationAction::Back);
    assert_eq!(session.current_screen(), Screen::Home);

    // The loan survived the whole journey
    assert_eq!(session.shared().loan().amount, 205_000);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_processing_cancels_its_timers() {
    let mut session = Session::starting_at(&AppConfig::default(), Screen::Processing);
    advance(&mut session, 2000).await;
    session.navigate(Screen::Home);

    assert_eq!(advance(&mut session, 10_000).await, 0);
    assert_eq!(session.current_screen(), Screen::Home);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_result_before_notification_cancels_it() {
    let mut session = Session::starting_at(&AppConfig::default(), Screen::Result);
    press(&mut session, NavigationAction::Select);
    advance(&mut session, 500).await;
    press(&mut session, NavigationAction::Shortcut('t'));
    assert_eq!(session.current_screen(), Screen::TrustCenter);

    advance(&mut session, 2000).await;
    assert!(!session.overlay().is_visible());
}

#[tokio::test(start_paused = true)]
async fn test_notification_survives_navigation_and_auto_hides() {
    let mut session = Session::starting_at(&AppConfig::default(), Screen::Result);
    press(&mut session, NavigationAction::Select);
    advance(&mut session, 1001).await;
    assert!(session.overlay().is_visible());

    press(&mut session, NavigationAction::Shortcut('t'));
    assert_eq!(session.current_screen(), Screen::TrustCenter);
    assert!(session.overlay().is_visible());

    advance(&mut session, 4998).await;
    assert!(session.overlay().is_visible());
    advance(&mut session, 3).await;
    assert!(!session.overlay().is_visible());
    assert_eq!(session.current_screen(), Screen::TrustCenter);
}

#[tokio::test(start_paused = true)]
async fn test_notification_key_opens_trust_center() {
    let mut session = Session::starting_at(&AppConfig::default(), Screen::Result);
    press(&mut session, NavigationAction::Select);
    advance(&mut session, 1001).await;

    press(&mut session, NavigationAction::Shortcut('v'));
    assert_eq!(session.current_screen(), Screen::TrustCenter);
    assert!(!session.overlay().is_visible());

    // Nothing left to auto-hide
    assert_eq!(advance(&mut session, 6000).await, 0);
}

#[tokio::test(start_paused = true)]
async fn test_bank_otp_without_bank_is_inert() {
    let mut session = Session::starting_at(&AppConfig::default(), Screen::BankOtp);
    type_digits(&mut session, "123456");
    press(&mut session, NavigationAction::Select);
    press(&mut session, NavigationAction::Back);
    assert_eq!(session.current_screen(), Screen::BankOtp);

    assert_eq!(advance(&mut session, 40_000).await, 0);
    assert_eq!(session.current_screen(), Screen::BankOtp);
}

#[tokio::test(start_paused = true)]
async fn test_consent_without_bank_ignores_input() {
    let mut session = Session::starting_at(&AppConfig::default(), Screen::Consent);
    press(&mut session, NavigationAction::Select);
    press(&mut session, NavigationAction::Back);
    press(&mut session, NavigationAction::Shortcut('d'));
    assert_eq!(session.current_screen(), Screen::Consent);
}

#[tokio::test(start_paused = true)]
async fn test_back_targets() {
    let config = AppConfig::default();
    let cases = [
        (Screen::Education, Screen::Home),
        (Screen::Login, Screen::Education),
        (Screen::BankSelection, Screen::Login),
        (Screen::TrustCenter, Screen::Home),
    ];
    for (from, to) in cases {
        let mut session = Session::starting_at(&config, from);
        press(&mut session, NavigationAction::Back);
        assert_eq!(session.current_screen(), to, "back from {}", from);
    }
}

#[tokio::test(start_paused = true)]
async fn test_unlinked_account_blocks_continue() {
    let mut session = Session::starting_at(&AppConfig::default(), Screen::BankSelection);
    advance(&mut session, 2001).await;

    // Axis is last in the list and not linked
    press(&mut session, NavigationAction::Up);
    press(&mut session, NavigationAction::Select);
    press(&mut session, NavigationAction::Select);
    press(&mut session, NavigationAction::Shortcut('c'));
    assert_eq!(session.current_screen(), Screen::BankSelection);
    assert!(session.shared().selected_bank().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_revoking_twice_keeps_consent_revoked() {
    let mut session = Session::starting_at(&AppConfig::default(), Screen::TrustCenter);
    press(&mut session, NavigationAction::Shortcut('r'));
    let revoked_at = session.consent().revoked_at();
    advance(&mut session, 1000).await;
    press(&mut session, NavigationAction::Shortcut('r'));
    assert_eq!(session.consent().revoked_at(), revoked_at);

    // Only the replacement toast timer is left, at 1000 + 3000
    assert_eq!(advance(&mut session, 2500).await, 0);
    assert_eq!(advance(&mut session, 501).await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_navigate_always_lands_on_target() {
    let mut session = Session::new(&AppConfig::default());
    let sequence = [
        Screen::Result,
        Screen::Consent,
        Screen::Consent,
        Screen::Processing,
        Screen::Home,
        Screen::TrustCenter,
        Screen::BankOtp,
    ];
    for target in sequence {
        session.navigate(target);
        assert_eq!(session.current_screen(), target);
        assert_eq!(session.active().screen(), target);
    }
    for target in Screen::ALL.iter().rev() {
        session.navigate(*target);
        assert_eq!(session.current_screen(), *target);
    }
}
