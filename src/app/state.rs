//! Application state management
//!
//! Holds the screen enumeration, the navigator that owns the current screen,
//! and the mapping from keyboard events to navigation actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Loan amount and tenure configuration
    #[default]
    Home,
    /// How Account Aggregator verification works
    Education,
    /// AA identity login: mobile number, then OTP
    Login,
    /// Linked account discovery and selection
    BankSelection,
    /// Consent review for the selected account
    Consent,
    /// Bank-side OTP authorization
    BankOtp,
    /// Consent granted confirmation
    Success,
    /// Statement analysis animation
    Processing,
    /// Loan offer
    Result,
    /// Data access overview and revocation
    TrustCenter,
}

impl Screen {
    /// Every screen in flow order
    pub const ALL: [Screen; 10] = [
        Screen::Home,
        Screen::Education,
        Screen::Login,
        Screen::BankSelection,
        Screen::Consent,
        Screen::BankOtp,
        Screen::Success,
        Screen::Processing,
        Screen::Result,
        Screen::TrustCenter,
    ];

    /// Stable identifier, e.g. `BANK_SELECTION`
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "HOME",
            Screen::Education => "EDUCATION",
            Screen::Login => "AA_LOGIN",
            Screen::BankSelection => "BANK_SELECTION",
            Screen::Consent => "CONSENT",
            Screen::BankOtp => "BANK_OTP",
            Screen::Success => "SUCCESS",
            Screen::Processing => "PROCESSING",
            Screen::Result => "RESULT",
            Screen::TrustCenter => "TRUST_CENTER",
        }
    }

    /// Parse a screen identifier. Anything unrecognised resolves to `Home`.
    ///
    /// Matching ignores case and accepts `-` for `_`; `LOGIN` is accepted
    /// alongside `AA_LOGIN`.
    pub fn parse_or_home(input: &str) -> Self {
        let normalized = input.trim().to_ascii_uppercase().replace('-', "_");
        if normalized == "LOGIN" {
            return Screen::Login;
        }
        Screen::ALL
            .into_iter()
            .find(|screen| screen.name() == normalized)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a screen asks the session to do after handling input or a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Replace the current screen
    Navigate(Screen),
    /// Raise the system notification overlay
    ShowNotification,
}

/// Input actions that can be triggered by the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left / decrease (arrow left, h)
    Left,
    /// Move selection right / increase (arrow right, l)
    Right,
    /// Confirm / press the primary button (Enter, Space)
    Select,
    /// Go back (Esc)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Type a digit into the focused field
    Digit(char),
    /// Delete the last typed character (Backspace)
    Erase,
    /// Screen-specific shortcut (any other letter, lowercased)
    Shortcut(char),
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Owner of the single "current screen" value.
///
/// There is no history: back controls navigate to fixed targets.
#[derive(Debug)]
pub struct Navigator {
    current_screen: Screen,
    should_quit: bool,
}

impl Navigator {
    /// Create a navigator starting at the home screen
    pub fn new() -> Self {
        Self::starting_at(Screen::Home)
    }

    /// Create a navigator starting at an arbitrary screen
    pub fn starting_at(screen: Screen) -> Self {
        Self {
            current_screen: screen,
            should_quit: false,
        }
    }

    /// Get the current screen
    pub fn current_screen(&self) -> Screen {
        self.current_screen
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Replace the current screen. Returns true if the screen changed.
    pub fn navigate(&mut self, target: Screen) -> bool {
        if target == self.current_screen {
            return false;
        }
        self.current_screen = target;
        true
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            // Back
            KeyCode::Esc => NavigationAction::Back,

            // Text entry
            KeyCode::Backspace | KeyCode::Delete => NavigationAction::Erase,
            KeyCode::Char(c) if c.is_ascii_digit() => NavigationAction::Digit(c),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                NavigationAction::Shortcut(c.to_ascii_lowercase())
            }

            // Tab navigation
            KeyCode::Tab => NavigationAction::Next,
            KeyCode::BackTab => NavigationAction::Previous,

            _ => NavigationAction::None,
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_navigator_creation() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current_screen(), Screen::Home);
        assert!(!navigator.should_quit());
    }

    #[test]
    fn test_navigate_is_unconditional() {
        let mut navigator = Navigator::new();

        // Any target is accepted, in any order
        let targets = [
            Screen::Result,
            Screen::Home,
            Screen::BankOtp,
            Screen::TrustCenter,
            Screen::Consent,
        ];
        for target in targets {
            navigator.navigate(target);
            assert_eq!(navigator.current_screen(), target);
        }
    }

    #[test]
    fn test_navigate_to_same_screen_reports_no_change() {
        let mut navigator = Navigator::new();
        assert!(!navigator.navigate(Screen::Home));
        assert!(navigator.navigate(Screen::Education));
        assert!(!navigator.navigate(Screen::Education));
    }

    #[test]
    fn test_quit_handling() {
        let mut navigator = Navigator::new();
        navigator.quit();
        assert!(navigator.should_quit());
    }

    #[test]
    fn test_parse_screen_names() {
        assert_eq!(Screen::parse_or_home("BANK_SELECTION"), Screen::BankSelection);
        assert_eq!(Screen::parse_or_home("trust-center"), Screen::TrustCenter);
        assert_eq!(Screen::parse_or_home("login"), Screen::Login);
        assert_eq!(Screen::parse_or_home("AA_LOGIN"), Screen::Login);
        for screen in Screen::ALL {
            assert_eq!(Screen::parse_or_home(screen.name()), screen);
        }
    }

    #[test]
    fn test_unknown_screen_falls_back_to_home() {
        assert_eq!(Screen::default(), Screen::Home);
        assert_eq!(Screen::parse_or_home("CHECKOUT"), Screen::Home);
        assert_eq!(Screen::parse_or_home(""), Screen::Home);
    }

    #[test]
    fn test_key_to_navigation() {
        // Test quit keys
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            NavigationAction::Quit
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            NavigationAction::Quit
        );

        // Test navigation keys
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)),
            NavigationAction::Up
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE)),
            NavigationAction::Down
        );

        // Test text entry
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE)),
            NavigationAction::Digit('7')
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)),
            NavigationAction::Erase
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT)),
            NavigationAction::Shortcut('r')
        );

        // Test selection and back keys
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            NavigationAction::Select
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            NavigationAction::Back
        );

        // Test tab navigation
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            NavigationAction::Next
        );
        assert_eq!(
            Navigator::key_to_navigation(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            NavigationAction::Previous
        );
    }
}
