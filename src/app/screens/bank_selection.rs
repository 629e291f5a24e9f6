//! Bank selection screen
//!
//! Simulates account discovery, then lists the accounts found for the
//! customer's number. Only linked accounts can be chosen. This is the only
//! screen that writes the selected bank.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::{info, warn};

use crate::app::shared::SharedState;
use crate::app::state::{Action, NavigationAction, Screen};
use crate::app::timer::{TimerEvent, TimerScope};
use crate::app::widgets::{button, render_header, render_help};
use crate::delays;
use crate::models::bank::{find_account, linked_count, BANK_CATALOG};
use crate::models::BankAccount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Fetching,
    Ready,
}

#[derive(Debug)]
pub struct BankSelectionScreen {
    timers: TimerScope,
    state: FetchState,
    list_state: ListState,
    selected: Option<&'static str>,
}

impl BankSelectionScreen {
    /// Mounting starts account discovery
    pub fn new(mut timers: TimerScope) -> Self {
        timers.after(delays::FETCH_ACCOUNTS, TimerEvent::AccountsFetched);
        Self {
            timers,
            state: FetchState::Fetching,
            list_state: ListState::default(),
            selected: None,
        }
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    /// Accounts on display; empty while discovery runs
    pub fn accounts(&self) -> &'static [BankAccount] {
        match self.state {
            FetchState::Fetching => &[],
            FetchState::Ready => &BANK_CATALOG,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Id of the account the customer picked on this screen
    pub fn selected(&self) -> Option<&'static str> {
        self.selected
    }

    /// Pick an account. Unlinked or unknown accounts are refused.
    pub fn select(&mut self, id: &str) -> bool {
        if self.state != FetchState::Ready {
            return false;
        }
        match find_account(id) {
            Some(account) if account.is_linked => {
                self.selected = Some(account.id);
                true
            }
            Some(account) => {
                warn!("Account {} is not linked to the AA network", account.id);
                false
            }
            None => false,
        }
    }

    pub fn can_continue(&self) -> bool {
        self.selected.is_some()
    }

    /// Commit the pick to shared state and move on to consent
    pub fn continue_with(&mut self, shared: &mut SharedState) -> Option<Action> {
        let account = self.selected.and_then(find_account)?;
        shared.set_selected_bank(account.clone());
        Some(Action::Navigate(Screen::Consent))
    }

    fn move_cursor(&mut self, down: bool) {
        let count = self.accounts().len();
        if count == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if down => (i + 1) % count,
            Some(i) => (i + count - 1) % count,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn handle(&mut self, action: NavigationAction, shared: &mut SharedState) -> Option<Action> {
        match action {
            NavigationAction::Back => return Some(Action::Navigate(Screen::Login)),
            NavigationAction::Up | NavigationAction::Previous => self.move_cursor(false),
            NavigationAction::Down | NavigationAction::Next => self.move_cursor(true),
            NavigationAction::Select => {
                let Some(account) = self.cursor().and_then(|i| self.accounts().get(i)) else {
                    return None;
                };
                if self.selected == Some(account.id) {
                    return self.continue_with(shared);
                }
                self.select(account.id);
            }
            NavigationAction::Shortcut('c') => return self.continue_with(shared),
            _ => {}
        }
        None
    }

    pub fn on_timer(&mut self, event: TimerEvent) -> Option<Action> {
        if event == TimerEvent::AccountsFetched {
            self.state = FetchState::Ready;
            self.list_state.select(Some(0));
            info!("Discovered {} accounts", BANK_CATALOG.len());
        }
        None
    }

    pub(crate) fn timers_mut(&mut self) -> &mut TimerScope {
        &mut self.timers
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Min(8),    // Account list
                Constraint::Length(2), // Button
                Constraint::Length(2), // Help text
            ])
            .split(area);

        render_header(
            f,
            chunks[0],
            "Select Bank Account",
            "Choose the account where you receive your salary.",
            Color::Green,
        );

        match self.state {
            FetchState::Fetching => {
                let loading = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Searching for accounts linked to your number...",
                        Style::default().fg(Color::Yellow),
                    )),
                ])
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
                f.render_widget(loading, chunks[1]);
            }
            FetchState::Ready => {
                let items: Vec<ListItem> = BANK_CATALOG
                    .iter()
                    .map(|account| {
                        let marker = if self.selected == Some(account.id) {
                            "(●) "
                        } else {
                            "( ) "
                        };
                        let mut title = vec![
                            Span::raw(marker),
                            Span::styled(account.bank_name, Style::default().add_modifier(Modifier::BOLD)),
                        ];
                        let mut detail = Style::default().fg(Color::Gray);
                        if !account.is_linked {
                            title.push(Span::styled("  Not linked", Style::default().fg(Color::Red)));
                            detail = Style::default().fg(Color::DarkGray);
                        }
                        ListItem::new(vec![
                            Line::from(title),
                            Line::from(Span::styled(format!("    {}", account.summary()), detail)),
                        ])
                    })
                    .collect();

                let title = format!("Found {} Linked Accounts", linked_count());
                let list = List::new(items)
                    .block(
                        Block::default()
                            .title(title)
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(Color::Green)),
                    )
                    .highlight_style(Style::default().bg(Color::DarkGray))
                    .highlight_symbol("▶ ");
                f.render_stateful_widget(list, chunks[1], &mut self.list_state);
            }
        }

        let cta = Paragraph::new(button("Continue", self.can_continue(), false))
            .alignment(Alignment::Center);
        f.render_widget(cta, chunks[2]);

        render_help(
            f,
            chunks[3],
            &[("↑↓", "Move"), ("Enter", "Select"), ("c", "Continue"), ("Esc", "Back")],
        );
    }
}
