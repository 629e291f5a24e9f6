//! Trust center screen
//!
//! Lets the customer see who accessed their bank data, what it showed, and
//! revoke the consent grant.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use tracing::info;

use crate::app::state::{Action, NavigationAction, Screen};
use crate::app::timer::{TimerEvent, TimerId, TimerScope};
use crate::app::widgets::{button, render_header, render_help};
use crate::delays;
use crate::models::consent::{ACCESS_HISTORY, INCOME_SUMMARY};
use crate::models::ConsentRecord;
use crate::LENDER_NAME;

#[derive(Debug)]
pub struct TrustCenterScreen {
    timers: TimerScope,
    toast_timer: Option<TimerId>,
}

impl TrustCenterScreen {
    pub fn new(timers: TimerScope) -> Self {
        Self {
            timers,
            toast_timer: None,
        }
    }

    /// "Access revoked" toast is showing
    pub fn toast_visible(&self) -> bool {
        self.toast_timer.is_some()
    }

    /// Revoke the grant and (re)start the toast
    pub fn revoke(&mut self, consent: &mut ConsentRecord) {
        if consent.revoke() {
            info!("Consent revoked");
        }
        if let Some(previous) = self.toast_timer.take() {
            self.timers.cancel(previous);
        }
        self.toast_timer = Some(self.timers.after(delays::REVOKE_TOAST, TimerEvent::ToastExpired));
    }

    pub fn handle(&mut self, action: NavigationAction, consent: &mut ConsentRecord) -> Option<Action> {
        match action {
            NavigationAction::Back => Some(Action::Navigate(Screen::Home)),
            NavigationAction::Shortcut('r') => {
                self.revoke(consent);
                None
            }
            _ => None,
        }
    }

    pub fn on_timer(&mut self, event: TimerEvent) -> Option<Action> {
        if event == TimerEvent::ToastExpired {
            self.toast_timer = None;
        }
        None
    }

    pub(crate) fn timers_mut(&mut self) -> &mut TimerScope {
        &mut self.timers
    }

    pub fn render(&self, f: &mut Frame, area: Rect, consent: &ConsentRecord) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Title
                Constraint::Length(7), // Consent card
                Constraint::Length(5), // Access history
                Constraint::Min(8),    // Income chart
                Constraint::Length(2), // Help text
            ])
            .split(area);

        render_header(
            f,
            chunks[0],
            "Trust Center",
            "You are in control of your data.",
            Color::Magenta,
        );

        self.render_consent_card(f, chunks[1], consent);
        self.render_history(f, chunks[2]);
        self.render_chart(f, chunks[3]);

        render_help(f, chunks[4], &[("r", "Revoke"), ("Esc", "Home")]);

        if self.toast_visible() {
            let toast_area = Rect {
                x: area.x + 2,
                y: area.bottom().saturating_sub(6),
                width: area.width.saturating_sub(4),
                height: 3,
            };
            let toast = Paragraph::new(Span::styled(
                "Access revoked successfully",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).style(Style::default().bg(Color::DarkGray)));
            f.render_widget(Clear, toast_area);
            f.render_widget(toast, toast_area);
        }
    }

    fn render_consent_card(&self, f: &mut Frame, area: Rect, consent: &ConsentRecord) {
        let (status, status_style) = if consent.is_active() {
            ("Active", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            ("Revoked", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(LENDER_NAME, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(status, status_style),
            ]),
            Line::from(Span::styled(
                format!("Granted {}", consent.granted().format("%d %b %Y")),
                Style::default().fg(Color::Gray),
            )),
        ];
        match consent.revoked_at() {
            Some(revoked) => lines.push(Line::from(Span::styled(
                format!("Revoked {}", revoked.format("%d %b %Y, %-I:%M %p")),
                Style::default().fg(Color::Gray),
            ))),
            None => lines.push(Line::from(Span::styled(
                format!("Expires {}", consent.expires_at().format("%d %b %Y")),
                Style::default().fg(Color::Gray),
            ))),
        }
        lines.push(Line::from(""));
        lines.push(button("Revoke Access", consent.is_active(), false));

        let card = Paragraph::new(lines).block(
            Block::default()
                .title("Active Consents")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        );
        f.render_widget(card, area);
    }

    fn render_history(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = ACCESS_HISTORY
            .iter()
            .map(|event| {
                ListItem::new(Line::from(vec![
                    Span::raw(event.description),
                    Span::styled(
                        format!("  {} • {}", LENDER_NAME, event.when()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();
        let list = List::new(items).block(Block::default().title("Access History").borders(Borders::ALL));
        f.render_widget(list, area);
    }

    fn render_chart(&self, f: &mut Frame, area: Rect) {
        let mut chart = BarChart::default()
            .block(
                Block::default()
                    .title("Income vs Expense (₹ thousands)")
                    .borders(Borders::ALL),
            )
            .bar_width(2)
            .bar_gap(0)
            .group_gap(1);

        for month in INCOME_SUMMARY {
            let group = BarGroup::default()
                .label(Line::from(month.month))
                .bars(&[
                    Bar::default()
                        .value(month.income / 1000)
                        .style(Style::default().fg(Color::Green)),
                    Bar::default()
                        .value(month.expense / 1000)
                        .style(Style::default().fg(Color::Red)),
                ]);
            chart = chart.data(group);
        }

        f.render_widget(chart, area);
    }
}
