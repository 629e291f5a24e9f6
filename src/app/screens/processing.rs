//! Processing screen implementation
//!
//! Animated step list while the lender "analyzes" the shared statements.

use std::time::Duration;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::app::state::{Action, Screen};
use crate::app::timer::{TimerEvent, TimerScope};
use crate::app::widgets::render_header;
use crate::delays;

pub const STEPS: [&str; 3] = [
    "Connecting securely...",
    "Fetching statements...",
    "Analyzing income...",
];

/// Time from mount until the result screen
pub fn total_duration() -> Duration {
    delays::PROCESSING_STEP * STEPS.len() as u32 + delays::PROCESSING_TAIL
}

#[derive(Debug)]
pub struct ProcessingScreen {
    timers: TimerScope,
    step: usize,
}

impl ProcessingScreen {
    pub fn new(mut timers: TimerScope) -> Self {
        timers.every(delays::PROCESSING_STEP, TimerEvent::ProcessingStep);
        timers.after(total_duration(), TimerEvent::ProcessingFinished);
        Self { timers, step: 0 }
    }

    /// Index into [`STEPS`] of the step in progress
    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn on_timer(&mut self, event: TimerEvent) -> Option<Action> {
        match event {
            TimerEvent::ProcessingStep => {
                self.step = (self.step + 1).min(STEPS.len() - 1);
                None
            }
            TimerEvent::ProcessingFinished => Some(Action::Navigate(Screen::Result)),
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
                Constraint::Length(3), // Progress bar
                Constraint::Min(5),    // Steps
                Constraint::Length(2), // Footer
            ])
            .split(area);

        render_header(
            f,
            chunks[0],
            "Analyzing Your Profile",
            "This only takes a few seconds.",
            Color::Cyan,
        );

        let progress = (self.step + 1) as f64 / STEPS.len() as f64;
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
            .ratio(progress.clamp(0.0, 1.0))
            .label(format!("{:.0}%", progress * 100.0));
        f.render_widget(gauge, chunks[1]);

        let items: Vec<ListItem> = STEPS
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let (symbol, style) = if index < self.step {
                    ("✓", Style::default().fg(Color::Green))
                } else if index == self.step {
                    (
                        "●",
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    )
                } else {
                    ("○", Style::default().fg(Color::DarkGray))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {} ", symbol), style),
                    Span::styled(*label, style),
                ]))
            })
            .collect();
        f.render_widget(List::new(items), chunks[2]);

        let footer = Paragraph::new(Span::styled(
            "Please don't close the app",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        f.render_widget(footer, chunks[3]);
    }
}
