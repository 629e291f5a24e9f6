//! Main application controller
//!
//! Connects the terminal to a [`Session`]: draws it, feeds it keys and
//! mouse clicks, and delivers fired timers between frames.

use crate::{
    app::{
        session::Session,
        state::{Navigator, Screen},
        tui::{Tui, TuiEvent},
    },
    config::AppConfig,
    QuickLoanError, Result,
};

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// The flow being shown
    session: Session,
}

impl App {
    /// Create a new application instance
    pub fn new(config: &AppConfig, start: Screen) -> Result<Self> {
        Ok(Self {
            tui: Tui::new(config.tick_rate()?)?,
            session: Session::starting_at(config, start),
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| QuickLoanError::TuiError(format!("Terminal setup failed: {}", e)))
    }

    /// Put the terminal back the way it was
    pub fn restore(&mut self) -> Result<()> {
        self.tui
            .restore()
            .map_err(|e| QuickLoanError::TuiError(format!("Terminal restore failed: {}", e)))
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.session.should_quit() {
            self.session.pump();
            self.draw()?;
            self.handle_events()?;
            // Let timer tasks run between polls
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let session = &mut self.session;
        self.tui.draw(|f| session.render(f))?;
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> Result<()> {
        match self.tui.handle_events()? {
            Some(TuiEvent::Key(key)) => {
                let action = Navigator::key_to_navigation(key);
                self.session.handle_action(action);
            }
            Some(TuiEvent::Click(column, row)) => {
                self.session.handle_click(column, row);
            }
            None => {}
        }
        Ok(())
    }
}
