//! Headless flow session
//!
//! Owns everything that makes up one run of the prototype: the navigator,
//! shared state, the consent record, the notification overlay and the
//! mounted screen. The terminal front end feeds it input and fired timers
//! and asks it to draw; tests drive it the same way without a terminal.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::app::notification::NotificationOverlay;
use crate::app::screens::{mount, ActiveScreen, MountContext};
use crate::app::shared::SharedState;
use crate::app::state::{Action, NavigationAction, Navigator, Screen};
use crate::app::timer::{Fired, Scheduler};
use crate::app::widgets::phone_frame;
use crate::config::AppConfig;
use crate::models::{ConsentRecord, LoanLimits};

pub struct Session {
    navigator: Navigator,
    shared: SharedState,
    consent: ConsentRecord,
    limits: LoanLimits,
    scheduler: Scheduler,
    fired_rx: UnboundedReceiver<Fired>,
    overlay: NotificationOverlay,
    active: ActiveScreen,
    overlay_area: Option<Rect>,
}

impl Session {
    /// Start a session on the home screen
    pub fn new(config: &AppConfig) -> Self {
        Self::starting_at(config, Screen::Home)
    }

    /// Start a session on an arbitrary screen. Must be called inside a
    /// tokio runtime since mounting may schedule timers.
    pub fn starting_at(config: &AppConfig, screen: Screen) -> Self {
        let (scheduler, fired_rx) = Scheduler::new();
        let shared = SharedState::new(config.loan.clone());
        let limits = config.limits.clone();
        let overlay = NotificationOverlay::new(scheduler.scope());
        let active = mount(
            screen,
            MountContext {
                scheduler: &scheduler,
                shared: &shared,
                limits: &limits,
            },
        );
        info!("Session started on {}", screen);

        Self {
            navigator: Navigator::starting_at(screen),
            shared,
            consent: ConsentRecord::new(),
            limits,
            scheduler,
            fired_rx,
            overlay,
            active,
            overlay_area: None,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current_screen()
    }

    pub fn should_quit(&self) -> bool {
        self.navigator.should_quit()
    }

    pub fn quit(&mut self) {
        self.navigator.quit();
    }

    pub fn shared(&self) -> &SharedState {
        &self.shared
    }

    pub fn consent(&self) -> &ConsentRecord {
        &self.consent
    }

    pub fn overlay(&self) -> &NotificationOverlay {
        &self.overlay
    }

    pub fn active(&self) -> &ActiveScreen {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut ActiveScreen {
        &mut self.active
    }

    /// Switch screens. The old component is dropped, which aborts its timers.
    /// Navigating to the current screen keeps it mounted as is.
    pub fn navigate(&mut self, target: Screen) {
        let from = self.navigator.current_screen();
        if !self.navigator.navigate(target) {
            debug!("Already on {}", target);
            return;
        }
        self.active = mount(
            target,
            MountContext {
                scheduler: &self.scheduler,
                shared: &self.shared,
                limits: &self.limits,
            },
        );
        info!("Navigated {} -> {}", from, target);
    }

    /// Carry out what a screen asked for
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Navigate(target) => self.navigate(target),
            Action::ShowNotification => self.overlay.show(),
        }
    }

    /// Route one input action
    pub fn handle_action(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Quit => self.quit(),
            NavigationAction::Shortcut('v') if self.overlay.is_visible() => {
                self.click_notification();
            }
            NavigationAction::None => {}
            action => {
                if let Some(next) = self.active.handle(action, &mut self.shared, &mut self.consent) {
                    self.apply(next);
                }
            }
        }
    }

    /// Deliver a fired timer to whoever still owns it. Returns false for
    /// stale timers, which are dropped.
    pub fn dispatch(&mut self, fired: Fired) -> bool {
        if self.overlay.claim(fired.id) {
            self.overlay.on_timer(fired.event);
            return true;
        }

        let claimed = self
            .active
            .timers_mut()
            .map(|timers| timers.claim(fired.id))
            .unwrap_or(false);
        if !claimed {
            debug!("Dropped stale {:?} ({:?})", fired.event, fired.id);
            return false;
        }

        debug!("Delivering {:?} to {}", fired.event, self.current_screen());
        if let Some(action) = self.active.on_timer(fired.event) {
            self.apply(action);
        }
        true
    }

    /// Dispatch every timer that has already fired. Returns how many were
    /// delivered.
    pub fn pump(&mut self) -> usize {
        let mut delivered = 0;
        while let Ok(fired) = self.fired_rx.try_recv() {
            if self.dispatch(fired) {
                delivered += 1;
            }
        }
        delivered
    }

    /// Wait for the next timer to fire
    pub async fn next_fired(&mut self) -> Option<Fired> {
        self.fired_rx.recv().await
    }

    /// Click on the notification banner: hide it and open the trust center
    pub fn click_notification(&mut self) -> bool {
        if !self.overlay.is_visible() {
            return false;
        }
        let target = self.overlay.dismiss();
        self.navigate(target);
        true
    }

    /// Mouse click at a terminal cell
    pub fn handle_click(&mut self, column: u16, row: u16) -> bool {
        let Some(area) = self.overlay_area else {
            return false;
        };
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        inside && self.click_notification()
    }

    /// Draw the phone frame, the current screen and the overlay on top
    pub fn render(&mut self, f: &mut Frame) {
        let phone = phone_frame(f.size());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(phone);
        f.render_widget(block, phone);

        self.active.render(f, inner, &self.shared, &self.consent);
        self.overlay_area = self.overlay.render(f, inner);
    }
}
