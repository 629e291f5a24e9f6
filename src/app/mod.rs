//! TUI application module
//!
//! Contains the flow session, its screens and timers, and the terminal
//! front end that drives them.

pub mod app;
pub mod notification;
pub mod screens;
pub mod session;
pub mod shared;
pub mod state;
pub mod timer;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use notification::NotificationOverlay;
pub use screens::{mount, ActiveScreen, MountContext};
pub use session::Session;
pub use shared::SharedState;
pub use state::{Action, NavigationAction, Navigator, Screen};
pub use timer::{Fired, Scheduler, TimerEvent, TimerId, TimerScope};
pub use tui::Tui;
