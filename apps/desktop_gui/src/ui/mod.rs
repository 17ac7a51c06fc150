//! UI layer for the desktop app: app shell, theme, and shared widgets.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::DesktopGuiApp;
