//! Terminal User Interface module
//!
//! A ratatui front end for the tracker: the entry form, summary, history
//! list and expense chart in one screen.

pub mod app;
pub mod chart;
pub mod event;
pub mod handler;
pub mod layout;
pub mod surface;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use chart::TuiChart;
pub use surface::TuiSurface;
pub use terminal::run_tui;
