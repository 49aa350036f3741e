//! Application state for the TUI
//!
//! The App wires the controller to the terminal surface and chart backend
//! and tracks whether the loop should stop.

use crate::config::Settings;
use crate::controller::Controller;
use crate::presenter::Presenter;
use crate::storage::{KeyValueStore, TransactionStore};

use super::chart::TuiChart;
use super::surface::TuiSurface;

pub type TuiController<S> = Controller<S, TuiSurface, TuiChart>;

/// Main application state
pub struct App<S: KeyValueStore> {
    pub controller: TuiController<S>,
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Build the app and load saved transactions
    pub fn new(store: TransactionStore<S>, settings: &Settings) -> Self {
        let presenter = Presenter::new(TuiSurface::new(), TuiChart::new(), settings);
        let mut controller = Controller::new(store, presenter);
        controller.start();

        Self {
            controller,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn surface(&self) -> &TuiSurface {
        self.controller.presenter().surface()
    }

    pub fn surface_mut(&mut self) -> &mut TuiSurface {
        self.controller.presenter_mut().surface_mut()
    }

    pub fn charts(&self) -> &TuiChart {
        self.controller.presenter().charts()
    }
}
