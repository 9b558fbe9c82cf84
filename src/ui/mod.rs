// UI module - GUI logic and event loop bridge
//
// This module contains:
// - UiBridge: Marshals worker-thread updates onto the Slint event loop
// - GuiController: Main controller that wires up the UI with state management

pub mod bridge;
pub mod controller;

pub use bridge::{UiBridge, UiBridgeHandle};
pub use controller::GuiController;
