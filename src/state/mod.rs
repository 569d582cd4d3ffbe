//! Client-side plugin state.
//!
//! DESIGN
//! ======
//! `actions` defines the closed set of UI events and their constructors;
//! `ui` holds the state those events update.

pub mod actions;
pub mod ui;
