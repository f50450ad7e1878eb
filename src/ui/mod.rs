//! UI module - contains UI rendering components
//!
//! Formatting and small widgets used by the app views.

pub mod components;
