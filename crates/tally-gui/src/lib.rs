//! Tally - GUI library.
//!
//! The windowed view of the calculator. All calculator state lives in the
//! `tally_core` view-model; this crate renders it and routes user input
//! back into it.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod message;
pub mod theme;
pub mod view;
