//! View-state coordinator for the market matrix.
//!
//! Elm-style: the rendering layer sends [`MatrixMessage`]s to
//! [`MatrixState::update`] and reads [`MatrixState::view`] back.

pub mod message;
pub mod state;
mod update;

pub use message::MatrixMessage;
pub use state::{LoadPhase, LoadView, LoadedData, MatrixState};
