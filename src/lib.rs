//! Letter board
//!
//! Splits typed text into individually draggable letters. Drag one letter
//! onto another to swap what they display; modifier-click to select.
//!
//! Pure core (`model`, `state`) with an impure terminal shell (`view`).

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
