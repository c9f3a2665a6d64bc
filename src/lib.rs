// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chordpad: scales, chords and chord naming for a pad-style instrument.
//!
//! The [`music`] module is the typed theory engine, [`api`] is the
//! note-name string boundary front ends call into, and [`config`] loads
//! session files describing the instrument state.

pub mod api;
pub mod config;
pub mod music;
pub mod session;

pub use session::{Session, SessionView};
