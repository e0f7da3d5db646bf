// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Document chat sessions
//!
//! This module holds the session state machine and its collaborators:
//! prompt templates, suggested-question parsing, the AI responder and the
//! persisted source pointer.

mod controller;
pub mod input_parser;
mod pointer;
pub mod prompts;
mod questions;
mod responder;
mod session;

pub use controller::{SessionController, SessionEvent, NO_SUMMARY_PLACEHOLDER};
pub use pointer::SourcePointer;
pub use questions::parse_example_questions;
pub use responder::{Responder, MODEL_UNAVAILABLE_REPLY};
pub use session::{Session, SessionSnapshot, SessionState, Turn, TurnRole};
