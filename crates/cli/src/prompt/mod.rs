//! Interactive prompting and user input handling.
//!
//! This module provides the terminal exchange for pick-a-number: it asks
//! the question once, then reads one line per attempt and pushes it through
//! the core validation pipeline until an answer survives both stages.
//!
//! # Key Features
//!
//! - **Two-State Session**: An explicit awaiting/done machine, so the exit
//!   condition is testable without a terminal
//! - **Single Suspension Point**: One blocking line read per iteration
//! - **Collapsed Diagnostics**: Every rejection gets the same one-line
//!   report, whatever stage rejected it
//!
//! The session is generic over its channels; the binary hands it the real
//! standard streams, the tests hand it in-memory buffers.

// Export public items from submodules
pub mod input;
pub mod reporter;
pub mod session;

// Re-exports for convenience
pub use input::read_answer_line;
pub use reporter::report_invalid_input;
pub use session::{run_session, SessionState};
