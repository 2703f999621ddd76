//! Pick-a-Number CLI Library
//!
//! This crate provides the terminal front end for pick-a-number. It owns
//! everything that touches a channel: the prompt, line input, the rejection
//! diagnostics, and the read-validate-repeat loop around the core pipeline.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`prompt`]: The interactive prompting session and its state machine
//!
//! # Examples
//!
//! The binary (`pick`) asks until it gets an answer it likes:
//!
//! ```bash
//! $ pick
//! Please give me a number between 1 and 10.
//! eleven
//! `eleven` is not what I asked for.
//! 11
//! `11` is not what I asked for.
//! 7
//! 7 is exactly what I asked for. Thank you!
//! ```

pub mod cli_args;
pub mod prompt;
