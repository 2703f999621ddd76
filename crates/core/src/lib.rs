//! Pick-a-Number Core Library
//!
//! This crate provides the validation pipeline for pick-a-number, a small
//! interactive terminal tool that keeps asking until it is given a number
//! between 1 and 10.
//!
//! # Key Features
//!
//! - **Variant Model**: The three result shapes an answer can be in
//!   (invalid, unsanitized, sanitized) as one closed union
//! - **Parsing Stage**: Turn raw text into an unsanitized number, or nothing
//! - **Sanitization Stage**: Narrow an unsanitized number into the accepted
//!   range, or nothing
//! - **Error Handling**: Error types for the channel-level failures that
//!   cannot be recovered by re-prompting
//!
//! Rejections flow through the pipeline as `None`, never as errors: only a
//! broken input or output channel produces an [`error::Error`].
//!
//! # Examples
//!
//! Running the two stages back to back, the way the interactive loop does:
//!
//! ```
//! use pick_a_number_core::parsing::parse_number;
//! use pick_a_number_core::sanitization::sanitize_number;
//!
//! let accepted = sanitize_number(parse_number("7"));
//! assert_eq!(accepted.map(|n| n.value()), Some(7));
//!
//! let rejected = sanitize_number(parse_number("11"));
//! assert!(rejected.is_none());
//! ```

pub mod error;
pub mod number;
pub mod parsing;
pub mod sanitization;
