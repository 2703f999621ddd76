use std::io::{BufRead, Write};

use log::debug;

use pick_a_number_core::error::Result;
use pick_a_number_core::number::{NumberState, SanitizedNumber};
use pick_a_number_core::parsing::parse_number;
use pick_a_number_core::sanitization::{sanitize_number, LOWER_BOUND, UPPER_BOUND};

use super::input::read_answer_line;
use super::reporter::report_invalid_input;

/// The state of one prompting session.
///
/// A session is either still waiting for an acceptable answer, holding the
/// invalid placeholder, or done, holding the number that settled it. There
/// is no third state and no way back from `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Awaiting(NumberState),
    Done(SanitizedNumber),
}

impl SessionState {
    /// A fresh session that has not accepted anything yet.
    #[must_use]
    pub fn new() -> Self {
        SessionState::Awaiting(NumberState::Invalid)
    }

    /// Feeds one line of input through the validation pipeline.
    ///
    /// An answer that survives both stages moves the session to `Done`; a
    /// rejected one leaves it awaiting with the invalid placeholder. Once
    /// done, further input changes nothing.
    #[must_use]
    pub fn advance(self, line: &str) -> SessionState {
        match self {
            SessionState::Done(_) => self,
            SessionState::Awaiting(_) => match sanitize_number(parse_number(line)) {
                Some(number) => SessionState::Done(number),
                None => SessionState::Awaiting(NumberState::Invalid),
            },
        }
    }

    /// Whether the session has settled on a number.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, SessionState::Done(_))
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::new()
    }
}

/// Runs a prompting session to completion.
///
/// Asks the question once, then reads one line per iteration and advances
/// the session until an answer is accepted. Every rejected attempt gets one
/// diagnostic line on `errors`; the success message goes to `output` along
/// with the prompt. The body always runs at least once before the state is
/// inspected.
///
/// # Errors
///
/// Only channel failures escape: a closed or unreadable `input`, or a
/// refused write on `output`/`errors`. Rejected answers never produce an
/// error, just another iteration.
pub fn run_session<R, W, E>(input: &mut R, output: &mut W, errors: &mut E) -> Result<SanitizedNumber>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(output, "Please give me a number between {LOWER_BOUND} and {UPPER_BOUND}.")?;
    output.flush()?;

    let mut state = SessionState::new();

    loop {
        let line = read_answer_line(input)?;
        let answer = line.trim_end_matches(['\r', '\n']);

        state = state.advance(answer);

        match state {
            SessionState::Done(number) => {
                debug!("session settled on {number}");
                writeln!(output, "{number} is exactly what I asked for. Thank you!")?;
                return Ok(number);
            }
            SessionState::Awaiting(current) => {
                debug!("rejected {answer:?}, current result: {current}");
                report_invalid_input(errors, answer)?;
            }
        }
    }
}
