use std::io::BufRead;

use pick_a_number_core::error::{Error, Result};

/// Reads one full line of user input, newline included.
///
/// This is the only place the session blocks.
///
/// # Errors
///
/// Returns [`Error::InputClosed`] when the channel has reached end of
/// input, and [`Error::Stdio`] when the read itself fails. Neither is
/// recoverable by re-prompting.
pub fn read_answer_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;

    if bytes_read == 0 {
        return Err(Error::InputClosed);
    }

    Ok(line)
}
