use std::fmt::Display;
use std::io::Write;

use pick_a_number_core::error::Result;

/// Reports one rejected attempt on the error channel.
///
/// The rejected input is display-only: the reporter accepts anything
/// printable and never looks inside it. Parse failures and range failures
/// deliberately produce the identical line, so the caller leaks nothing
/// about which stage said no.
///
/// # Errors
///
/// Returns [`pick_a_number_core::error::Error::Stdio`] only when the error
/// channel itself refuses the write.
pub fn report_invalid_input<W: Write>(errors: &mut W, raw: impl Display) -> Result<()> {
    writeln!(errors, "`{raw}` is not what I asked for.")?;
    Ok(())
}
