//! Reading and validating the user's menu choice.

use std::io::{Read, Write};

use crate::error::{Result, SmenuError};

/// Text shown before reading the choice.
pub const PROMPT: &str = "Enter the number of the script to run: ";

/// Validate a choice against a menu of `count` options.
///
/// Returns the 1-based menu number.
///
/// # Errors
///
/// Returns [`SmenuError::InvalidInput`] if `input` is not an integer and
/// [`SmenuError::InvalidChoice`] if it falls outside `1..=count`. A number
/// too large for `i64` is still a number, so it is an invalid choice.
///
/// # Examples
///
/// ```
/// use smenu::menu::parse_selection;
///
/// assert_eq!(parse_selection(" 2 ", 3).unwrap(), 2);
/// assert!(parse_selection("4", 3).is_err());
/// assert!(parse_selection("two", 3).is_err());
/// ```
pub fn parse_selection(input: &str, count: usize) -> Result<usize> {
    let trimmed = input.trim();
    let choice: i64 = match trimmed.parse() {
        Ok(n) => n,
        Err(_) => match overflow_sign(trimmed) {
            Some(negative) => {
                return Err(SmenuError::InvalidChoice {
                    choice: if negative { i64::MIN } else { i64::MAX },
                    max: count,
                })
            }
            None => {
                return Err(SmenuError::InvalidInput {
                    input: trimmed.to_string(),
                })
            }
        },
    };

    match usize::try_from(choice) {
        Ok(n) if (1..=count).contains(&n) => Ok(n),
        _ => Err(SmenuError::InvalidChoice {
            choice,
            max: count,
        }),
    }
}

/// For an optionally signed run of ASCII digits, whether it is negative.
fn overflow_sign(text: &str) -> Option<bool> {
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    (!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())).then_some(negative)
}

/// Read one line, a byte at a time, without consuming anything after `\n`.
///
/// Whatever follows the answer stays in `input` for the launched script.
/// Returns `None` at end of input with nothing read.
fn read_line_unbuffered<R: Read>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut bytes = Vec::new();
    let mut seen_any = false;

    for byte in input.bytes() {
        let byte = byte?;
        seen_any = true;
        if byte == b'\n' {
            break;
        }
        bytes.push(byte);
    }

    Ok(seen_any.then(|| String::from_utf8_lossy(&bytes).into_owned()))
}

/// Show the prompt on `output`, read one line from `input` and validate it.
///
/// There is no retry: whatever comes back is final. End of input counts as
/// invalid input. `input` is read one byte at a time, so pass an unbuffered
/// handle when the rest of the stream belongs to the launched script.
///
/// # Errors
///
/// Returns a selection error as for [`parse_selection`], or an I/O error if
/// the prompt cannot be written or the line cannot be read.
pub fn read_selection<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    count: usize,
) -> Result<usize> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    match read_line_unbuffered(input)? {
        Some(line) => parse_selection(&line, count),
        None => {
            // Keep the terminal tidy when stdin closes without a newline
            writeln!(output)?;
            Err(SmenuError::InvalidInput {
                input: String::new(),
            })
        }
    }
}
