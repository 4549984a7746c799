//! Shell-style field splitting, for lines that quote their fields.

use crate::error::Result;

/// Splits a line the way a POSIX shell splits words, honouring single and
/// double quotes and backslash escapes.
///
/// # Errors
///
/// Returns [`crate::error::Error::Tokenize`] for unterminated quotes or a
/// trailing escape.
///
/// # Examples
///
/// ```
/// use field_core::tokenize::tokenize;
///
/// let fields = tokenize(br#"removed 'My Documents/a b.txt'"#)?;
/// assert_eq!(fields, vec!["removed", "My Documents/a b.txt"]);
/// # Ok::<(), field_core::error::Error>(())
/// ```
pub fn tokenize(line: &[u8]) -> Result<Vec<String>> {
    let line = String::from_utf8_lossy(line);
    Ok(shell_words::split(&line)?)
}
