//! Splitting an interactive input line into words.

use crate::error::CliError;

/// Split a line on whitespace, keeping quoted text together.
///
/// Single and double quotes group words; a backslash escapes the next
/// character outside single quotes.
pub fn split_words(line: &str) -> Result<Vec<String>, CliError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => current.push(c),
            (_, '\\') => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| CliError::Arguments("line ends with a lone '\\'".to_string()))?;
                current.push(escaped);
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(CliError::Arguments(format!("missing closing {q}")));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
