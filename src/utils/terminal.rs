//! Terminal output sanitization
//!
//! History labels come back from a file the user (or anything else) can edit. Before a
//! label reaches the terminal, escape sequences and control characters are removed so
//! a tampered history file cannot move the cursor, recolor the screen or break a row
//! across lines.

/// Strip ANSI CSI sequences and control characters from a single-line label
///
/// # Examples
///
/// ```
/// use temp_converter::utils::terminal::sanitize_label;
///
/// assert_eq!(sanitize_label("\x1b[31m25°C\x1b[0m"), "25°C");
/// assert_eq!(sanitize_label("77°F\nrm -rf"), "77°F rm -rf");
/// ```
pub fn sanitize_label(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // CSI: ESC [ params final-letter
            if chars.peek() == Some(&'[') {
                chars.next();
                while let Some(next_ch) = chars.next() {
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        if matches!(ch, '\n' | '\r' | '\t') {
            result.push(' ');
        } else if !ch.is_control() {
            result.push(ch);
        }
    }

    result
}
