//! Text normalization for comparing expected and actual output.

/// Rewrite Windows (`\r\n`, `\n\r`) and legacy Mac (`\r`) line endings as
/// `\n`. An absent input gives an empty string.
///
/// ```
/// use valuekit::testkit::normalize::new_lines;
///
/// assert_eq!(new_lines(Some("a\r\nb\rc")), "a\nb\nc");
/// assert_eq!(new_lines(None), "");
/// ```
pub fn new_lines(input: Option<&str>) -> String {
    let Some(input) = input else {
        return String::new();
    };

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            // A line feed absorbs one carriage return on each side.
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                chars.next_if_eq(&'\r');
                out.push('\n');
            }
            '\n' => {
                chars.next_if_eq(&'\r');
                out.push('\n');
            }
            '\r' => out.push('\n'),
            c => out.push(c),
        }
    }
    out
}

/// Replace every tab with `width` spaces. A width of zero or less removes
/// tabs. An absent input gives an empty string.
pub fn tabs_to_spaces(input: Option<&str>, width: i32) -> String {
    let Some(input) = input else {
        return String::new();
    };
    let spaces = " ".repeat(usize::try_from(width).unwrap_or(0));
    input.replace('\t', &spaces)
}
