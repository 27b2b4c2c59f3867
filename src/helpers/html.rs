//! HTML and text helper functions

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `\w` in the ASCII sense
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters with distinct upper and lower case forms
fn is_cased(c: char) -> bool {
    c.to_uppercase().ne(c.to_lowercase())
}

/// Shorten text to at most `length` characters without breaking a word,
/// appending `omission` when anything was cut. Trailing punctuation before
/// the cut is dropped, and a single word longer than `length` leaves only
/// the omission.
///
/// # Examples
/// ```ignore
/// prune("Hello, wonderful world", 12, "…") // -> "Hello…"
/// prune("Supercalifragilistic", 5, "…")   // -> "…"
/// ```
pub fn prune(s: &str, length: usize, omission: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= length {
        return s.to_string();
    }

    // One extra char tells us whether the cut lands inside a word.
    let mut template: Vec<char> = chars[..=length].to_vec();

    // The trailing run of non-word chars followed by word chars is masked:
    // cased letters become 'A', everything else a space.
    let mut tail = template.len();
    while tail > 0 && is_word_char(template[tail - 1]) {
        tail -= 1;
    }
    while tail > 0 && !is_word_char(template[tail - 1]) {
        tail -= 1;
    }
    for c in &mut template[tail..] {
        *c = if is_cased(*c) { 'A' } else { ' ' };
    }

    let n = template.len();
    if n >= 2 && is_word_char(template[n - 2]) && is_word_char(template[n - 1]) {
        while template.last().is_some_and(|c| !c.is_whitespace()) {
            template.pop();
        }
        while template.last().is_some_and(|c| c.is_whitespace()) {
            template.pop();
        }
    } else {
        template.pop();
        while template.last().is_some_and(|c| c.is_whitespace()) {
            template.pop();
        }
    }

    let kept = template.len();
    if kept + omission.chars().count() > chars.len() {
        return s.to_string();
    }
    let mut out: String = chars[..kept].iter().collect();
    out.push_str(omission);
    out
}
