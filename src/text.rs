//! Sentence segmentation used by the rule-based generators.

/// Lazy iterator over the sentences of a piece of text.
///
/// A boundary sits after `.`, `!` or `?` when the next character is whitespace; the
/// whitespace run itself is dropped. The input is trimmed first, so an empty or blank input
/// yields exactly one empty sentence. Cloning the iterator restarts from the same position.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    rest: Option<&'a str>,
}

/// Split `text` into sentences.
pub fn sentences(text: &str) -> Sentences<'_> {
    Sentences {
        rest: Some(text.trim()),
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        let mut chars = rest.char_indices().peekable();
        while let Some((_, ch)) = chars.next() {
            if !matches!(ch, '.' | '!' | '?') {
                continue;
            }
            if let Some(&(next_idx, next)) = chars.peek() {
                if next.is_whitespace() {
                    self.rest = Some(rest[next_idx..].trim_start());
                    return Some(&rest[..next_idx]);
                }
            }
        }
        self.rest = None;
        Some(rest)
    }
}

impl std::iter::FusedIterator for Sentences<'_> {}

/// Return at most `max_chars` characters from the start of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
