// WHY: Single forward scan replacing a lookbehind split: a terminal mark followed by a
// whitespace run ends a sentence, and so does any run of newlines

use serde::Serialize;

/// One sentence cut out of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Position among the non-blank sentences of the document
    pub index: usize,
    /// 1-based line on which the sentence starts
    pub line: usize,
    pub text: String,
}

/// Borrowed slice of the scanned text before placeholders are restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSentence<'a> {
    pub line: usize,
    pub text: &'a str,
}

/// Split `text` into sentences
///
/// Boundaries are a character from `terminals` followed by one or more
/// whitespace characters (all consumed), or one or more `\n` (consumed).
/// The terminal mark stays with its sentence. Pieces that are empty or
/// whitespace-only are dropped.
pub fn split_sentences<'a>(text: &'a str, terminals: &[char]) -> Vec<RawSentence<'a>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut start_line = 1;
    let mut line = 1;
    let mut prev: Option<char> = None;

    let mut chars = text.char_indices().peekable();
    while let Some((pos, ch)) = chars.next() {
        let after_terminal = prev.is_some_and(|p| terminals.contains(&p));
        let whitespace_break = after_terminal && ch.is_whitespace();
        let newline_break = ch == '\n';

        if !(whitespace_break || newline_break) {
            prev = Some(ch);
            continue;
        }

        if ch == '\n' {
            line += 1;
        }
        let mut end = pos + ch.len_utf8();
        // A terminal-led break swallows the whole whitespace run, a bare newline break only newlines
        while let Some(&(next_pos, next)) = chars.peek() {
            let absorb = if whitespace_break { next.is_whitespace() } else { next == '\n' };
            if !absorb {
                break;
            }
            if next == '\n' {
                line += 1;
            }
            end = next_pos + next.len_utf8();
            chars.next();
        }

        push_piece(&mut sentences, &text[start..pos], start_line);
        start = end;
        start_line = line;
        prev = None;
    }

    push_piece(&mut sentences, &text[start..], start_line);
    sentences
}

fn push_piece<'a>(sentences: &mut Vec<RawSentence<'a>>, piece: &'a str, line: usize) {
    if !piece.trim().is_empty() {
        sentences.push(RawSentence { line, text: piece });
    }
}
