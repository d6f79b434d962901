//! Greedy word wrapping that preserves the spacing inside each line.

const TAB_SIZE: usize = 8;

fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{0b}'
}

/// Replace each tab with spaces up to the next multiple of [`TAB_SIZE`].
fn expand_tabs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let fill = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(fill));
                column += fill;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Split `text` into alternating runs of whitespace and non-whitespace.
fn chunks(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (i, c) in text.char_indices() {
        let space = is_space(c);
        match in_space {
            Some(prev) if prev != space => {
                out.push(&text[start..i]);
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

fn is_blank(chunk: &str) -> bool {
    chunk.chars().all(is_space)
}

/// Wrap `text` into lines of at most `width` characters.
///
/// Tabs are expanded first. Lines break only between runs of whitespace.
/// Whitespace at the end of a line, or at the start of any line after the
/// first, is dropped; whitespace inside a line is kept as written. A run
/// longer than `width` on its own is split across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let text = expand_tabs(text);
    let mut pending: Vec<String> = chunks(&text).into_iter().rev().map(String::from).collect();
    let mut lines: Vec<String> = Vec::new();

    while !pending.is_empty() {
        let mut line: Vec<String> = Vec::new();
        let mut line_len = 0;

        if !lines.is_empty() && pending.last().is_some_and(|c| is_blank(c)) {
            pending.pop();
        }

        while let Some(chunk) = pending.last() {
            let len = chunk.chars().count();
            if line_len + len > width {
                break;
            }
            line_len += len;
            line.extend(pending.pop());
        }

        if let Some(chunk) = pending.last_mut() {
            let room = width - line_len;
            if room > 0 && chunk.chars().count() > width {
                let split = chunk
                    .char_indices()
                    .nth(room)
                    .map_or(chunk.len(), |(i, _)| i);
                let rest = chunk.split_off(split);
                line.push(std::mem::replace(chunk, rest));
            }
        }

        if line.last().is_some_and(|c| is_blank(c)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.concat());
        }
    }

    lines
}
