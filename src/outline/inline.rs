//! Inline markup stripping for raw heading text.
//!
//! Before slugging, heading text must be reduced to the plain text the
//! rendered tree will flatten to: links and images reduced to their label,
//! emphasis and code-span markers removed. This mirrors
//! [`dom::text::flatten_text`](crate::dom::text::flatten_text), which
//! concatenates only the inner text of inline nodes.

/// Strip inline markdown markup, keeping display text.
///
/// Handles code spans (`` `code` ``), links (`[label](url)`, `[label][ref]`),
/// images (`![alt](src)`), emphasis runs (`*`, `**`), strikethrough (`~~`),
/// and boundary underscores. Intraword underscores (`snake_case`) are kept:
/// they don't open emphasis, so the renderer keeps them too.
pub fn strip_inline_markup(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '`' => {
                let run = backtick_run(&chars, i);
                match find_closing_run(&chars, i + run, run) {
                    Some(close) => {
                        // Code span: inner text verbatim, markers dropped
                        out.extend(&chars[i + run..close]);
                        i = close + run;
                    }
                    None => {
                        // Unmatched backticks render literally
                        out.extend(&chars[i..i + run]);
                        i += run;
                    }
                }
            }
            '!' if chars.get(i + 1) == Some(&'[') => {
                // Image: drop the bang, the bracket logic handles the rest
                i += 1;
            }
            '[' => {
                // Label content is processed normally; just drop the bracket
                i += 1;
            }
            ']' => {
                i += 1;
                // Skip the destination or reference that follows the label
                if chars.get(i) == Some(&'(') {
                    if let Some(close) = find_char(&chars, i + 1, ')') {
                        i = close + 1;
                    }
                } else if chars.get(i) == Some(&'[') {
                    if let Some(close) = find_char(&chars, i + 1, ']') {
                        i = close + 1;
                    }
                }
            }
            '*' => i += 1,
            '~' if chars.get(i + 1) == Some(&'~') => i += 2,
            '_' => {
                let prev_word = i > 0 && chars[i - 1].is_alphanumeric();
                let next_word = chars.get(i + 1).is_some_and(|c| c.is_alphanumeric());
                if prev_word && next_word {
                    // Intraword underscore: literal text
                    out.push('_');
                }
                i += 1;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

fn backtick_run(chars: &[char], start: usize) -> usize {
    chars[start..].iter().take_while(|&&c| c == '`').count()
}

fn find_closing_run(chars: &[char], from: usize, run: usize) -> Option<usize> {
    let mut i = from;
    while i < chars.len() {
        if chars[i] == '`' {
            let len = backtick_run(chars, i);
            if len == run {
                return Some(i);
            }
            i += len;
        } else {
            i += 1;
        }
    }
    None
}

fn find_char(chars: &[char], from: usize, target: char) -> Option<usize> {
    chars[from..].iter().position(|&c| c == target).map(|p| from + p)
}
