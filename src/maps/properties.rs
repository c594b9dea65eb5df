// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Reader for the flat `key=value` map format.
//!
//! Accepts the subset of the Java properties syntax that hand-authored maze
//! files use: `#`/`!` comments, `=`, `:` or whitespace separators, backslash
//! line continuations, and backslash escapes (`\t`, `\n`, `\r`, `\f`,
//! `\uXXXX`, or any other escaped character taken literally) in keys and values.

use super::MazeError;

/// Parses `text` into its key/value entries in file order.
pub fn parse_properties(text: &str) -> Result<Vec<(String, String)>, MazeError> {
    let mut entries = Vec::new();
    let mut lines = text.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let line_number = index + 1;
        let first = raw.trim_start();
        if first.is_empty() || first.starts_with('#') || first.starts_with('!') {
            continue;
        }

        let mut logical = String::from(first);
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        if key.is_empty() {
            return Err(MazeError::Parse {
                line: line_number,
                reason: format!("missing key in `{}`", raw.trim()),
            });
        }
        entries.push((key, value));
    }

    Ok(entries)
}

// An odd number of trailing backslashes means the last one escapes the newline.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (String, String) {
    let mut key_end = line.len();
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if c.is_whitespace() => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    // Skip whitespace, at most one separator, then whitespace again.
    let (raw_key, rest) = line.split_at(key_end);
    let rest = rest.trim_start();
    let rest = rest.strip_prefix(&['=', ':'][..]).unwrap_or(rest).trim_start();

    (unescape(raw_key), unescape(rest).trim_end().to_string())
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.clone().take(4).collect();
                let decoded = Some(&hex)
                    .filter(|h| h.len() == 4 && h.chars().all(|c| c.is_ascii_hexdigit()))
                    .and_then(|h| u32::from_str_radix(h, 16).ok())
                    .and_then(char::from_u32);
                match decoded {
                    Some(decoded) => {
                        out.push(decoded);
                        chars.nth(3);
                    }
                    // Malformed escape: keep the `u` and read on.
                    None => out.push('u'),
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_all_separator_styles() {
        let entries = parse_properties("0,0=1\n1,0 : 2\n2,0 3\n").unwrap();
        assert_eq!(
            entries,
            vec![
                ("0,0".to_string(), "1".to_string()),
                ("1,0".to_string(), "2".to_string()),
                ("2,0".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "# level one\n\n   ! also a comment\n4,5=0\n";
        let entries = parse_properties(text).unwrap();
        assert_eq!(entries, vec![("4,5".to_string(), "0".to_string())]);
    }

    #[test]
    fn joins_continued_lines() {
        let entries = parse_properties("3,3=\\\n    4\n").unwrap();
        assert_eq!(entries, vec![("3,3".to_string(), "4".to_string())]);
    }

    #[test]
    fn separator_without_key_is_an_error() {
        let err = parse_properties("0,0=1\n=5\n").unwrap_err();
        match err {
            MazeError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn windows_line_endings_are_trimmed() {
        let entries = parse_properties("1,2=5\r\n").unwrap();
        assert_eq!(entries, vec![("1,2".to_string(), "5".to_string())]);
    }

    #[test]
    fn escapes_are_decoded_in_keys_and_values() {
        let entries = parse_properties("0\\,0=\\u0031\n1\\:0=\\3\n2,0=\\u12\n").unwrap();
        assert_eq!(
            entries,
            vec![
                ("0,0".to_string(), "1".to_string()),
                ("1:0".to_string(), "3".to_string()),
                ("2,0".to_string(), "u12".to_string()),
            ]
        );
    }

    #[test]
    fn escaped_separator_stays_in_key() {
        let entries = parse_properties("a\\=b=5\nkey\\ name value\n").unwrap();
        assert_eq!(
            entries,
            vec![
                ("a=b".to_string(), "5".to_string()),
                ("key name".to_string(), "value".to_string()),
            ]
        );
    }
}
