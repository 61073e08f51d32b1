// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting strings into literal and placeholder segments

/// A piece of a string value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied through unchanged
    Literal(&'a str),
    /// The expression between `${` and its matching `}`
    Placeholder(&'a str),
}

impl Segment<'_> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Segment::Placeholder(_))
    }
}

/// Split a string into literal and placeholder segments, in order.
///
/// Braces inside a placeholder are depth-tracked, so `${a, {b}}` is one
/// placeholder with expression `a, {b}`. A `${` that never closes is kept
/// as literal text and scanning continues after it.
pub fn parse_segments(input: &str) -> Vec<Segment<'_>> {
    let bytes = input.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes[i] != b'$' || bytes[i + 1] != b'{' {
            i += 1;
            continue;
        }

        match find_close(bytes, i + 2) {
            Some(close) => {
                if literal_start < i {
                    segments.push(Segment::Literal(&input[literal_start..i]));
                }
                segments.push(Segment::Placeholder(&input[i + 2..close]));
                i = close + 1;
                literal_start = i;
            }
            None => i += 2,
        }
    }

    if literal_start < input.len() {
        segments.push(Segment::Literal(&input[literal_start..]));
    }

    segments
}

// `$`, `{` and `}` are ASCII, so every index returned here is a char boundary.
fn find_close(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (offset, byte) in bytes.get(start..)?.iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + offset);
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
