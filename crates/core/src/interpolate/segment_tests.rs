// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use Segment::{Literal, Placeholder};

#[test]
fn plain_text_is_one_literal() {
    assert_eq!(parse_segments("no placeholders"), vec![Literal("no placeholders")]);
}

#[test]
fn empty_string_has_no_segments() {
    assert!(parse_segments("").is_empty());
}

#[test]
fn single_placeholder() {
    assert_eq!(parse_segments("${self:a.b}"), vec![Placeholder("self:a.b")]);
}

#[test]
fn interleaved_literals_and_placeholders() {
    assert_eq!(
        parse_segments("arn:${opt:region}:table/${self:service}-orders"),
        vec![
            Literal("arn:"),
            Placeholder("opt:region"),
            Literal(":table/"),
            Placeholder("self:service"),
            Literal("-orders"),
        ]
    );
}

#[test]
fn adjacent_placeholders() {
    assert_eq!(
        parse_segments("${a}${b}"),
        vec![Placeholder("a"), Placeholder("b")]
    );
}

#[test]
fn nested_braces_stay_in_expression() {
    assert_eq!(
        parse_segments("x${self:a, {b}}y"),
        vec![Literal("x"), Placeholder("self:a, {b}"), Literal("y")]
    );
}

#[test]
fn unclosed_placeholder_is_literal() {
    assert_eq!(parse_segments("cost ${oops"), vec![Literal("cost ${oops")]);
}

#[test]
fn unclosed_then_closed() {
    assert_eq!(
        parse_segments("${a ${b}"),
        vec![Literal("${a "), Placeholder("b")]
    );
}

#[test]
fn lone_braces_are_literal() {
    assert_eq!(parse_segments("{not} $ one}"), vec![Literal("{not} $ one}")]);
}

#[test]
fn multibyte_text_around_placeholder() {
    assert_eq!(
        parse_segments("héllo ${self:x} wörld"),
        vec![Literal("héllo "), Placeholder("self:x"), Literal(" wörld")]
    );
}
