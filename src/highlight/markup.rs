// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markup-aware text model for highlighting.
//!
//! Verse text can arrive with markup already in it (`<i>`, `<b>`, a
//! `<mark>` from an earlier pass). Highlighting must only touch visible
//! text, so the input is split into tags and visible *units*. A unit is one
//! character or one entity (`&amp;` is a single visible `&`).
//!
//! Offsets used by the highlighter are unit indices. Tags sit between units
//! and never count toward window lengths.
//!
//! Rendering keeps tags balanced: a window that starts inside `<i>…</i>`
//! re-opens `<i>` at its start and closes it at its end.

use crate::utils::normalize_char;

/// Emphasis wrapper emitted around matches.
pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";
const MARK_NAME: &str = "mark";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum TagKind {
    Open,
    Close,
    /// Self-closing, void, comment, or declaration: no effect on nesting.
    Standalone,
}

#[derive(Debug, Clone)]
struct Tag {
    raw: String,
    name: String,
    kind: TagKind,
}

impl Tag {
    fn parse(raw: &str) -> Self {
        let inner = raw.trim_start_matches('<').trim_end_matches('>');
        if inner.starts_with('!') || inner.starts_with('?') {
            return Self::standalone(raw);
        }
        let (closing, body) = match inner.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, inner),
        };
        let name: String = body
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect::<String>()
            .to_ascii_lowercase();
        let kind = if closing {
            TagKind::Close
        } else if body.trim_end().ends_with('/') || VOID_ELEMENTS.contains(&name.as_str()) {
            TagKind::Standalone
        } else {
            TagKind::Open
        };
        Self {
            raw: raw.to_string(),
            name,
            kind,
        }
    }

    fn standalone(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            name: String::new(),
            kind: TagKind::Standalone,
        }
    }
}

/// One visible character (or entity).
#[derive(Debug, Clone)]
struct Unit {
    /// HTML-safe output for this unit.
    display: String,
    /// Normalized form used for matching; may be empty.
    fold: String,
    /// Already inside an existing `<mark>`.
    in_mark: bool,
}

#[derive(Debug, Clone)]
enum Piece {
    Tag(Tag),
    Unit(Unit),
}

/// Open-element stack, used while parsing and rendering.
#[derive(Debug, Default, Clone)]
struct TagStack(Vec<Tag>);

impl TagStack {
    fn apply(&mut self, tag: &Tag) {
        match tag.kind {
            TagKind::Open => self.0.push(tag.clone()),
            TagKind::Close => {
                // Stray closers (no matching opener) are ignored.
                if let Some(pos) = self.0.iter().rposition(|t| t.name == tag.name) {
                    self.0.truncate(pos);
                }
            }
            TagKind::Standalone => {}
        }
    }

    fn in_mark(&self) -> bool {
        self.0.iter().any(|t| t.name == MARK_NAME)
    }

    fn reopen(&self, out: &mut String) {
        for tag in &self.0 {
            out.push_str(&tag.raw);
        }
    }

    fn close_all(&self, out: &mut String) {
        for tag in self.0.iter().rev() {
            out.push_str("</");
            out.push_str(&tag.name);
            out.push('>');
        }
    }
}

/// Parsed text: tags plus visible units.
#[derive(Debug, Clone)]
pub struct Markup {
    pieces: Vec<Piece>,
    /// Piece index of each unit.
    unit_pieces: Vec<usize>,
}

impl Markup {
    pub fn parse(text: &str) -> Self {
        let mut pieces = Vec::new();
        let mut unit_pieces = Vec::new();
        let mut stack = TagStack::default();
        let mut rest = text;

        while let Some(c) = rest.chars().next() {
            if c == '<' {
                if let Some(end) = rest.find('>') {
                    let candidate = &rest[..=end];
                    if looks_like_tag(candidate) {
                        let tag = Tag::parse(candidate);
                        stack.apply(&tag);
                        pieces.push(Piece::Tag(tag));
                        rest = &rest[end + 1..];
                        continue;
                    }
                }
            }

            let (display, fold, consumed) = if c == '&' {
                match parse_entity(rest) {
                    Some((entity, decoded)) => {
                        let fold = decoded.map(normalize_char).unwrap_or_default();
                        (entity.to_string(), fold, entity.len())
                    }
                    None => ("&amp;".to_string(), "&".to_string(), 1),
                }
            } else {
                (escape_char(c), normalize_char(c), c.len_utf8())
            };

            unit_pieces.push(pieces.len());
            pieces.push(Piece::Unit(Unit {
                display,
                fold,
                in_mark: stack.in_mark(),
            }));
            rest = &rest[consumed..];
        }

        Self {
            pieces,
            unit_pieces,
        }
    }

    /// Number of visible units.
    pub fn len(&self) -> usize {
        self.unit_pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unit_pieces.is_empty()
    }

    /// Folded characters with the unit each one came from.
    pub fn folded(&self) -> (Vec<char>, Vec<usize>) {
        let mut chars = Vec::with_capacity(self.len());
        let mut owners = Vec::with_capacity(self.len());
        for (unit_idx, &piece_idx) in self.unit_pieces.iter().enumerate() {
            if let Piece::Unit(unit) = &self.pieces[piece_idx] {
                for c in unit.fold.chars() {
                    chars.push(c);
                    owners.push(unit_idx);
                }
            }
        }
        (chars, owners)
    }

    /// Render everything, wrapping highlighted units.
    pub fn render_all(&self, highlighted: &[bool]) -> String {
        let mut out = String::new();
        let mut unit_idx = 0;
        let mut marking = false;
        for piece in &self.pieces {
            emit_piece(piece, &mut unit_idx, highlighted, &mut marking, &mut out);
        }
        if marking {
            out.push_str(MARK_CLOSE);
        }
        out
    }

    /// Render units `start..end` with balanced tags.
    ///
    /// Elements open at `start` are re-opened first; elements still open at
    /// `end` are closed last.
    pub fn render_range(&self, start: usize, end: usize, highlighted: &[bool]) -> String {
        let end = end.min(self.len());
        if start >= end {
            return String::new();
        }
        let first_piece = self.unit_pieces[start];
        let last_piece = self.unit_pieces[end - 1];

        let mut stack = TagStack::default();
        for piece in &self.pieces[..first_piece] {
            if let Piece::Tag(tag) = piece {
                stack.apply(tag);
            }
        }

        let mut out = String::new();
        stack.reopen(&mut out);

        let mut unit_idx = start;
        let mut marking = false;
        for piece in &self.pieces[first_piece..=last_piece] {
            if let Piece::Tag(tag) = piece {
                stack.apply(tag);
            }
            emit_piece(piece, &mut unit_idx, highlighted, &mut marking, &mut out);
        }
        if marking {
            out.push_str(MARK_CLOSE);
        }
        stack.close_all(&mut out);
        out
    }
}

fn emit_piece(
    piece: &Piece,
    unit_idx: &mut usize,
    highlighted: &[bool],
    marking: &mut bool,
    out: &mut String,
) {
    match piece {
        Piece::Tag(tag) => {
            // Never let our <mark> straddle an existing tag.
            if *marking {
                out.push_str(MARK_CLOSE);
                *marking = false;
            }
            out.push_str(&tag.raw);
        }
        Piece::Unit(unit) => {
            let want = highlighted.get(*unit_idx).copied().unwrap_or(false) && !unit.in_mark;
            if want != *marking {
                out.push_str(if want { MARK_OPEN } else { MARK_CLOSE });
                *marking = want;
            }
            out.push_str(&unit.display);
            *unit_idx += 1;
        }
    }
}

/// `<` followed by a letter, `/`, `!`, or `?`, with no nested `<`.
fn looks_like_tag(candidate: &str) -> bool {
    let inner = &candidate[1..];
    let starts_ok = inner
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'));
    starts_ok && !inner.contains('<')
}

/// Recognize `&name;`, `&#123;`, or `&#x1F;` at the start of `s`.
///
/// Returns the raw entity and the character it stands for, when known.
fn parse_entity(s: &str) -> Option<(&str, Option<char>)> {
    let end = s.char_indices().take(12).find(|(_, c)| *c == ';')?.0;
    let entity = &s[..=end];
    let body = &entity[1..end];
    if body.is_empty() {
        return None;
    }

    let decoded = if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        Some(char::from_u32(code)?)
    } else if body.chars().all(|c| c.is_ascii_alphanumeric()) {
        match body {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some(' '),
            _ => None,
        }
    } else {
        return None;
    };
    Some((entity, decoded))
}

fn escape_char(c: char) -> String {
    match c {
        '&' => "&amp;".to_string(),
        '<' => "&lt;".to_string(),
        '>' => "&gt;".to_string(),
        '"' => "&quot;".to_string(),
        _ => c.to_string(),
    }
}
