// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the suttafind CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Respects `NO_COLOR`
//! and falls back to plain text when stdout isn't a TTY.
//!
//! # Theme detection order
//!
//! 1. `SUTTAFIND_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use suttafind::highlight::{MARK_CLOSE, MARK_OPEN};
use suttafind::Category;

/// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SUTTAFIND_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (255, 215, 0);
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const BRIGHT_YELLOW: (u8, u8, u8) = (152, 104, 1);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            match theme() {
                Theme::Dark => rgb(onedark::$name),
                Theme::Light => rgb(onelight::$name),
            }
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(BRIGHT_YELLOW);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI escapes
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border, content, " ".repeat(pad), border);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    section_line('┌', '┐', label);
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    section_line('├', '┤', label);
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

fn section_line(left: char, right: char, label: &str) {
    let colored_label = themed(CYAN, &[BOLD], label);
    let label_part = format!("─ {} ", colored_label);
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], &left.to_string()),
        label_part,
        themed(GRAY, &[], &format!("{}{}", "─".repeat(remaining), right))
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn category_badge(category: Category) -> String {
    let label = format!("[{}]", category);
    let color: fn() -> String = match category {
        Category::Sutta => GREEN,
        Category::Vinaya => BLUE,
        Category::Abhidhamma => MAGENTA,
    };
    themed(color, &[], &label)
}

/// Score with color: phrase matches (negative) bright, the rest graded.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>8.3}", score);
    let color: fn() -> String = if score < 0.0 {
        BRIGHT_YELLOW
    } else if score < 0.5 {
        GREEN
    } else if score < 1.0 {
        YELLOW
    } else {
        GRAY
    };
    themed(color, &[], &text)
}

/// Turn a highlighted HTML snippet into terminal text.
///
/// `<mark>` becomes bold yellow (or `[...]` without colors), other tags are
/// dropped, and the common entities are decoded.
pub fn render_snippet(html: &str) -> String {
    let (open, close) = if use_colors() {
        (format!("{}{}", BOLD, YELLOW()), RESET.to_string())
    } else {
        ("[".to_string(), "]".to_string())
    };

    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(c) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix(MARK_OPEN) {
            out.push_str(&open);
            rest = after;
        } else if let Some(after) = rest.strip_prefix(MARK_CLOSE) {
            out.push_str(&close);
            rest = after;
        } else if c == '<' {
            match rest.find('>') {
                Some(end) => rest = &rest[end + 1..],
                None => {
                    out.push(c);
                    rest = &rest[1..];
                }
            }
        } else if c == '&' {
            let (decoded, len) = decode_entity(rest);
            out.push_str(decoded);
            rest = &rest[len..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}

fn decode_entity(s: &str) -> (&str, usize) {
    const ENTITIES: [(&str, &str); 6] = [
        ("&amp;", "&"),
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&apos;", "'"),
        ("&nbsp;", " "),
    ];
    ENTITIES
        .iter()
        .find(|(entity, _)| s.starts_with(entity))
        .map(|(entity, decoded)| (*decoded, entity.len()))
        .unwrap_or(("&", 1))
}

/// Break text into lines of at most `width` visible chars, on spaces.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && visible_len(&line) + 1 + visible_len(word) > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
