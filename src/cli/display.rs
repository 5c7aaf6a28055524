// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the merx CLI.
//!
//! Truecolor output themed to the terminal background: OneDark on dark
//! terminals, One Light on light ones. Box-drawn sections, stock badges,
//! match-kind labels, score and timing colors.
//!
//! # Theme detection order
//!
//! 1. `MERX_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS system appearance
//! 4. dark
//!
//! All styling collapses to plain text when stdout is not a terminal or
//! `NO_COLOR` is set.

use std::sync::OnceLock;

use merx::{MatchKind, StockStatus};

/// Interior width of the output boxes, border glyphs excluded.
pub const BOX_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// A truecolor value.
pub type Rgb = (u8, u8, u8);

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

/// The colors the CLI uses, resolved once per process from the theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub red: Rgb,
    pub green: Rgb,
    pub yellow: Rgb,
    pub blue: Rgb,
    pub cyan: Rgb,
    pub gray: Rgb,
    pub bright_green: Rgb,
    pub bright_cyan: Rgb,
}

/// OneDark (joshdick/onedark.vim).
const ONEDARK: Palette = Palette {
    red: (224, 108, 117),
    green: (152, 195, 121),
    yellow: (229, 192, 123),
    blue: (97, 175, 239),
    cyan: (86, 182, 194),
    gray: (92, 99, 112),
    bright_green: (166, 226, 46),
    bright_cyan: (102, 217, 239),
};

/// One Light (sonph/onehalf).
const ONE_LIGHT: Palette = Palette {
    red: (228, 86, 73),
    green: (80, 161, 79),
    yellow: (193, 132, 1),
    blue: (64, 120, 242),
    cyan: (1, 132, 188),
    gray: (160, 161, 167),
    bright_green: (68, 140, 39),
    bright_cyan: (1, 112, 158),
};

fn background_is_light() -> bool {
    if let Ok(choice) = std::env::var("MERX_THEME") {
        match choice.to_lowercase().as_str() {
            "light" | "l" => return true,
            "dark" | "d" => return false,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background indices 7+ (except gray 8) are light.
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(index) = bg.parse::<u8>() {
                return index >= 7 && index != 8;
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        // AppleInterfaceStyle reads "Dark" in dark mode and errors otherwise.
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            if output.status.success() {
                return !String::from_utf8_lossy(&output.stdout).contains("Dark");
            }
        }
    }

    false
}

/// The active palette, detected once and cached.
pub fn palette() -> &'static Palette {
    static PALETTE: OnceLock<Palette> = OnceLock::new();
    PALETTE.get_or_init(|| {
        if background_is_light() {
            ONE_LIGHT
        } else {
            ONEDARK
        }
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// STYLING
// ═══════════════════════════════════════════════════════════════════════════

/// True when stdout is a terminal and `NO_COLOR` is unset.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn escape((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

fn wrap(prefix: &str, color: Rgb, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", prefix, escape(color), text, RESET)
    } else {
        text.to_string()
    }
}

/// Colored text.
pub fn tint(color: Rgb, text: &str) -> String {
    wrap("", color, text)
}

/// Bold colored text.
pub fn tint_bold(color: Rgb, text: &str) -> String {
    wrap(BOLD, color, text)
}

/// Dimmed text, palette-independent.
pub fn dim(text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", DIM, text, RESET)
    } else {
        text.to_string()
    }
}

/// Display width of `s` with ANSI escape sequences skipped.
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for escape_char in chars.by_ref() {
                if escape_char == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

fn padding_for(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(visible_len(s)))
}

/// Left-pad to a visible width; styled strings pad correctly.
pub fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", padding_for(s, width), s)
}

/// Right-pad to a visible width; styled strings pad correctly.
pub fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, padding_for(s, width))
}

/// Cap `text` at `max_len` characters, ellipsized when over.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════
//
// Two frame styles: light (gray │─) for result sections, double (blue ║═)
// for the inspect summary panel. All edges share one rule printer.

fn rule(left: char, fill: char, right: char, border: Rgb, label: Option<&str>) {
    let frame = tint(border, &left.to_string());
    let close = tint(border, &right.to_string());
    match label {
        Some(label) => {
            let tag = format!("{} {} ", fill, tint_bold(palette().cyan, label));
            let run = BOX_WIDTH.saturating_sub(visible_len(&tag));
            let trail: String = std::iter::repeat(fill).take(run).collect();
            println!("{}{}{}{}", frame, tag, tint(border, &trail), close);
        }
        None => {
            let run: String = std::iter::repeat(fill).take(BOX_WIDTH).collect();
            println!("{}{}{}", frame, tint(border, &run), close);
        }
    }
}

fn boxed(vertical: char, border: Rgb, content: &str) {
    let edge = tint(border, &vertical.to_string());
    println!("{}{}{}{}", edge, content, padding_for(content, BOX_WIDTH), edge);
}

/// `┌─ LABEL ───┐`
pub fn section_top(label: &str) {
    rule('┌', '─', '┐', palette().gray, Some(label));
}

/// `├─ LABEL ───┤`
pub fn section_mid(label: &str) {
    rule('├', '─', '┤', palette().gray, Some(label));
}

/// `└───────────┘`
pub fn section_bot() {
    rule('└', '─', '┘', palette().gray, None);
}

/// `│ content   │`
pub fn row(content: &str) {
    boxed('│', palette().gray, content);
}

/// `╔═══════════╗`
pub fn panel_top() {
    rule('╔', '═', '╗', palette().blue, None);
}

/// `╠═══════════╣`
pub fn panel_divider() {
    rule('╠', '═', '╣', palette().blue, None);
}

/// `╚═══════════╝`
pub fn panel_bot() {
    rule('╚', '═', '╝', palette().blue, None);
}

/// `║ content   ║`
pub fn panel_row(content: &str) {
    boxed('║', palette().blue, content);
}

/// `║   TITLE   ║` (centered, bold)
pub fn panel_title(text: &str) {
    let styled = tint_bold(palette().bright_cyan, text);
    let span = BOX_WIDTH.saturating_sub(visible_len(&styled));
    let left = span / 2;
    panel_row(&format!(
        "{}{}{}",
        " ".repeat(left),
        styled,
        " ".repeat(span - left)
    ));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded stock badge.
pub fn stock_badge(status: StockStatus) -> String {
    let (label, color) = match status {
        StockStatus::InStock => ("[STOC]", palette().green),
        StockStatus::LowStock => ("[PUTIN]", palette().yellow),
        StockStatus::OutOfStock => ("[EPUIZAT]", palette().red),
    };
    tint(color, label)
}

/// Color-coded match kind label.
pub fn match_kind_label(kind: MatchKind) -> String {
    let color = match kind {
        MatchKind::CodeExact => palette().bright_green,
        MatchKind::CodePrefix => palette().green,
        MatchKind::Exact => palette().bright_cyan,
        MatchKind::Start => palette().blue,
        MatchKind::Contains => palette().gray,
    };
    tint(color, kind.as_str())
}

/// Color-coded score: code-tier scores land at 500+, strong keyword matches
/// above 150, anything under 50 is a weak signal.
pub fn score_value(score: f64) -> String {
    let color = if score >= 500.0 {
        palette().bright_green
    } else if score >= 150.0 {
        palette().green
    } else if score >= 50.0 {
        palette().yellow
    } else {
        palette().gray
    };
    tint(color, &format!("{:>7.1}", score))
}

/// Color-coded query latency in milliseconds.
pub fn timing_ms(value: f64) -> String {
    let color = if value < 5.0 {
        palette().green
    } else if value < 20.0 {
        palette().yellow
    } else {
        palette().red
    };
    tint(color, &format!("{:.3}", value))
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
