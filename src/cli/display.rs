// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the nestcheck CLI.
//!
//! Verdict lines go to stdout as plain `validate("...") -> VALID` text, colored
//! only when stdout is a TTY and `NO_COLOR` is unset. The palette is OneDark,
//! or One Light when `NESTCHECK_THEME=light` or `COLORFGBG` reports a light
//! background.

use std::sync::OnceLock;

use nestcheck::{FixtureFailure, Verdict, VerificationReport};

/// Width between the │ borders of the report box.
pub const BOX_WIDTH: usize = 72;

/// Inputs longer than this are elided in verdict lines.
pub const ELIDE_AFTER: usize = 60;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Gray,
}

type Rgb = (u8, u8, u8);

/// red, green, yellow, blue, gray
const ONE_DARK: [Rgb; 5] = [
    (224, 108, 117),
    (152, 195, 121),
    (229, 192, 123),
    (97, 175, 239),
    (92, 99, 112),
];

const ONE_LIGHT: [Rgb; 5] = [
    (228, 86, 73),
    (80, 161, 79),
    (193, 132, 1),
    (64, 120, 242),
    (160, 161, 167),
];

fn light_background() -> bool {
    static LIGHT: OnceLock<bool> = OnceLock::new();
    *LIGHT.get_or_init(|| {
        if let Ok(theme) = std::env::var("NESTCHECK_THEME") {
            return theme.eq_ignore_ascii_case("light");
        }
        // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
            .is_some_and(|bg| bg >= 7 && bg != 8)
    })
}

fn escape(color: Color) -> String {
    let palette = if light_background() {
        &ONE_LIGHT
    } else {
        &ONE_DARK
    };
    let (r, g, b) = palette[color as usize];
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

/// `text` in `color`, optionally bold. Plain text when colors are off.
pub fn paint(color: Color, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    format!("{}{}{}{}", if bold { BOLD } else { "" }, escape(color), text, RESET)
}

/// Length as seen on screen, skipping ANSI escapes.
fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    s.chars()
        .filter(|&c| match (in_escape, c) {
            (_, '\x1b') => {
                in_escape = true;
                false
            }
            (true, 'm') => {
                in_escape = false;
                false
            }
            (escaped, _) => !escaped,
        })
        .count()
}

// ═══════════════════════════════════════════════════════════════════════════
// VERDICT LINES
// ═══════════════════════════════════════════════════════════════════════════

/// Debug-quoted input, elided in the middle when long.
pub fn quoted_input(input: &str) -> String {
    let count = input.chars().count();
    if count <= ELIDE_AFTER {
        return format!("{:?}", input);
    }
    let head: String = input.chars().take(ELIDE_AFTER / 2).collect();
    let tail: String = input.chars().skip(count - ELIDE_AFTER / 4).collect();
    format!("{:?}…{:?} ({} chars)", head, tail, count)
}

pub fn verdict_badge(verdict: Verdict) -> String {
    let color = if verdict.is_valid() {
        Color::Green
    } else {
        Color::Red
    };
    paint(color, true, verdict.as_str())
}

/// `validate("{[()()]}") -> VALID`
pub fn verdict_line(input: &str, verdict: Verdict) -> String {
    format!("validate({}) -> {}", quoted_input(input), verdict_badge(verdict))
}

/// `validate("\u{fffd}") -> error: ...`
pub fn error_line(lossy_input: &str, error: &dyn std::fmt::Display) -> String {
    format!(
        "validate({}) -> {} {}",
        quoted_input(lossy_input),
        paint(Color::Yellow, true, "error:"),
        error
    )
}

/// Red bold `error:` prefix for stderr messages.
pub fn error_prefix() -> String {
    paint(Color::Red, true, "error:")
}

// ═══════════════════════════════════════════════════════════════════════════
// VERIFY REPORT
// ═══════════════════════════════════════════════════════════════════════════

fn boxed(content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let bar = paint(Color::Gray, false, "│");
    format!("{}{}{}{}", bar, content, " ".repeat(pad), bar)
}

/// `┌─ LABEL ───┐` when `first`, `├─ LABEL ───┤` otherwise.
fn rule(label: &str, first: bool) -> String {
    let (left, right) = if first { ('┌', '┐') } else { ('├', '┤') };
    let title = format!("─ {} ", paint(Color::Blue, true, label));
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&title)));
    format!(
        "{}{}{}",
        paint(Color::Gray, false, &left.to_string()),
        title,
        paint(Color::Gray, false, &format!("{}{}", fill, right))
    )
}

fn failure_row(failure: &FixtureFailure) -> String {
    format!(
        " {} {} got {}",
        paint(Color::Red, false, "✗"),
        failure.fixture.describe(),
        verdict_badge(failure.actual)
    )
}

/// Lines of the `nestcheck verify` summary box.
pub fn report_lines(sources: &[String], report: &VerificationReport) -> Vec<String> {
    let mut lines = vec![rule("FIXTURES", true)];
    lines.extend(sources.iter().map(|source| boxed(&format!(" {}", source))));

    lines.push(rule("PROVENANCE", false));
    lines.extend(
        report
            .by_provenance
            .iter()
            .map(|(label, count)| boxed(&format!(" {:<14}{:>8}", label, count))),
    );

    let failed = report.failures.len();
    lines.push(rule("RESULT", false));
    lines.push(boxed(&format!(
        " {} passed, {} failed, {} total",
        paint(Color::Green, true, &report.passed.to_string()),
        paint(
            if failed == 0 { Color::Gray } else { Color::Red },
            failed > 0,
            &failed.to_string()
        ),
        report.total
    )));

    if failed > 0 {
        lines.push(rule("FAILURES", false));
        lines.extend(report.failures.iter().map(|f| boxed(&failure_row(f))));
    }
    lines.push(paint(
        Color::Gray,
        false,
        &format!("└{}┘", "─".repeat(BOX_WIDTH)),
    ));
    lines
}

pub fn print_report(sources: &[String], report: &VerificationReport) {
    for line in report_lines(sources, report) {
        println!("{}", line);
    }
}
