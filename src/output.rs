//! Terminal formatting for search results and grid advice.

use crate::grid::{CountSuggestion, GridLayout};
use crate::search::types::{ChainSearchSummary, Direction, SearchSummary};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

fn direction_label(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "forward",
        Direction::Reverse => "reverse",
    }
}

/// Print equidistant/sequence hits, one line per hit.
pub fn print_search_summary(summary: &SearchSummary, color: bool) -> io::Result<()> {
    let mut out = stdout(color);

    if summary.is_empty() {
        writeln!(out, "no hits")?;
        return Ok(());
    }

    for hit in &summary.hits {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(out, "{}", hit.term)?;
        out.reset()?;

        write!(out, "  start ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{}", hit.start_pos)?;
        out.reset()?;

        if hit.skip > 0 {
            write!(out, "  skip ")?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, "{}", hit.skip)?;
            out.reset()?;
        }

        writeln!(
            out,
            "  {}  positions {:?}",
            direction_label(hit.direction),
            hit.letter_positions
        )?;
    }

    writeln!(
        out,
        "{} hit(s) in {} letters",
        summary.len(),
        summary.source_text_length
    )?;
    Ok(())
}

/// Print chain paths with per-step intervals and intervening letters.
pub fn print_chain_summary(summary: &ChainSearchSummary, color: bool) -> io::Result<()> {
    let mut out = stdout(color);

    if summary.is_empty() {
        writeln!(out, "no chains")?;
        return Ok(());
    }

    for (i, path) in summary.paths.iter().enumerate() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(out, "chain {}", i + 1)?;
        out.reset()?;

        for step in &path.steps {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            write!(out, "  {}", step.letter)?;
            out.reset()?;
            write!(out, " @ {}", step.position)?;
            if step.interval > 0 {
                write!(out, "  +{}", step.interval)?;
            }
            if !step.intervening_letters.is_empty() {
                write!(out, "  [{}]", step.intervening_letters)?;
            }
            writeln!(out)?;
        }
    }

    writeln!(
        out,
        "{} chain(s) in {} letters",
        summary.len(),
        summary.source_text_length
    )?;
    Ok(())
}

/// Print candidate grid layouts, most square first.
pub fn print_grid_layouts(layouts: &[GridLayout], color: bool) -> io::Result<()> {
    let mut out = stdout(color);

    if layouts.is_empty() {
        writeln!(out, "no layouts")?;
        return Ok(());
    }

    for layout in layouts {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{:>4} x {:<4}", layout.columns, layout.rows)?;
        out.reset()?;
        if layout.exact {
            writeln!(out)?;
        } else {
            writeln!(out, " (ragged last row)")?;
        }
    }
    Ok(())
}

/// Print nearby letter counts ranked by how well they factor.
pub fn print_count_suggestions(suggestions: &[CountSuggestion], color: bool) -> io::Result<()> {
    let mut out = stdout(color);

    for s in suggestions {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{:>8}", s.count)?;
        out.reset()?;
        writeln!(out, "  {} factor pair(s)", s.factor_pairs)?;
    }
    Ok(())
}
