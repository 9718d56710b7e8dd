//! Builds a small document, attaches an option filter and replays the
//! terms given on the command line, printing the option table after each.
//!
//! ```text
//! option-filter-demo 次郎 "" 佐々木
//! ```

use std::fs::File;
use std::process::ExitCode;

use optdom::{Document, DomError, ElementBuilder, NodeId, Rect};
use option_filter::{FilterParams, IGNORE_ATTR, OptionFilter, OptionFilterError};
use simplelog::{Config, LevelFilter, WriteLogger};
use unicode_width::UnicodeWidthChar;

const LOG_FILE: &str = "option-filter-demo.log";
const LOG_LEVEL_VAR: &str = "OPTION_FILTER_LOG";
const LABEL_WIDTH: usize = 16;

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("log setup failed: {0}")]
    Log(String),
    #[error("document error: {0}")]
    Dom(#[from] DomError),
    #[error(transparent)]
    Filter(#[from] OptionFilterError),
}

fn log_level() -> LevelFilter {
    std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Debug)
}

fn init_logging() -> Result<(), DemoError> {
    let log_file = File::create(LOG_FILE).map_err(|e| DemoError::Log(e.to_string()))?;
    WriteLogger::init(log_level(), Config::default(), log_file)
        .map_err(|e| DemoError::Log(e.to_string()))
}

fn build_document() -> Result<Document, DemoError> {
    let mut doc = Document::new();
    let body = doc.body();
    doc.mount(
        body,
        ElementBuilder::section().class("container mx-auto").child(
            ElementBuilder::select()
                .attr("data-label", "filter")
                .layout(Rect::new(0, 0, 160, 24))
                .child(ElementBuilder::option("佐々木 一郎"))
                .child(ElementBuilder::option("木下 次郎"))
                .child(ElementBuilder::option("岡田 次郎")),
        ),
    )?;
    Ok(doc)
}

/// Fit `label` into exactly `columns` terminal cells, cutting it with `…`
/// when it overflows. CJK characters take two cells.
fn pad_to_width(label: &str, columns: usize) -> String {
    let cell = |c: char| c.width().unwrap_or(0);
    let full: usize = label.chars().map(cell).sum();

    let mut out = String::new();
    let mut used = 0;
    if full <= columns {
        out.push_str(label);
        used = full;
    } else if columns > 0 {
        for c in label.chars() {
            if used + cell(c) >= columns {
                break;
            }
            out.push(c);
            used += cell(c);
        }
        out.push('…');
        used += 1;
    }
    out.extend(std::iter::repeat_n(' ', columns.saturating_sub(used)));
    out
}

fn print_table(doc: &Document, select: NodeId) {
    println!("  {}  shown  selected", pad_to_width("label", LABEL_WIDTH));
    for option in doc.options(select) {
        if doc.has_attr(option, IGNORE_ATTR) {
            continue;
        }
        println!(
            "  {}  {:<5}  {}",
            pad_to_width(&doc.option_label(option), LABEL_WIDTH),
            if doc.is_hidden(option) { "no" } else { "yes" },
            if doc.is_selected(option) { "yes" } else { "" },
        );
    }
    println!("  value: {:?}", doc.value(select));
}

fn run() -> Result<(), DemoError> {
    init_logging()?;

    let mut doc = build_document()?;
    let mut filter = OptionFilter::new(
        &doc,
        FilterParams::new("[data-label=filter]").placeholder("Search names..."),
    )?;
    filter.try_init(&mut doc)?;

    let select = filter.target();
    let Some(input) = filter.input() else {
        return Ok(());
    };

    println!("initial");
    print_table(&doc, select);

    for term in std::env::args().skip(1) {
        doc.type_text(input, &term)?;
        println!();
        println!("after typing {term:?}");
        print_table(&doc, select);
    }

    println!();
    println!("{}", doc.outer_html(doc.body()));
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pad_to_width;

    #[test]
    fn test_pad_to_width_counts_cjk_as_two_cells() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("木下", 6), "木下  ");
        assert_eq!(pad_to_width("", 0), "");
    }

    #[test]
    fn test_pad_to_width_cuts_overflow() {
        assert_eq!(pad_to_width("hello world", 8), "hello w…");
        assert_eq!(pad_to_width("佐々木 一郎", 5), "佐々…");
        assert_eq!(pad_to_width("佐々木 一郎", 6), "佐々… ");
    }
}
