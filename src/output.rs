//! Plain-text rendering of API results for the command line.

use std::fmt::Write;

use crate::models::{FullBookChapter, SearchResult};

/// Printed when a search matches nothing
pub const NO_RESULTS: &str = "No results found.";

/// One book name per line
pub fn format_books(books: &[String]) -> String {
    let mut out = String::new();
    for book in books {
        out.push_str(book);
        out.push('\n');
    }
    out
}

/// Chapter or verse numbers on a single line
pub fn format_numbers(numbers: &[u32]) -> String {
    let joined = numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{joined}\n")
}

/// `Book C:V  text`
pub fn format_reference(book: &str, chapter: u32, verse: u32, text: &str) -> String {
    format!("{book} {chapter}:{verse}  {text}\n")
}

pub fn format_search_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!("{NO_RESULTS}\n");
    }

    results
        .iter()
        .map(|r| format_reference(&r.book, r.chapter, r.verse, &r.text))
        .collect()
}

/// Chapter headings followed by indented numbered verses
pub fn format_full_book(book: &str, chapters: &[FullBookChapter]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{book}");
    for chapter in chapters {
        let _ = writeln!(out);
        let _ = writeln!(out, "Chapter {}", chapter.chapter);
        for verse in &chapter.verses {
            let _ = writeln!(out, "  {} {}", verse.verse, verse.text);
        }
    }
    out
}
