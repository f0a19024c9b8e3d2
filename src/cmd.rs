//! Execution of command-line subcommands against the API.

use crate::client::BibleApiClient;
use crate::cmd_args::Command;
use crate::error::Result;
use crate::output;

/// Run one subcommand and return the text to print
pub async fn execute(client: &BibleApiClient, command: &Command) -> Result<String> {
    tracing::debug!("Executing {command:?}");

    let out = match command {
        Command::Books => output::format_books(&client.list_books().await?),
        Command::Chapters { book } => output::format_numbers(&client.list_chapters(book).await?),
        Command::Verses { book, chapter } => {
            output::format_numbers(&client.list_verses(book, *chapter).await?)
        }
        Command::Verse {
            book,
            chapter,
            verse,
        } => {
            let text = client.get_verse_text(book, *chapter, *verse).await?;
            output::format_reference(book, *chapter, *verse, &text)
        }
        Command::Search { keyword } => {
            let results = client.keyword_search(keyword).await?;
            tracing::info!("Search for '{keyword}' matched {} verses", results.len());
            output::format_search_results(&results)
        }
        Command::Read { book } => {
            output::format_full_book(book, &client.fetch_full_book(book).await?)
        }
    };

    Ok(out)
}
