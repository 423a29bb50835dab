//! Browse command handler.
//!
//! Fetches the public snippet set once and narrows it locally, the way an
//! interactive client filters as the user types.

use anyhow::Result;
use snipbox_core::{
    LanguageChoice, ListingQuery, SnippetFilter, SnippetRecord, distinct_languages,
    filter_listing,
};

use crate::bootstrap::CliContext;
use crate::presentation::{format_optional, print_separator, truncate_string};

/// Execute the browse command.
pub async fn execute(ctx: &CliContext, search: &str, language: &str) -> Result<()> {
    let records = ctx.snippets.list(&SnippetFilter::public()).await?;

    if records.is_empty() {
        println!("No public snippets yet.");
        return Ok(());
    }

    let query = ListingQuery {
        search: search.to_string(),
        language: LanguageChoice::parse(language),
    };
    let hits = filter_listing(&records, &query);

    println!(
        "Showing {} of {} public snippet(s). Languages: {}\n",
        hits.len(),
        records.len(),
        distinct_languages(&records).join(", ")
    );

    println!(
        "{:<30} {:<12} {:<16} {:<24} Created",
        "Title", "Language", "Author", "Tags"
    );
    print_separator(100);

    for record in hits {
        println!("{}", format_row(record));
    }

    Ok(())
}

fn format_row(record: &SnippetRecord) -> String {
    let snippet = &record.snippet;
    let author = record.profiles.as_ref().and_then(|p| p.username.as_ref());

    format!(
        "{:<30} {:<12} {:<16} {:<24} {}",
        truncate_string(&snippet.title, 29),
        truncate_string(&snippet.language, 11),
        truncate_string(&format_optional(author, "anonymous"), 15),
        truncate_string(&snippet.tags.join(","), 23),
        snippet.created_at.format("%Y-%m-%d %H:%M")
    )
}
