use anyhow::Result;
use linkwell_core::{link_chunks, Chunk};
use linkwell_sqlite::ArticleStore;

/// Dump an article's content verbatim.
pub fn view(store: &ArticleStore, url: &str) -> Result<()> {
    let article = store.get(url)?;
    println!("{}", article.content);
    Ok(())
}

/// Print an article with link markers rendered, plus a backlinks/tags
/// footer.
pub fn print_article(store: &ArticleStore, url: &str) -> Result<()> {
    let article = store.get(url)?;

    let mut rendered = String::new();
    for chunk in link_chunks(&article.content) {
        match chunk {
            Chunk::Text(text) => rendered.push_str(&text),
            Chunk::Link(target) => rendered.push_str(&format!("<{}>", target)),
        }
    }
    println!("{}", rendered);

    println!("\n----- Backlinks -----");
    for backlink in &article.backlinks {
        println!(" - {}", backlink);
    }

    println!("\n----- Tags -----");
    for tag in &article.tags {
        println!(" - {}", tag);
    }

    Ok(())
}

/// Print an article's backlinks, one per line.
pub fn view_backlinks(store: &ArticleStore, url: &str) -> Result<()> {
    let article = store.get(url)?;
    for backlink in &article.backlinks {
        println!("{}", backlink);
    }
    Ok(())
}

/// Print an article's tags, one per line.
pub fn view_tags(store: &ArticleStore, url: &str) -> Result<()> {
    let article = store.get(url)?;
    for tag in &article.tags {
        println!("{}", tag);
    }
    Ok(())
}
