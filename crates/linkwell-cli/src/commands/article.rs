use anyhow::{bail, Context, Result};
use linkwell_core::extract_links;
use linkwell_sqlite::ArticleStore;
use std::collections::BTreeSet;
use std::io::{Read, Seek, SeekFrom, Write};
use std::process::Command;

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("reading article content from stdin")?;
    Ok(content)
}

/// Create a new article from stdin, deriving its links from the content.
pub fn create(store: &ArticleStore, url: &str, tags: Vec<String>) -> Result<()> {
    let content = read_stdin()?;
    let links = extract_links(&content);
    let tags: BTreeSet<String> = tags.into_iter().collect();

    store.create(url, &content, &links, &tags)?;
    Ok(())
}

/// Replace an article's content from stdin, keeping its existing tags.
pub fn update(store: &ArticleStore, url: &str) -> Result<()> {
    let old = store.get(url)?;
    let content = read_stdin()?;
    let links = extract_links(&content);

    store.update(url, &content, &links, &old.tags)?;
    Ok(())
}

/// Edit an article's content in `$VISUAL` (or `$EDITOR`).
///
/// The content goes through a named scratch file rather than stdin so the
/// user always has an original copy to revert to while editing.
pub fn edit(store: &ArticleStore, url: &str) -> Result<()> {
    let editor = std::env::var("VISUAL")
        .or_else(|_| std::env::var("EDITOR"))
        .ok()
        .filter(|editor| !editor.is_empty());
    let Some(editor) = editor else {
        bail!("no setting for $VISUAL or $EDITOR");
    };

    let old = store.get(url)?;

    let mut scratch = tempfile::NamedTempFile::new().context("creating scratch file")?;
    scratch
        .write_all(old.content.as_bytes())
        .context("writing scratch file")?;
    scratch.flush()?;

    let status = Command::new("sh")
        .arg("-c")
        .arg(format!("{} {}", editor, scratch.path().display()))
        .status()
        .with_context(|| format!("launching editor {:?}", editor))?;
    if !status.success() {
        bail!("editor exited with {}", status);
    }

    let mut content = String::new();
    scratch.seek(SeekFrom::Start(0))?;
    scratch.read_to_string(&mut content).context("reading edited content")?;

    let links = extract_links(&content);
    store.update(url, &content, &links, &old.tags)?;
    Ok(())
}

/// Replace the tag set, leaving content and links unchanged.
pub fn set_tags(store: &ArticleStore, url: &str, tags: Vec<String>) -> Result<()> {
    let old = store.get(url)?;
    let tags: BTreeSet<String> = tags.into_iter().collect();

    store.update(url, &old.content, &old.links, &tags)?;
    Ok(())
}

/// Remove an article. Succeeds even if the URL was never stored.
pub fn delete(store: &ArticleStore, url: &str) -> Result<()> {
    store.delete(url)?;
    Ok(())
}
