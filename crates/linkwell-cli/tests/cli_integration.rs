//! Integration tests driving the `lw` binary against a throwaway database.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Wiki {
    _dir: TempDir,
    db_path: std::path::PathBuf,
}

impl Wiki {
    fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let db_path = dir.path().join("wiki.db");
        Self { _dir: dir, db_path }
    }

    fn lw(&self) -> Command {
        let mut cmd = Command::cargo_bin("lw").expect("binary");
        cmd.arg("--db").arg(&self.db_path);
        cmd
    }
}

#[test]
fn create_view_round_trip() {
    let wiki = Wiki::new();

    wiki.lw()
        .args(["create", "http://1.com/a", "tag-1", "tag-2"])
        .write_stdin("See [[http://1.com/b]] for more")
        .assert()
        .success();

    wiki.lw()
        .args(["view", "http://1.com/a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("See [[http://1.com/b]] for more"));

    wiki.lw()
        .args(["view-tags", "http://1.com/a"])
        .assert()
        .success()
        .stdout("tag-1\ntag-2\n");
}

#[test]
fn create_twice_fails() {
    let wiki = Wiki::new();

    wiki.lw()
        .args(["create", "http://1.com/a", "t"])
        .write_stdin("x")
        .assert()
        .success();

    wiki.lw()
        .args(["create", "http://1.com/a", "t"])
        .write_stdin("y")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Already have article"));
}

#[test]
fn search_finds_linked_articles() {
    let wiki = Wiki::new();

    wiki.lw()
        .args(["create", "http://1.com/a", "tag-1"])
        .write_stdin("links to [[http://1.com/b]]")
        .assert()
        .success();
    wiki.lw()
        .args(["create", "http://1.com/b", "tag-2"])
        .write_stdin("links back to [[http://1.com/a]]")
        .assert()
        .success();

    wiki.lw()
        .args(["search", "domain:1.com"])
        .assert()
        .success()
        .stdout("http://1.com/a\nhttp://1.com/b\n");

    wiki.lw()
        .args(["search", "links:http://1.com/b"])
        .assert()
        .success()
        .stdout("http://1.com/a\n");

    wiki.lw()
        .args(["search", "NOT tag-1"])
        .assert()
        .success()
        .stdout("http://1.com/b\n");
}

#[test]
fn search_rejects_malformed_query() {
    let wiki = Wiki::new();

    wiki.lw()
        .args(["search", "(a AND b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid query string"));
}

#[test]
fn print_shows_backlinks_footer() {
    let wiki = Wiki::new();

    wiki.lw()
        .args(["create", "http://1.com/a", "t"])
        .write_stdin("see [[http://1.com/b]]")
        .assert()
        .success();
    wiki.lw()
        .args(["create", "http://1.com/b", "t"])
        .write_stdin("plain")
        .assert()
        .success();

    wiki.lw()
        .args(["print", "http://1.com/b"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("----- Backlinks -----")
                .and(predicate::str::contains(" - http://1.com/a")),
        );
}

#[test]
fn set_tags_replaces_tags_only() {
    let wiki = Wiki::new();

    wiki.lw()
        .args(["create", "http://1.com/a", "old-tag"])
        .write_stdin("content stays")
        .assert()
        .success();

    wiki.lw()
        .args(["set-tags", "http://1.com/a", "new-tag"])
        .assert()
        .success();

    wiki.lw()
        .args(["view-tags", "http://1.com/a"])
        .assert()
        .success()
        .stdout("new-tag\n");

    wiki.lw()
        .args(["view", "http://1.com/a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("content stays"));
}

#[test]
fn delete_is_idempotent() {
    let wiki = Wiki::new();

    wiki.lw().args(["delete", "http://1.com/never"]).assert().success();
    wiki.lw().args(["delete", "http://1.com/never"]).assert().success();
}

#[test]
fn view_missing_article_fails() {
    let wiki = Wiki::new();

    wiki.lw()
        .args(["view", "http://1.com/missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No article about"));
}
