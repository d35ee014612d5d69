use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

#[allow(deprecated)]
fn inkpost() -> Command {
    Command::cargo_bin("inkpost").expect("inkpost binary")
}

fn blog(config: &str) -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("inkpost.yml"), config).unwrap();
    let posts = dir.path().join("posts");
    fs::create_dir_all(&posts).unwrap();
    fs::write(
        posts.join("hello.md"),
        "---\ntitle: Hello World\ndate: 2025-02-01\nupdated: 2025-04-01\ntags: [Rust]\n---\n\nA **greeting** to everyone.\n\nMore words.",
    )
    .unwrap();
    fs::write(
        posts.join("draft.md"),
        "---\ntitle: Draft Idea\ndate: 2025-03-01\npublished: false\n---\n\nNot ready.",
    )
    .unwrap();
    dir
}

fn json_output(dir: &Path, args: &[&str]) -> Value {
    let assert = inkpost().current_dir(dir).args(args).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn post_shows_single_post_json() {
    let dir = blog("paths:\n  posts: posts\n");
    let value = json_output(dir.path(), &["post", "hello-world", "--json"]);

    assert_eq!(value["kind"], "post.show");
    assert_eq!(value["data"]["title"], "Hello World");
    assert_eq!(value["data"]["url"], "/blog/hello-world");
    assert_eq!(value["data"]["excerpt"], "A greeting to everyone. More words.");
    assert_eq!(value["data"]["updated"], "2025-04-01");
    assert_eq!(value["data"]["source_path"], "hello.md");
    assert!(value["data"]["body"]
        .as_str()
        .unwrap()
        .contains("A **greeting** to everyone."));
}

#[test]
fn post_accepts_url_and_finds_drafts() {
    let dir = blog("paths:\n  posts: posts\n");
    inkpost()
        .current_dir(dir.path())
        .args(["post", "/blog/hello-world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-02-01  Hello World"))
        .stdout(predicate::str::contains("A **greeting** to everyone."));

    inkpost()
        .current_dir(dir.path())
        .args(["post", "draft-idea"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft Idea [draft]"));
}

#[test]
fn post_unknown_slug_fails() {
    let dir = blog("paths:\n  posts: posts\n");
    inkpost()
        .current_dir(dir.path())
        .args(["post", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Post 'nope' not found"));
}

#[test]
fn new_writes_post_with_unique_slug() {
    let dir = blog("paths:\n  posts: posts\n");

    let value = json_output(
        dir.path(),
        &["new", "Hello World", "--tag", "Rust", "--tag", "Notes", "--json"],
    );
    assert_eq!(value["kind"], "post.new");
    assert_eq!(value["data"]["slug"], "hello-world-1");

    let path = dir.path().join("posts/hello-world-1.md");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("---\n"));
    assert!(contents.contains("title: Hello World"));
    assert!(contents.contains("slug: hello-world-1"));
    assert!(contents.contains("published: true"));

    // The scaffolded file loads like any other post
    let value = json_output(dir.path(), &["post", "hello-world-1", "--json"]);
    assert_eq!(value["data"]["title"], "Hello World");
    let tags: Vec<&str> = value["data"]["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["slug"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["rust", "notes"]);

    let value = json_output(dir.path(), &["new", "Hello World", "--json"]);
    assert_eq!(value["data"]["slug"], "hello-world-2");
}

#[test]
fn new_short_title_gets_suffix_and_draft_flag() {
    let dir = tempdir().unwrap();
    let value = json_output(dir.path(), &["new", "Go", "--draft", "--json"]);

    let slug = value["data"]["slug"].as_str().unwrap().to_string();
    assert!(slug.starts_with("go-"), "unexpected slug {slug}");
    assert_eq!(slug.chars().count(), "go-".len() + 6);

    let contents = fs::read_to_string(dir.path().join(format!("posts/{slug}.md"))).unwrap();
    assert!(contents.contains("published: false"));

    let value = json_output(dir.path(), &["posts", "--drafts", "--json"]);
    assert_eq!(value["data"]["posts"][0]["slug"], slug.as_str());
}

#[test]
fn new_rejects_blank_title() {
    let dir = tempdir().unwrap();
    inkpost()
        .current_dir(dir.path())
        .args(["new", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn sitemap_lists_published_posts() {
    let dir = blog("site:\n  url: https://blog.example.com/\npaths:\n  posts: posts\n");
    inkpost()
        .current_dir(dir.path())
        .arg("sitemap")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">",
        ))
        .stdout(predicate::str::contains(
            "<url><loc>https://blog.example.com/</loc></url>",
        ))
        .stdout(predicate::str::contains(
            "<loc>https://blog.example.com/blog/hello-world</loc><lastmod>2025-04-01</lastmod>",
        ))
        .stdout(predicate::str::contains("draft-idea").not());
}

#[test]
fn sitemap_writes_output_file() {
    let dir = blog("site:\n  url: https://blog.example.com\npaths:\n  posts: posts\n");
    inkpost()
        .current_dir(dir.path())
        .args(["sitemap", "--output", "sitemap.xml"])
        .assert()
        .success();

    let xml = fs::read_to_string(dir.path().join("sitemap.xml")).unwrap();
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("https://blog.example.com/blog/hello-world"));
}

#[test]
fn sitemap_requires_site_url() {
    let dir = blog("paths:\n  posts: posts\n");
    inkpost()
        .current_dir(dir.path())
        .arg("sitemap")
        .assert()
        .failure()
        .stderr(predicate::str::contains("site.url"));
}
