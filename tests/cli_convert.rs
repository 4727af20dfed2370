use assert_cmd::Command;
use predicates::prelude::*;
use quill::codec::{encode_index, encode_page};
use quill::model::{FixedId, NotebookIndex, Page, Point, Stroke};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn page_id(n: usize) -> FixedId {
    FixedId::from_text(&format!("PAGE{}{}", n, "0".repeat(31)))
}

fn notebook_index(title: &str, pages: usize) -> NotebookIndex {
    NotebookIndex {
        format_version: 1,
        page_ids: (0..pages).map(page_id).collect(),
        current_page: 0,
        title: title.to_string(),
        created_at: 1000,
        modified_at: 2000,
        trailing_id: FixedId::from_text("ffffffff-ffff-4fff-8fff-ffffffffffff"),
    }
}

fn two_point_page(id: FixedId) -> Page {
    Page {
        format_version: 1,
        trailing_id: id,
        tool_format_version: 1,
        tag_count: 0,
        reserved_a: 0,
        reserved_b: 0,
        paper_type: 0,
        image_count: 0,
        reserved_c: 0,
        read_only: false,
        aspect_ratio: 0.77,
        strokes: vec![Stroke {
            format_version: 1,
            color: 0,
            thickness: 3,
            tool: 0,
            points: vec![Point::new(0.0, 0.0, 1.0), Point::new(1.0, 1.0, 1.0)],
        }],
        line_count: 0,
        reserved_d: 0,
        text_count: 0,
    }
}

/// Writes a container the way the notebook app lays it out.
fn write_container(
    dir: &Path,
    title: &str,
    pages: usize,
    skip_page: Option<usize>,
) -> std::path::PathBuf {
    let index = notebook_index(title, pages);
    let mut builder = tar::Builder::new(Vec::new());
    let mut append = |name: String, data: Vec<u8>| {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, name, data.as_slice()).unwrap();
    };

    append(
        "notebook_test/index.quill_data".to_string(),
        encode_index(&index).unwrap(),
    );
    for (n, id) in index.page_ids.iter().enumerate() {
        if Some(n) == skip_page {
            continue;
        }
        append(
            format!("notebook_test/page_{}.quill_data", id),
            encode_page(&two_point_page(*id)).unwrap(),
        );
    }

    let path = dir.join("test.quill");
    fs::write(&path, builder.into_inner().unwrap()).unwrap();
    path
}

fn quill(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quill").unwrap();
    cmd.arg("--config-dir").arg(config_dir);
    cmd.env_remove("QUILL_LOG");
    cmd
}

#[test]
fn test_convert_writes_svg_pages() {
    let temp = TempDir::new().unwrap();
    let container = write_container(temp.path(), "Test", 2, None);
    let out = temp.path().join("out");

    quill(temp.path())
        .arg("convert")
        .arg(&container)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 2 page(s)"));

    let first = fs::read_to_string(out.join("page_001.svg")).unwrap();
    assert_eq!(first.matches("<line ").count(), 1);
    assert!(out.join("page_002.svg").exists());
}

#[test]
fn test_convert_defaults_to_title_dir() {
    let temp = TempDir::new().unwrap();
    let container = write_container(temp.path(), "Test", 1, None);

    quill(temp.path())
        .current_dir(temp.path())
        .arg("convert")
        .arg(&container)
        .assert()
        .success();

    assert!(temp.path().join("Test").join("page_001.svg").exists());
}

#[test]
fn test_missing_page_fails_conversion() {
    let temp = TempDir::new().unwrap();
    let container = write_container(temp.path(), "Gappy", 3, Some(1));
    let out = temp.path().join("out");

    quill(temp.path())
        .arg("convert")
        .arg(&container)
        .arg("-o")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page 2").and(predicate::str::contains("no data")));

    assert!(!out.exists());
}

#[test]
fn test_info_json() {
    let temp = TempDir::new().unwrap();
    let container = write_container(temp.path(), "Test", 1, None);

    let output = quill(temp.path())
        .arg("info")
        .arg(&container)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "Test");
    assert_eq!(json["page_count"], 1);
    assert_eq!(json["pages"][0]["points"], 2);
}

#[test]
fn test_config_roundtrip() {
    let temp = TempDir::new().unwrap();

    quill(temp.path())
        .args(["config", "page-prefix", "sheet_"])
        .assert()
        .success();

    quill(temp.path())
        .args(["config", "page-prefix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page-prefix = sheet_"));
}

#[test]
fn test_not_a_container() {
    let temp = TempDir::new().unwrap();
    let bogus = temp.path().join("bogus.quill");
    fs::write(&bogus, b"definitely not a tar archive").unwrap();

    quill(temp.path())
        .arg("info")
        .arg(&bogus)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
