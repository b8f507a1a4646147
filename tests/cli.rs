//! End-to-end runs of the `pixelsheet` binary.

use image::{Rgba, RgbaImage};
use std::io::{Cursor, Read};
use std::path::Path;
use std::process::{Command, Output};

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pixelsheet"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write_png(dir: &Path, name: &str) {
    let mut img = RgbaImage::new(2, 1);
    img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
    img.save(dir.join(name)).unwrap();
}

fn read_entry(path: &Path, name: &str) -> String {
    let bytes = std::fs::read(path).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn test_missing_argument_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_in(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Usage: pixelsheet <path-to-image>\n"
    );
    assert!(!dir.path().join("a.xlsx").exists());
}

#[test]
fn test_converts_png_into_a_xlsx() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "flag.png");

    let output = run_in(dir.path(), &["flag.png"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.starts_with("pic width: 2px, height: 1px\n"));
    assert!(stdout.contains("\rProcessing row no.1 ..."));
    assert!(stdout.ends_with("\nDone.\n"));

    let xlsx = dir.path().join("a.xlsx");
    assert!(xlsx.exists());
    assert!(read_entry(&xlsx, "xl/workbook.xml").contains(r#"name="flag""#));
    assert!(
        read_entry(&xlsx, "xl/worksheets/sheet1.xml").contains(r#"<c r="A1" s="1"/><c r="B1" s="2"/>"#)
    );
}

#[test]
fn test_extra_arguments_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    write_png(dir.path(), "flag.png");

    let output = run_in(dir.path(), &["flag.png", "extra", "more"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).ends_with("Done.\n"));
    assert!(dir.path().join("a.xlsx").exists());
}

#[test]
fn test_failures_exit_with_one() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("anim.gif"), b"GIF89a").unwrap();

    let output = run_in(dir.path(), &["anim.gif"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported file type"));

    let output = run_in(dir.path(), &["flag.png", "--no-such-flag"]);
    assert_eq!(output.status.code(), Some(1));

    assert!(!dir.path().join("a.xlsx").exists());
}
