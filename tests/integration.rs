//! Integration tests for mediameta.
//!
//! Extraction runs end to end against a small shell script standing in for
//! exiftool, so no real install is needed. The script substitution goes
//! through the same [`ExifTool`] configuration callers use to pin a binary.

#![cfg(unix)]

use mediameta::{Error, ExifTool};
use std::path::PathBuf;
use tempfile::TempDir;

fn fake_tool(dir: &TempDir, body: &str) -> ExifTool {
    let script = dir.path().join("fake-exiftool.sh");
    std::fs::write(&script, body).unwrap();
    ExifTool::at("sh").base_arg(script.to_string_lossy())
}

fn media_file(dir: &TempDir, name: &str) -> PathBuf {
    let file = dir.path().join(name);
    std::fs::write(&file, b"not really an image").unwrap();
    file
}

#[test]
fn parses_fields_end_to_end() {
    let dir = TempDir::new().unwrap();
    let file = media_file(&dir, "img_0001.jpg");

    let tool = fake_tool(
        &dir,
        "printf '%s\\n' \
         'Camera Model Name : Canon EOS 5D Mark III' \
         '  Lens ID :   EF50mm f/1.8 STM  ' \
         'Date/Time Original : 2023:01:02 03:04:05' \
         'no colon in this line' \
         'GPS Position :' \
         'Orientation : Rotate 90 CW' \
         'Orientation : Horizontal (normal)'\n",
    );

    let record = tool.extract(&file).unwrap();

    assert_eq!(record.path(), file);
    assert_eq!(record.camera().unwrap(), "Canon EOS 5D Mark III");
    assert_eq!(record.lens().unwrap(), "EF50mm f/1.8 STM");
    assert_eq!(record.date().unwrap().to_string(), "2023-01-02 03:04:05");

    // Key presence is enough for a geotag, even with an empty value.
    assert!(record.is_geo_tagged());
    assert_eq!(record.get("GPS Position").unwrap(), "");

    // Later duplicates overwrite earlier ones.
    assert_eq!(record.get("Orientation").unwrap(), "Horizontal (normal)");

    // The colon-free line contributed nothing: 5 distinct labels survive.
    assert_eq!(record.len(), 5);
}

#[test]
fn empty_output_yields_empty_record() {
    let dir = TempDir::new().unwrap();
    let file = media_file(&dir, "empty.mp4");

    let tool = fake_tool(&dir, "exit 0\n");
    let record = tool.extract(&file).unwrap();

    assert!(record.is_empty());
    assert!(!record.is_geo_tagged());
    assert!(matches!(record.camera(), Err(Error::UnknownField { .. })));
}

#[test]
fn nonzero_exit_discards_partial_output() {
    let dir = TempDir::new().unwrap();
    let file = media_file(&dir, "broken.jpg");

    let tool = fake_tool(
        &dir,
        "printf '%s\\n' 'Camera Model Name : Canon EOS 5D'\nexit 3\n",
    );

    match tool.extract(&file) {
        Err(Error::ToolFailed { tool, message }) => {
            assert_eq!(tool, "sh");
            assert!(message.contains("exited with status"), "got: {message}");
        }
        other => panic!("expected ToolFailed, got {other:?}"),
    }
}

#[test]
fn invalid_utf8_output_surfaces_io_error() {
    let dir = TempDir::new().unwrap();
    let file = media_file(&dir, "mojibake.jpg");

    // One good line, then bytes that are not UTF-8.
    let tool = fake_tool(
        &dir,
        "printf '%s\\n' 'Camera Model Name : Canon EOS 5D'\nprintf '\\377\\376\\n'\n",
    );

    match tool.extract(&file) {
        Err(Error::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn missing_file_fails_before_launch() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone.jpg");

    // The tool body would fail loudly if it ever ran.
    let tool = fake_tool(&dir, "exit 99\n");

    match tool.extract(&missing) {
        Err(Error::PathNotFound { path }) => assert_eq!(path, missing),
        other => panic!("expected PathNotFound, got {other:?}"),
    }
}

#[test]
fn unlaunchable_program_is_launch_failed() {
    let dir = TempDir::new().unwrap();
    let file = media_file(&dir, "clip.mov");

    let tool = ExifTool::at("/nonexistent/bin/exiftool-xyz");

    match tool.extract(&file) {
        Err(Error::LaunchFailed { tool, .. }) => assert_eq!(tool, "exiftool-xyz"),
        other => panic!("expected LaunchFailed, got {other:?}"),
    }
}

#[test]
fn argument_order_is_base_then_extra_then_path() {
    let dir = TempDir::new().unwrap();
    let file = media_file(&dir, "ordered.jpg");

    let tool = fake_tool(&dir, "printf 'Args : %s\\n' \"$*\"\n").base_arg("-fast");

    let record = tool.extract_with_args(&file, ["-a", "-e"]).unwrap();
    assert_eq!(
        record.get("Args").unwrap(),
        format!("-fast -a -e {}", file.display())
    );
}

#[test]
fn relative_paths_resolve_against_cwd() {
    let dir = TempDir::new().unwrap();
    media_file(&dir, "relative.jpg");
    let tool = fake_tool(&dir, "printf 'File Name : %s\\n' \"$1\"\n");

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = tool.extract("relative.jpg");
    std::env::set_current_dir(previous).unwrap();

    let record = result.unwrap();
    assert!(record.path().is_absolute());
    assert!(record.path().ends_with("relative.jpg"));
}
