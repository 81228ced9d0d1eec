//! End-to-end provisioning flow tests

use std::fs;
use std::io::Write;
use std::path::Path;
use std::thread;

use testprep::{harness, Step};
use zip::write::SimpleFileOptions;

/// A minimal emulator distribution: a jar under lib/ and a readme.
fn fixture_zip_bytes() -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    writer.add_directory("lib", options).unwrap();
    writer.start_file("lib/emulator.jar", options).unwrap();
    writer.write_all(b"not really a jar").unwrap();
    writer.start_file("README.txt", options).unwrap();
    writer.write_all(b"local emulator distribution\n").unwrap();

    writer.finish().unwrap().into_inner()
}

/// Serve one HTTP response on an ephemeral local port.
fn serve_once(body: Vec<u8>) -> (String, thread::JoinHandle<()>) {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr().to_ip().unwrap();
    let url = format!("http://{}/dynamodb_local.zip", addr);

    let handle = thread::spawn(move || {
        if let Ok(request) = server.recv() {
            let _ = request.respond(tiny_http::Response::from_data(body));
        }
    });

    (url, handle)
}

fn marker_runner(marker: &Path) -> Vec<String> {
    vec![
        "sh".to_string(),
        "-c".to_string(),
        format!("echo ran >> {}", marker.display()),
    ]
}

#[test]
fn absent_dependency_runs_the_full_sequence() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let dep_dir = temp_dir.path().join("dynamodb");
    let archive = temp_dir.path().join("dynamodb.zip");
    let marker = temp_dir.path().join("marker");

    let (url, handle) = serve_once(fixture_zip_bytes());

    let report = harness::prepare(&dep_dir)
        .archive_url(url)
        .archive_path(&archive)
        .runner(marker_runner(&marker))
        .execute()
        .unwrap();
    handle.join().unwrap();

    let steps: Vec<Step> = report.outcomes.iter().map(|o| o.step).collect();
    assert_eq!(
        steps,
        vec![Step::Fetch, Step::Unpack, Step::RemoveArchive, Step::RunSuite]
    );
    assert!(report.success());

    // The extracted tree is in place and the archive is gone.
    let mut files: Vec<String> = walkdir::WalkDir::new(&dep_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            e.path()
                .strip_prefix(&dep_dir)
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    files.sort();
    assert_eq!(files, vec!["README.txt", "lib/emulator.jar"]);
    assert!(!archive.exists());

    // The runner ran exactly once and its exit status was recorded.
    assert_eq!(fs::read_to_string(&marker).unwrap(), "ran\n");
    assert!(report.suite_status.unwrap().success());
}

#[test]
fn present_dependency_invokes_only_the_runner() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let dep_dir = temp_dir.path().join("dynamodb");
    fs::create_dir(&dep_dir).unwrap();
    let archive = temp_dir.path().join("dynamodb.zip");
    let marker = temp_dir.path().join("marker");

    // Nothing listens here; the URL must never be contacted.
    let report = harness::prepare(&dep_dir)
        .archive_url("http://127.0.0.1:1/unreachable.zip")
        .archive_path(&archive)
        .runner(marker_runner(&marker))
        .execute()
        .unwrap();

    let steps: Vec<Step> = report.outcomes.iter().map(|o| o.step).collect();
    assert_eq!(steps, vec![Step::RunSuite]);
    assert!(report.success());

    assert!(!archive.exists());
    assert_eq!(fs::read_to_string(&marker).unwrap(), "ran\n");
}

#[test]
fn second_run_skips_provisioning() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let dep_dir = temp_dir.path().join("dynamodb");
    let archive = temp_dir.path().join("dynamodb.zip");
    let marker = temp_dir.path().join("marker");

    let (url, handle) = serve_once(fixture_zip_bytes());

    let first = harness::prepare(&dep_dir)
        .archive_url(url.as_str())
        .archive_path(&archive)
        .runner(marker_runner(&marker))
        .execute()
        .unwrap();
    handle.join().unwrap();
    assert_eq!(first.outcomes.len(), 4);

    // The directory now exists, so the URL is not contacted again.
    let second = harness::prepare(&dep_dir)
        .archive_url(url.as_str())
        .archive_path(&archive)
        .runner(marker_runner(&marker))
        .execute()
        .unwrap();
    assert_eq!(second.outcomes.len(), 1);
    assert_eq!(second.outcomes[0].step, Step::RunSuite);

    assert_eq!(fs::read_to_string(&marker).unwrap(), "ran\nran\n");
}
