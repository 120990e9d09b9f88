//! Runs the `xpload` binary end to end: config discovery, exit status, and
//! the split between data on stdout and diagnostics on stderr.

use std::path::Path;
use std::process::{Command, Output};
use std::sync::Arc;
use std::thread::JoinHandle;

use pretty_assertions::assert_eq;
use serde_json::Value;

/// Serves one fixed JSON body for every request until dropped.
struct StubService {
    server: Arc<tiny_http::Server>,
    handle: Option<JoinHandle<()>>,
    port: u16,
}

impl StubService {
    fn start(body: &'static str) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind tiny_http"));
        let port = server.server_addr().to_ip().expect("ip address").port();
        let handle = {
            let server = Arc::clone(&server);
            std::thread::spawn(move || {
                for request in server.incoming_requests() {
                    let _ = request.respond(tiny_http::Response::from_string(body));
                }
            })
        };
        Self {
            server,
            handle: Some(handle),
            port,
        }
    }
}

impl Drop for StubService {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn write_config(dir: &Path, name: &str, port: u16) {
    let config = format!(r#"{{"host": "127.0.0.1", "port": "{port}", "apiroot": "/api", "path": "/tmp"}}"#);
    std::fs::write(dir.join(name), config).unwrap();
}

fn xpload(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xpload"))
        .args(args)
        .current_dir(cwd)
        .env_remove("XPLOAD_DIR")
        .env_remove("XPLOAD_CONFIG_NAME")
        .env_remove("XPLOAD_LOG")
        .env_remove("XPLOAD_DB_HOST")
        .env_remove("XPLOAD_DB_PORT")
        .env_remove("XPLOAD_DB_APIROOT")
        .output()
        .expect("run xpload")
}

#[test]
fn missing_config_exits_with_config_status() {
    let dir = tempfile::tempdir().unwrap();

    let out = xpload(dir.path(), &["show", "tags"]);

    assert_eq!(out.status.code(), Some(78));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Cannot find config file test.json"), "{stderr}");
}

#[test]
fn show_prints_count_then_entries() {
    let service = StubService::start(r#"[{"id": 3, "name": "A"}, {"id": 7, "name": "A"}]"#);
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "test.json", service.port);

    let out = xpload(dir.path(), &["show", "tags"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Found 2 entries"));
    let entries: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(entries[1]["id"], 7);
}

#[test]
fn named_config_is_resolved_from_config_dir() {
    let service = StubService::start(r#"{"id": 4, "name": "calib"}"#);
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("config")).unwrap();
    write_config(&dir.path().join("config"), "prod.json", service.port);

    let out = xpload(dir.path(), &["-c", "prod", "-f", "raw", "show", "domains", "--id", "4"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        r#"[{"id":4,"name":"calib"}]"#
    );
}

#[test]
fn service_failure_is_reported_without_failing_exit() {
    let service = StubService::start(r#"{"not_a_list": true}"#);
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "test.json", service.port);

    let out = xpload(dir.path(), &["fetch", "T1", "42"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("xpload error"));
}

#[test]
fn unknown_component_is_reported_without_request() {
    let service = StubService::start("[]");
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "test.json", service.port);

    let out = xpload(dir.path(), &["show", "widgets"]);

    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Wrong component widgets"), "{stderr}");
}

#[test]
fn push_prints_report() {
    let service = StubService::start(r#"[{"id": 1, "name": "T1", "global_tag": 1, "payload_type": 1, "payload_url": "p1.txt", "payload_list": 1}]"#);
    let dir = tempfile::tempdir().unwrap();
    write_config(dir.path(), "test.json", service.port);

    let out = xpload(dir.path(), &["push", "T1", "T1", "p1.txt"]);

    assert_eq!(out.status.code(), Some(0));
    let report: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["payload"]["id"], 1);
    assert_eq!(report["payload"]["outcome"], "found");
}
