//! End-to-end tests for the ise-export binary against a wiremock ERS server.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LIST_PATH: &str = "/ers/config/networkdevice";

fn resource(base: &str, id: &str) -> Value {
    json!({
        "id": id,
        "name": format!("device-{}", id),
        "link": { "rel": "self", "href": format!("{}{}/{}", base, LIST_PATH, id), "type": "application/json" }
    })
}

fn device(id: &str, ip: &str) -> Value {
    json!({
        "NetworkDevice": {
            "id": id,
            "name": format!("device-{}", id),
            "NetworkDeviceIPList": [ { "ipaddress": ip, "mask": 24 } ]
        }
    })
}

async fn mount_two_page_directory(server: &MockServer) {
    let base = server.uri();

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("size", "100"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "SearchResult": {
                "total": 3,
                "resources": [resource(&base, "a"), resource(&base, "b")],
                "nextPage": { "rel": "next", "href": format!("{}{}?size=100&page=2", base, LIST_PATH) }
            }
        })))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "SearchResult": { "total": 3, "resources": [resource(&base, "c")] }
        })))
        .expect(1)
        .mount(server)
        .await;

    for (id, ip) in [("a", "10.0.0.1"), ("b", "10.0.0.2"), ("c", "10.0.0.3")] {
        Mock::given(method("GET"))
            .and(path(format!("{}/{}", LIST_PATH, id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(device(id, ip)))
            .expect(1)
            .mount(server)
            .await;
    }
}

fn export_command(base_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("ise-export").unwrap();
    cmd.env("ISE_USER", "admin")
        .env("ISE_PASSWORD", "secret")
        .env_remove("RUST_LOG")
        .args(["ise.example.com", "--base-url", base_url]);
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_prints_ip_mask_lines_in_order() {
    let server = MockServer::start().await;
    mount_two_page_directory(&server).await;
    let base = server.uri();

    let assert = tokio::task::spawn_blocking(move || export_command(&base).assert())
        .await
        .unwrap();

    assert
        .success()
        .stdout("10.0.0.1/24\n10.0.0.2/24\n10.0.0.3/24\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_format() {
    let server = MockServer::start().await;
    mount_two_page_directory(&server).await;
    let base = server.uri();

    let output = tokio::task::spawn_blocking(move || {
        export_command(&base).args(["--format", "json"]).output()
    })
    .await
    .unwrap()
    .unwrap();

    assert!(output.status.success());
    let devices: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(devices.as_array().map(Vec::len), Some(3));
    assert_eq!(devices[2]["NetworkDeviceIPList"][0]["ipaddress"], "10.0.0.3");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_error_fails_without_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;
    let base = server.uri();

    let assert = tokio::task::spawn_blocking(move || export_command(&base).assert())
        .await
        .unwrap();

    assert
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("401"));
}

#[test]
fn test_missing_credentials_is_usage_error() {
    Command::cargo_bin("ise-export")
        .unwrap()
        .env_remove("ISE_USER")
        .env_remove("ISE_PASSWORD")
        .arg("ise.example.com")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_host_is_usage_error() {
    Command::cargo_bin("ise-export")
        .unwrap()
        .env("ISE_USER", "admin")
        .env("ISE_PASSWORD", "secret")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ISE_HOSTNAME_OR_IP"));
}
