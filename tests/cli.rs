//
//  pinbot
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// A command isolated from the user's config and environment.
fn pinbot(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pinbot").unwrap();
    cmd.env("PINBOT_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("PINBOT_SESSION")
        .env_remove("PINBOT_BASE_URL")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    pinbot(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("boards"))
        .stdout(predicate::str::contains("pins"))
        .stdout(predicate::str::contains("users"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    pinbot(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("pinbot version "));
}

#[test]
fn test_create_board_without_session_exits_with_auth_code() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server.mock("POST", Matcher::Any).expect(0).create();

    pinbot(&dir)
        .args(["--base-url", &server.url(), "boards", "create", "Recipes"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Authentication required"));

    mock.assert();
}

#[test]
fn test_boards_list_json() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/resource/BoardsResource/get/")
        .match_query(Matcher::UrlEncoded("username".into(), "alice".into()))
        .with_status(200)
        .with_body(
            json!({"status": "success", "data": [{"id": "1", "name": "Recipes"}]}).to_string(),
        )
        .create();

    pinbot(&dir)
        .args(["--base-url", &server.url(), "--json", "boards", "list", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Recipes\""));

    mock.assert();
}

#[test]
fn test_board_pins_stream_json_lines() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/resource/BoardFeedResource/get/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({"status": "success", "data": [{"id": "1"}, {"id": "2"}], "bookmark": "-end-"})
                .to_string(),
        )
        .create();

    pinbot(&dir)
        .args(["--base-url", &server.url(), "--json", "boards", "pins", "42"])
        .assert()
        .success()
        .stdout("{\"id\":\"1\"}\n{\"id\":\"2\"}\n");
}

#[test]
fn test_not_found_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/resource/PinResource/get/")
        .match_query(Matcher::Any)
        .with_status(404)
        .create();

    pinbot(&dir)
        .args(["--base-url", &server.url(), "pins", "info", "123"])
        .assert()
        .code(8);
}

#[test]
fn test_config_set_and_get() {
    let dir = TempDir::new().unwrap();
    pinbot(&dir)
        .args(["config", "set", "timeout_secs", "5"])
        .assert()
        .success();

    pinbot(&dir)
        .args(["config", "get", "timeout_secs"])
        .assert()
        .success()
        .stdout("5\n");

    pinbot(&dir)
        .args(["config", "set", "session.cookie", "secret"])
        .assert()
        .success();

    pinbot(&dir)
        .args(["config", "get", "session"])
        .assert()
        .success()
        .stdout("set\n");
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    pinbot(&dir)
        .args(["config", "set", "editor", "vim"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn test_comment_with_empty_success_payload_exits_zero() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/resource/PinCommentResource/create/")
        .match_body(Matcher::UrlEncoded("text".into(), "nice".into()))
        .with_status(200)
        .with_body(json!({"status": "success", "data": {}}).to_string())
        .create();

    pinbot(&dir)
        .args(["--base-url", &server.url(), "--session", "s=1", "pins", "comment", "7", "nice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commented on pin 7"));

    mock.assert();
}

#[test]
fn test_create_pin_with_empty_success_payload_exits_zero() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("POST", "/resource/PinResource/create/")
        .with_status(200)
        .with_body(json!({"status": "success", "data": {}}).to_string())
        .create();

    pinbot(&dir)
        .args([
            "--base-url",
            &server.url(),
            "--session",
            "s=1",
            "pins",
            "create",
            "https://img.test/cat.jpg",
            "--board",
            "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created pin"));
}

#[test]
fn test_rejected_comment_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("POST", "/resource/PinCommentResource/create/")
        .with_status(200)
        .with_body(json!({"status": "failure", "message": "comments disabled"}).to_string())
        .create();

    pinbot(&dir)
        .args(["--base-url", &server.url(), "--session", "s=1", "pins", "comment", "7", "hi"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("comments disabled"));
}

#[test]
fn test_config_list_shows_defaults() {
    let dir = TempDir::new().unwrap();
    pinbot(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timeout_secs = 30"))
        .stdout(predicate::str::contains("session = unset"));
}
