//
//  pinbot
//  tests/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use mockito::{Matcher, Server};
use serde_json::json;

use pinbot::api::common::Params;
use pinbot::api::providers::{BoardPrivacy, Followable};
use pinbot::api::{ApiError, HttpExecutor, PinClient, Pinbot};
use pinbot::auth::SessionCredential;

fn client(server: &Server) -> PinClient {
    PinClient::new(&server.url()).unwrap()
}

#[test]
fn test_get_sends_params_as_query() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/resource/UserResource/get/")
        .match_query(Matcher::UrlEncoded("username".into(), "alice".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"status": "success", "data": {"username": "alice"}}).to_string())
        .create();

    let raw = client(&server)
        .execute_get("resource/UserResource/get/", Params::new().with("username", "alice"))
        .unwrap();

    mock.assert();
    assert_eq!(raw.data, Some(json!({"username": "alice"})));
}

#[test]
fn test_post_sends_params_as_form() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/resource/PinLikeResource2/create/")
        .match_body(Matcher::UrlEncoded("pin_id".into(), "99".into()))
        .with_status(200)
        .with_body(r#"{"status": "success"}"#)
        .create();

    let raw = client(&server)
        .execute_post("resource/PinLikeResource2/create/", Params::new().with("pin_id", "99"))
        .unwrap();

    mock.assert();
    assert!(raw.status.is_some());
}

#[test]
fn test_cookie_session_is_sent() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/resource/UserResource/get/")
        .match_query(Matcher::Any)
        .match_header("cookie", "_pinterest_sess=abc")
        .with_status(200)
        .with_body(r#"{"status": "success"}"#)
        .create();

    let client = client(&server).with_session(SessionCredential::cookie("_pinterest_sess=abc"));
    client
        .execute_get("resource/UserResource/get/", Params::new())
        .unwrap();

    mock.assert();
}

#[test]
fn test_bearer_session_is_sent() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/resource/UserResource/get/")
        .match_query(Matcher::Any)
        .match_header("authorization", "Bearer tok")
        .with_status(200)
        .with_body(r#"{"status": "success"}"#)
        .create();

    let client = client(&server).with_session(SessionCredential::bearer("tok"));
    client
        .execute_get("resource/UserResource/get/", Params::new())
        .unwrap();

    mock.assert();
}

#[test]
fn test_server_error_is_http_status() {
    let mut server = Server::new();
    server
        .mock("GET", "/resource/UserResource/get/")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"message": "upstream exploded"}"#)
        .create();

    let err = client(&server)
        .execute_get("resource/UserResource/get/", Params::new())
        .unwrap_err();

    match err {
        ApiError::HttpStatus { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unreachable_host_is_transport_error() {
    let client = PinClient::new("http://127.0.0.1:1/").unwrap();
    let err = client
        .execute_get("resource/UserResource/get/", Params::new())
        .unwrap_err();
    assert!(err.is_transport());
}

#[test]
fn test_failure_flag_is_not_an_error() {
    let mut server = Server::new();
    server
        .mock("GET", "/resource/UserResource/get/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status": "failure", "message": "nope"}"#)
        .create();

    let bot = Pinbot::new(client(&server));
    let info = bot.pinners().info("ghost").unwrap();
    assert_eq!(info, None);
}

#[test]
fn test_board_pins_walk_two_pages() {
    let mut server = Server::new();
    let first = server
        .mock("GET", "/resource/BoardFeedResource/get/")
        .match_query(Matcher::Regex("^board_id=42$".into()))
        .with_status(200)
        .with_body(
            json!({"status": "success", "data": [{"id": "1"}, {"id": "2"}], "bookmark": "b2"})
                .to_string(),
        )
        .create();
    let second = server
        .mock("GET", "/resource/BoardFeedResource/get/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("board_id".into(), "42".into()),
            Matcher::UrlEncoded("bookmark".into(), "b2".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({"status": "success", "data": [{"id": "3"}], "bookmark": "-end-"}).to_string(),
        )
        .create();

    let bot = Pinbot::new(client(&server));
    let ids: Vec<String> = bot
        .boards()
        .pins("42", 0)
        .map(|pin| pin.unwrap()["id"].as_str().unwrap().to_string())
        .collect();

    first.assert();
    second.assert();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn test_board_pins_limit_stops_before_next_page() {
    let mut server = Server::new();
    let first = server
        .mock("GET", "/resource/BoardFeedResource/get/")
        .match_query(Matcher::Regex("^board_id=42$".into()))
        .with_status(200)
        .with_body(
            json!({"status": "success", "data": [{"id": "1"}, {"id": "2"}], "bookmark": "b2"})
                .to_string(),
        )
        .expect(1)
        .create();
    let second = server
        .mock("GET", "/resource/BoardFeedResource/get/")
        .match_query(Matcher::UrlEncoded("bookmark".into(), "b2".into()))
        .expect(0)
        .create();

    let bot = Pinbot::new(client(&server));
    let pins: Vec<_> = bot.boards().pins("42", 2).collect();

    first.assert();
    second.assert();
    assert_eq!(pins.len(), 2);
}

#[test]
fn test_create_board_without_session_makes_no_request() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create();

    let bot = Pinbot::new(client(&server));
    let err = bot
        .boards()
        .create("Recipes", "", BoardPrivacy::Public)
        .unwrap_err();

    mock.assert();
    assert!(err.is_auth_required());
}

#[test]
fn test_follow_board_with_session() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/resource/BoardFollowResource/create/")
        .match_body(Matcher::UrlEncoded("board_id".into(), "42".into()))
        .with_status(200)
        .with_body(r#"{"status": "success"}"#)
        .create();

    let bot = Pinbot::new(client(&server).with_session(SessionCredential::cookie("s=1")));
    assert!(bot.boards().follow("42").unwrap());
    mock.assert();
}
