use crate::error::FetchError;
use super::common::{ self, mocks::{ direct_client, refused_url, StubServer } };

#[tokio::test]
async fn test_fetch_posts_decodes_array_in_order() {
    common::setup();
    let server = StubServer::ok_json(
        r#"[{"userId":1,"id":2,"title":"second","body":"b2"},{"userId":1,"id":1,"title":"first","body":"b1"}]"#
    ).await;

    let posts = direct_client(server.url.clone()).fetch_posts().await.unwrap();

    assert_eq!(posts, vec![common::post(2, "second", "b2"), common::post(1, "first", "b1")]);
}

#[tokio::test]
async fn test_fetch_posts_accepts_empty_array() {
    common::setup();
    let server = StubServer::ok_json("[]").await;
    let posts = direct_client(server.url.clone()).fetch_posts().await.unwrap();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_uniform_failure() {
    common::setup();
    let server = StubServer::respond("404 Not Found", "{}").await;

    let err = direct_client(server.url.clone()).fetch_posts().await.unwrap_err();

    assert_eq!(err, FetchError::Status(404));
    assert_eq!(err.to_string(), "Network response was not ok");
}

#[tokio::test]
async fn test_server_error_status_is_uniform_failure() {
    common::setup();
    let server = StubServer::respond("500 Internal Server Error", "[]").await;
    let err = direct_client(server.url.clone()).fetch_posts().await.unwrap_err();
    assert_eq!(err.to_string(), "Network response was not ok");
}

#[tokio::test]
async fn test_malformed_body_is_decode_failure() {
    common::setup();
    let server = StubServer::ok_json("<html>oops</html>").await;
    let err = direct_client(server.url.clone()).fetch_posts().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_unreachable_host_is_transport_failure() {
    common::setup();
    let err = direct_client(refused_url()).fetch_posts().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "got {:?}", err);
    assert!(!err.to_string().is_empty());
}
