// tamu-client/tests/http_integration.rs
// HTTP client + engine against a mock backend.

use mockito::Matcher;
use tamu_client::{
    ClientConfig, ClientError, EventConfig, GuestListEngine, HttpClient, InvitationTemplates,
};

fn guest_json(id: &str, name: &str, shared: bool) -> String {
    format!(
        r#"{{
            "invitation_id": "{id}",
            "guest_name": "{name}",
            "invitation_link": "https://invite.example/{id}",
            "pax_count": 2,
            "total_pax": 2,
            "attended_pax": 0,
            "has_shared_invitation": {shared}
        }}"#
    )
}

fn engine_for(server: &mockito::ServerGuard) -> GuestListEngine<HttpClient> {
    let http = ClientConfig::new(server.url()).build_http_client();
    let templates = InvitationTemplates::new(EventConfig::new(
        "Wulan Asri & Diaz Raviv",
        "https://maps.example/venue",
        "https://invite.example/group",
    ))
    .unwrap();
    GuestListEngine::new(http, templates)
}

#[tokio::test]
async fn refresh_loads_the_collection() {
    let mut server = mockito::Server::new_async().await;
    let list = server
        .mock("GET", "/guests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            "[{},{}]",
            guest_json("g-1", "Ani", false),
            guest_json("g-2", "Budi", true)
        ))
        .create_async()
        .await;

    let mut engine = engine_for(&server);
    engine.refresh().await.unwrap();

    assert_eq!(engine.guests().len(), 2);
    assert_eq!(engine.guests()[1].guest_name, "Budi");
    list.assert_async().await;
}

#[tokio::test]
async fn create_posts_json_then_refreshes() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/guests")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "guest_name": "Ani",
            "pax_count": 2
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(guest_json("g-1", "Ani", false))
        .create_async()
        .await;
    let list = server
        .mock("GET", "/guests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("[{}]", guest_json("g-1", "Ani", false)))
        .expect(1)
        .create_async()
        .await;

    let mut engine = engine_for(&server);
    let payload = shared::GuestCreate {
        guest_name: "Ani".to_string(),
        group_name: None,
        origin: Some("wulan".to_string()),
        pax_count: 2,
    };
    let created = engine.create_guest(&payload).await.unwrap();

    assert_eq!(created.invitation_id, "g-1");
    assert_eq!(engine.guests().len(), 1);
    create.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn failed_create_does_not_refresh() {
    let mut server = mockito::Server::new_async().await;
    let create = server
        .mock("POST", "/guests")
        .with_status(500)
        .with_body("backend down")
        .create_async()
        .await;
    let list = server
        .mock("GET", "/guests")
        .expect(0)
        .create_async()
        .await;

    let mut engine = engine_for(&server);
    let payload = shared::GuestCreate {
        guest_name: "Ani".to_string(),
        group_name: None,
        origin: None,
        pax_count: 2,
    };
    let err = engine.create_guest(&payload).await.unwrap_err();

    assert!(matches!(err, ClientError::Internal(_)));
    assert!(engine.guests().is_empty());
    create.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn mark_shared_hits_the_share_path_then_refreshes() {
    let mut server = mockito::Server::new_async().await;
    let share = server
        .mock("POST", "/guests/shared/g-1")
        .with_status(200)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/guests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("[{}]", guest_json("g-1", "Ani", true)))
        .create_async()
        .await;

    let mut engine = engine_for(&server);
    engine.mark_shared("g-1").await.unwrap();

    assert!(engine.guests()[0].has_shared_invitation);
    share.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn delete_missing_guest_maps_to_not_found() {
    let mut server = mockito::Server::new_async().await;
    let delete = server
        .mock("DELETE", "/guests/missing")
        .with_status(404)
        .with_body("no such guest")
        .create_async()
        .await;
    let list = server
        .mock("GET", "/guests")
        .expect(0)
        .create_async()
        .await;

    let mut engine = engine_for(&server);
    let err = engine.delete_guest("missing").await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
    delete.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn upload_sends_multipart_fields_and_exposes_the_receipt() {
    let mut server = mockito::Server::new_async().await;
    let upload = server
        .mock("POST", "/guests/upload")
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r#"name="file""#.to_string()),
            Matcher::Regex(r#"name="origin""#.to_string()),
            Matcher::Regex("wulan".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"data":[{},{}]}}"#,
            guest_json("u-1", "Upload Satu", false),
            guest_json("u-2", "Upload Dua", false)
        ))
        .create_async()
        .await;
    let list = server
        .mock("GET", "/guests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"fake sheet").unwrap();

    let mut engine = engine_for(&server);
    let count = engine.upload_sheet(file.path(), "wulan").await.unwrap();

    assert_eq!(count, 2);
    assert_eq!(engine.last_upload().len(), 2);
    // The receipt is never merged locally; the snapshot is the list response
    assert!(engine.guests().is_empty());
    upload.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn group_share_patches_the_encoded_group_path() {
    let mut server = mockito::Server::new_async().await;
    let share = server
        .mock("PATCH", "/groups/Keluarga%20Besar/share")
        .with_status(200)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/guests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let mut engine = engine_for(&server);
    engine.mark_group_shared("Keluarga Besar").await.unwrap();

    share.assert_async().await;
    list.assert_async().await;
}
