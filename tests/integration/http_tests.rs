//! HTTP routes through the full application stack

use crate::common::TestDatabase;
use crate::common::fixtures::{
    MIXED_GEOJSON, STRONG_PASSWORD, app_state, bearer, create_user, create_user_with_password,
    new_claim, new_deposit,
};
use actix_web::http::StatusCode;
use actix_web::test;
use georesource_explorer::HttpServer;
use georesource_explorer::core::models::UserRole;
use serde_json::{Value, json};

const BOUNDARY: &str = "----georesource-test-boundary";

/// `multipart/form-data` body with a file part and optional extra text fields
fn multipart_body(filename: &str, content: &str, fields: &[(&str, &str)]) -> Vec<u8> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    body.push_str(&format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n{content}\r\n--{BOUNDARY}--\r\n"
    ));
    body.into_bytes()
}

fn multipart_request(uri: &str, body: Vec<u8>) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        ))
        .set_payload(body)
}

#[actix_web::test]
async fn test_health_and_security_headers() {
    let db = TestDatabase::new().await;
    let app = test::init_service(HttpServer::create_app(app_state(&db))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(resp.headers().get("x-frame-options").unwrap(), "SAMEORIGIN");

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], true);
}

#[actix_web::test]
async fn test_role_table_is_public() {
    let db = TestDatabase::new().await;
    let app = test::init_service(HttpServer::create_app(app_state(&db))).await;

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/roles").to_request(),
    )
    .await;
    let roles = body["data"].as_array().unwrap();
    assert_eq!(roles.len(), 5);
    assert_eq!(roles[0]["role"], "viewer");
    assert!(
        roles[1]["permissions"]
            .as_array()
            .unwrap()
            .contains(&json!("add_deposits"))
    );
}

#[actix_web::test]
async fn test_register_login_and_profile() {
    let db = TestDatabase::new().await;
    let app = test::init_service(HttpServer::create_app(app_state(&db))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/register")
            .set_json(json!({
                "username": "field_geo",
                "password": STRONG_PASSWORD,
                "confirm": STRONG_PASSWORD,
                "role": "geologist",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({"username": "field_geo", "password": STRONG_PASSWORD}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = resp
        .response()
        .cookies()
        .find(|c| c.name() == "session")
        .expect("session cookie")
        .into_owned();
    assert_eq!(cookie.http_only(), Some(true));

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/auth/me").cookie(cookie).to_request(),
    )
    .await;
    assert_eq!(body["data"]["user"]["role"], "geologist");
    assert!(
        body["data"]["permissions"]
            .as_array()
            .unwrap()
            .contains(&json!("add_deposits"))
    );
}

#[actix_web::test]
async fn test_register_cannot_pick_admin() {
    let db = TestDatabase::new().await;
    let app = test::init_service(HttpServer::create_app(app_state(&db))).await;

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/auth/register")
            .set_json(json!({
                "username": "wannabe",
                "password": STRONG_PASSWORD,
                "confirm": STRONG_PASSWORD,
                "role": "admin",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(body["data"]["role"], "viewer");
}

#[actix_web::test]
async fn test_login_with_wrong_password() {
    let db = TestDatabase::new().await;
    create_user_with_password(db.db(), "geo", STRONG_PASSWORD, UserRole::Geologist).await;
    let app = test::init_service(HttpServer::create_app(app_state(&db))).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({"username": "geo", "password": "Wr0ng!Password"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_import_requires_admin() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let geologist = create_user(db.db(), "geo", UserRole::Geologist).await;
    let app = test::init_service(HttpServer::create_app(state.clone())).await;

    let anonymous = multipart_request(
        "/admin/geospatial/import-deposits",
        multipart_body("deposits.geojson", MIXED_GEOJSON, &[]),
    );
    let resp = test::call_service(&app, anonymous.to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let signed_in = multipart_request(
        "/admin/geospatial/import-deposits",
        multipart_body("deposits.geojson", MIXED_GEOJSON, &[]),
    )
    .insert_header(bearer(&state, &geologist));
    let resp = test::call_service(&app, signed_in.to_request()).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    assert_eq!(db.db().stats().await.unwrap().deposits, 0);
}

#[actix_web::test]
async fn test_admin_import_returns_flat_summary() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let admin = create_user(db.db(), "root", UserRole::Admin).await;
    let app = test::init_service(HttpServer::create_app(state.clone())).await;

    let req = multipart_request(
        "/admin/geospatial/import-deposits",
        multipart_body("deposits.geojson", MIXED_GEOJSON, &[("mineral_type_id", "1")]),
    )
    .insert_header(bearer(&state, &admin));
    let body: Value = test::call_and_read_body_json(&app, req.to_request()).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Imported 3 deposits");
    assert_eq!(body["inserted"], 3);
    assert_eq!(body["duplicates"], 0);
    assert_eq!(body["total"], 3);
}

#[actix_web::test]
async fn test_import_rejects_unsupported_extension() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let admin = create_user(db.db(), "root", UserRole::Admin).await;
    let app = test::init_service(HttpServer::create_app(state.clone())).await;

    let req = multipart_request(
        "/admin/geospatial/import-claims",
        multipart_body("claims.txt", "claim_id\nWA-1\n", &[]),
    )
    .insert_header(bearer(&state, &admin));
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "UNSUPPORTED_FILE_TYPE");
}

#[actix_web::test]
async fn test_deposit_edit_guard() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let owner = create_user(db.db(), "owner", UserRole::Geologist).await;
    let other = create_user(db.db(), "other", UserRole::Geologist).await;
    let app = test::init_service(HttpServer::create_app(state.clone())).await;

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/deposits")
            .insert_header(bearer(&state, &owner))
            .set_json(json!({"name": "Olympic Dam", "latitude": -30.44, "longitude": 136.88}))
            .to_request(),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["status"], "Prospect");

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/deposits/{}", id))
            .insert_header(bearer(&state, &other))
            .set_json(json!({"status": "Producing"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // a missing record looks the same as someone else's
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/deposits/999")
            .insert_header(bearer(&state, &other))
            .set_json(json!({"status": "Producing"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let updated: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::put()
            .uri(&format!("/deposits/{}", id))
            .insert_header(bearer(&state, &owner))
            .set_json(json!({"status": "Producing"}))
            .to_request(),
    )
    .await;
    assert_eq!(updated["data"]["status"], "Producing");
}

#[actix_web::test]
async fn test_deposit_creation_needs_permission() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let viewer = create_user(db.db(), "viewer", UserRole::Viewer).await;
    let app = test::init_service(HttpServer::create_app(state.clone())).await;
    let payload = json!({"name": "Nowhere", "latitude": 1.0, "longitude": 1.0});

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/deposits")
            .set_json(&payload)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/deposits")
            .insert_header(bearer(&state, &viewer))
            .set_json(&payload)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_claim_creation_and_conflict() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let explorer = create_user(db.db(), "explorer", UserRole::Explorer).await;
    let app = test::init_service(HttpServer::create_app(state.clone())).await;
    let payload = json!({"claim_id": "WA-777", "company_name": "Acme Mining"});

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/claims")
            .insert_header(bearer(&state, &explorer))
            .set_json(&payload)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/claims")
            .insert_header(bearer(&state, &explorer))
            .set_json(&payload)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/claims/WA-777").to_request(),
    )
    .await;
    assert_eq!(body["data"]["owner_id"], json!(explorer.id));
    assert_eq!(body["data"]["claim_type"], "Exploration");
}

#[actix_web::test]
async fn test_catalog_requires_login() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let viewer = create_user(db.db(), "viewer", UserRole::Viewer).await;
    let app = test::init_service(HttpServer::create_app(state.clone())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/minerals").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/minerals?page=1")
            .insert_header(bearer(&state, &viewer))
            .to_request(),
    )
    .await;
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["total"], 0);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/learn").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_dashboard_for_geologist() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let geologist = create_user(db.db(), "geo", UserRole::Geologist).await;
    db.db()
        .create_deposit(&new_deposit("Olympic Dam", -30.44, 136.88, Some(geologist.id)))
        .await
        .unwrap();
    let app = test::init_service(HttpServer::create_app(state.clone())).await;

    let body: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/dashboard")
            .insert_header(bearer(&state, &geologist))
            .to_request(),
    )
    .await;
    assert_eq!(body["data"]["role"], "geologist");
    assert_eq!(body["data"]["recent_deposits"].as_array().unwrap().len(), 1);
    assert!(body["data"].get("recent_claims").is_none());
}

#[actix_web::test]
async fn test_claim_delete_guard() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let owner = create_user(db.db(), "owner", UserRole::Explorer).await;
    let other = create_user(db.db(), "other", UserRole::Explorer).await;
    let app = test::init_service(HttpServer::create_app(state.clone())).await;

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/claims")
            .insert_header(bearer(&state, &owner))
            .set_json(json!({"claim_id": "WA-900"}))
            .to_request(),
    )
    .await;
    let id = created["data"]["id"].as_i64().unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/claims/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/claims/{}", id))
            .insert_header(bearer(&state, &other))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/claims/{}", id))
            .insert_header(bearer(&state, &owner))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/claims/WA-900").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_admin_mineral_and_lesson_management() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let admin = create_user(db.db(), "root", UserRole::Admin).await;
    let geologist = create_user(db.db(), "geo", UserRole::Geologist).await;
    let app = test::init_service(HttpServer::create_app(state.clone())).await;
    let hematite = json!({"name": "Hematite", "formula": "Fe2O3", "countries": "Australia, Brazil"});

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/admin/minerals")
            .insert_header(bearer(&state, &geologist))
            .set_json(&hematite)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let created: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/admin/minerals")
            .insert_header(bearer(&state, &admin))
            .set_json(&hematite)
            .to_request(),
    )
    .await;
    let mineral_id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["formula"], "Fe2O3");

    let updated: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::put()
            .uri(&format!("/admin/minerals/{}", mineral_id))
            .insert_header(bearer(&state, &admin))
            .set_json(json!({"name": "Hematite", "uses": "Iron ore"}))
            .to_request(),
    )
    .await;
    assert_eq!(updated["data"]["uses"], "Iron ore");
    assert_eq!(updated["data"]["formula"], Value::Null);

    let lesson: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/admin/learning")
            .insert_header(bearer(&state, &admin))
            .set_json(json!({
                "title": "Banded iron formations",
                "category": "deposits",
                "content": "How iron settled out of ancient oceans.",
                "related_minerals": "Hematite"
            }))
            .to_request(),
    )
    .await;
    let lesson_id = lesson["data"]["id"].as_i64().unwrap();
    assert_eq!(lesson["data"]["difficulty_level"], "beginner");

    let detail: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/minerals/{}", mineral_id))
            .insert_header(bearer(&state, &geologist))
            .to_request(),
    )
    .await;
    assert_eq!(detail["data"]["lessons"].as_array().unwrap().len(), 1);

    for uri in [
        format!("/admin/learning/{}", lesson_id),
        format!("/admin/minerals/{}", mineral_id),
    ] {
        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&uri)
                .insert_header(bearer(&state, &admin))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri(&format!("/learn/{}", lesson_id)).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_admin_status_summaries() {
    let db = TestDatabase::new().await;
    let state = app_state(&db);
    let admin = create_user(db.db(), "root", UserRole::Admin).await;
    let explorer = create_user(db.db(), "explorer", UserRole::Explorer).await;

    let mut historical = new_deposit("Kalgoorlie Battery", -30.75, 121.47, None);
    historical.status = "Historical".to_string();
    db.db().create_deposit(&historical).await.unwrap();
    db.db()
        .create_deposit(&new_deposit("Olympic Dam", -30.44, 136.88, None))
        .await
        .unwrap();
    let mut expired = new_claim("WA-1", None, None);
    expired.status = "Expired".to_string();
    db.db().create_claim(&expired).await.unwrap();
    db.db().create_claim(&new_claim("WA-2", None, None)).await.unwrap();
    let app = test::init_service(HttpServer::create_app(state.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/admin/geospatial/claims-summary")
            .insert_header(bearer(&state, &explorer))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let deposits: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/admin/geospatial/deposits-summary")
            .insert_header(bearer(&state, &admin))
            .to_request(),
    )
    .await;
    assert_eq!(
        deposits["data"],
        json!({"total": 2, "active": 0, "prospect": 1, "historical": 1})
    );

    let claims: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/admin/geospatial/claims-summary")
            .insert_header(bearer(&state, &admin))
            .to_request(),
    )
    .await;
    assert_eq!(
        claims["data"],
        json!({"total": 2, "active": 1, "inactive": 0, "expired": 1})
    );
}
