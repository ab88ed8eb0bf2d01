use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{DbErr, EntityTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use super::router;
use crate::server::{
    config::Config,
    service::mail::LogMailer,
    state::AppState,
    util::password::hash_password,
};

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        secret_key: "router-test-secret".to_string(),
        app_name: "garment-tracker".to_string(),
        company_name: "Test Garments".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        cors_origins: Vec::new(),
        token_ttl_days: 1,
        mail_admin: None,
        mail_api_url: None,
        mail_password: None,
        admin_email: None,
        admin_password: None,
    }
}

async fn setup() -> (TestContext, AppState) {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_product_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();
    let state = AppState::new(db, test_config(), Arc::new(LogMailer));

    (test, state)
}

/// Issues a token for a new user, holding the `admin` role when `admin` is set.
async fn token_for(state: &AppState, admin: bool) -> Result<String, DbErr> {
    let user = if admin {
        factory::helpers::create_user_with_role(&state.db, "admin")
            .await?
            .0
    } else {
        factory::create_user(&state.db).await?
    };

    Ok(state.tokens.issue(&user).unwrap())
}

async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

/// Tests that the health route answers without a token.
///
/// Expected: 200 with the configured name
#[tokio::test]
async fn health_is_public() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let app = router(state);

    let (status, body) = call(&app, Method::GET, "/api/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "garment-tracker");

    Ok(())
}

/// Tests that resource routes refuse requests without a token.
///
/// Expected: 401 failure envelope
#[tokio::test]
async fn protected_routes_require_token() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let app = router(state);

    let (status, body) = call(&app, Method::GET, "/api/products/1", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["success"], false);

    let (status, _) = call(&app, Method::GET, "/api/products/1", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests logging in and using the returned token.
///
/// Expected: login 200 with an accessToken that opens `GET /api/users/users`
#[tokio::test]
async fn login_token_opens_protected_routes() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let user = factory::user::UserFactory::new(&state.db)
        .email("cutter@example.com")
        .password_hash(hash_password("stitch-me").unwrap())
        .build()
        .await?;
    let app = router(state);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/users/auth/login",
        None,
        Some(json!({ "email": "Cutter@Example.com", "password": "stitch-me" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successfully!");
    let token = body["data"]["accessToken"].as_str().unwrap().to_string();

    let (status, body) = call(&app, Method::GET, "/api/users/users", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], user.id);
    assert!(body["data"].get("password").is_none());

    Ok(())
}

/// Tests that a wrong password is refused.
///
/// Expected: 401 "Password is not correct!"
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    factory::user::UserFactory::new(&state.db)
        .email("packer@example.com")
        .password_hash(hash_password("right").unwrap())
        .build()
        .await?;
    let app = router(state);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/users/login",
        None,
        Some(json!({ "email": "packer@example.com", "password": "wrong" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Password is not correct!");

    Ok(())
}

/// Tests creating a product and reading it back, then reading a missing id.
///
/// Expected: 201 with status defaulted to active, 200 on read, 404 for the missing id
#[tokio::test]
async fn create_then_get_product() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let token = token_for(&state, false).await?;
    let app = router(state);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/products",
        Some(&token),
        Some(json!({ "productCode": "PO-9001", "quantityPO": 1500 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Created!");
    assert_eq!(body["data"]["status"], "active");
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = call(
        &app,
        Method::GET,
        &format!("/api/products/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["productCode"], "PO-9001");

    let (status, body) = call(&app, Method::GET, "/api/products/999", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    Ok(())
}

/// Tests that a create body missing a required field is refused.
///
/// Expected: 400 listing `productCode` under `meta.errors`
#[tokio::test]
async fn create_reports_missing_fields() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let token = token_for(&state, false).await?;
    let app = router(state);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/products",
        Some(&token),
        Some(json!({ "quantityPO": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["meta"]["errors"][0]["field"], "productCode");

    Ok(())
}

/// Tests the list envelope of a find request.
///
/// Expected: 200 with length, page, pageSize and total set
#[tokio::test]
async fn find_returns_paging_members() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    for _ in 0..3 {
        factory::create_product(&state.db).await?;
    }
    let token = token_for(&state, false).await?;
    let app = router(state);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/products/find",
        Some(&token),
        Some(json!({ "paginator": { "page": 1, "pageSize": 2 } })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["length"], 2);
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 2);
    assert_eq!(body["total"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    Ok(())
}

/// Tests upserting a product by code twice.
///
/// Expected: 201 on the first call, 200 with the new quantity on the second
#[tokio::test]
async fn upsert_by_code_creates_then_updates() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let token = token_for(&state, false).await?;
    let app = router(state);
    let uri = "/api/products/createOrUpdate/productCode/PO-77";

    let (status, body) = call(
        &app,
        Method::POST,
        uri,
        Some(&token),
        Some(json!({ "quantityPO": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["productCode"], "PO-77");
    let id = body["data"]["id"].clone();

    let (status, body) = call(
        &app,
        Method::POST,
        uri,
        Some(&token),
        Some(json!({ "quantityPO": 20 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Updated!");
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["quantityPO"], 20.0);

    Ok(())
}

/// Tests syncing a product's sewing line deliveries over HTTP.
///
/// Expected: 200 with only the submitted lines left
#[tokio::test]
async fn sync_replaces_delivery_list() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let product = factory::create_product(&state.db).await?;
    let kept = factory::create_sewing_line(&state.db).await?;
    let dropped = factory::create_sewing_line(&state.db).await?;
    let added = factory::create_sewing_line(&state.db).await?;
    factory::create_delivery(&state.db, product.id, kept.id).await?;
    factory::create_delivery(&state.db, product.id, dropped.id).await?;
    let token = token_for(&state, false).await?;
    let app = router(state);

    let (status, body) = call(
        &app,
        Method::POST,
        &format!("/api/sewing-line-deliveries/updateItems/productID/{}", product.id),
        Some(&token),
        Some(json!([
            { "productID": product.id, "sewingLineID": kept.id, "quantitySewed": 8 },
            { "productID": product.id, "sewingLineID": added.id, "quantitySewed": 3 },
        ])),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let lines: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["sewingLineID"].as_i64().unwrap())
        .collect();
    assert_eq!(lines, vec![kept.id as i64, added.id as i64]);
    assert_eq!(body["length"], 2);

    Ok(())
}

/// Tests patching one product and bulk updating over `PUT /api/products`.
///
/// Expected: PATCH 200 with the new quantity; PUT 200 listing only the known id,
/// and 400 on an item without id
#[tokio::test]
async fn product_patch_and_bulk_update() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let product = factory::create_product(&state.db).await?;
    let token = token_for(&state, false).await?;
    let app = router(state);

    let (status, body) = call(
        &app,
        Method::PATCH,
        &format!("/api/products/{}", product.id),
        Some(&token),
        Some(json!({ "quantityPO": 300 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["quantityPO"], 300.0);
    assert_eq!(body["data"]["productCode"], product.product_code);

    let (status, body) = call(
        &app,
        Method::PUT,
        "/api/products",
        Some(&token),
        Some(json!([
            { "id": product.id, "quantityPO": 400 },
            { "id": product.id + 100, "quantityPO": 500 },
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["length"], 1);
    assert_eq!(body["data"][0]["quantityPO"], 400.0);

    let (status, body) = call(
        &app,
        Method::PUT,
        "/api/products",
        Some(&token),
        Some(json!([{ "quantityPO": 1 }])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["meta"]["errors"][0]["field"], "items[0].id");

    Ok(())
}

/// Tests that reads embed related rows while writes do not.
///
/// Expected: `product` and `sewingLine` on get by id, by key and find; absent on create
#[tokio::test]
async fn reads_embed_related_rows() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let product = factory::create_product(&state.db).await?;
    let line = factory::create_sewing_line(&state.db).await?;
    let token = token_for(&state, false).await?;
    let app = router(state);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/sewing-line-deliveries",
        Some(&token),
        Some(json!({ "productID": product.id, "sewingLineID": line.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"].get("product").is_none());
    let id = body["data"]["id"].as_i64().unwrap();

    let (_, body) = call(
        &app,
        Method::GET,
        &format!("/api/sewing-line-deliveries/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body["data"]["product"]["productCode"], product.product_code);
    assert_eq!(body["data"]["sewingLine"]["id"], line.id);

    let (_, body) = call(
        &app,
        Method::GET,
        &format!("/api/sewing-line-deliveries/sewingLineID/{}", line.id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(body["data"]["product"]["id"], product.id);

    let (_, body) = call(
        &app,
        Method::POST,
        "/api/sewing-line-deliveries/find",
        Some(&token),
        Some(json!({})),
    )
    .await;
    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["sewingLine"]["id"], line.id);

    Ok(())
}

/// Tests that an embedded user never carries credentials.
///
/// Expected: `user` with the email but without password, and `role` filled
#[tokio::test]
async fn embedded_user_hides_credentials() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let (user, role, assignment) =
        factory::helpers::create_user_with_role(&state.db, "cutter").await?;
    let token = state.tokens.issue(&user).unwrap();
    let app = router(state);

    let (status, body) = call(
        &app,
        Method::GET,
        &format!("/api/user-roles/{}", assignment.id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["user"]["email"], user.email);
    assert!(body["data"]["user"].get("password").is_none());
    assert_eq!(body["data"]["role"]["role"], role.role);

    Ok(())
}

/// Tests that role mutations need the admin role.
///
/// Expected: 403 for an ordinary user, 201 for an administrator
#[tokio::test]
async fn role_writes_require_admin() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let user_token = token_for(&state, false).await?;
    let admin_token = token_for(&state, true).await?;
    let app = router(state);
    let body = json!({ "role": "sewer", "shortName": "Sewer" });

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/roles",
        Some(&user_token),
        Some(body.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, response) = call(&app, Method::POST, "/api/roles", Some(&admin_token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["data"]["role"], "sewer");

    Ok(())
}

/// Tests that an ordinary user cannot take over another account.
///
/// Expected: 403 when changing the admin's password by id or email, the
/// admin's password unchanged, and 403 when changing their own status
#[tokio::test]
async fn user_edits_are_limited_to_self() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let (admin, _, _) = factory::helpers::create_user_with_role(&state.db, "admin").await?;
    let plain = factory::create_user(&state.db).await?;
    let token = state.tokens.issue(&plain).unwrap();
    let app = router(state.clone());

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/api/users/{}", admin.id),
        Some(&token),
        Some(json!({ "password": "taken-over" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["success"], false);

    let (status, _) = call(
        &app,
        Method::PUT,
        &format!("/api/users/email/{}", admin.email.to_uppercase()),
        Some(&token),
        Some(json!({ "password": "taken-over" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let stored = entity::user::Entity::find_by_id(admin.id)
        .one(&state.db)
        .await?
        .unwrap();
    assert_eq!(stored.password, admin.password);

    let (status, _) = call(
        &app,
        Method::PUT,
        &format!("/api/users/{}", plain.id),
        Some(&token),
        Some(json!({ "status": "inactive" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    Ok(())
}

/// Tests that a user may edit their own record and an admin anyone's.
///
/// Expected: 200 for the own name change, 200 for the admin's status change
#[tokio::test]
async fn user_edits_allowed_for_self_and_admin() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let plain = factory::create_user(&state.db).await?;
    let token = state.tokens.issue(&plain).unwrap();
    let admin_token = token_for(&state, true).await?;
    let app = router(state);

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/api/users/email/{}", plain.email),
        Some(&token),
        Some(json!({ "fullName": "Renamed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["fullName"], "Renamed");

    let (status, body) = call(
        &app,
        Method::PUT,
        &format!("/api/users/{}", plain.id),
        Some(&admin_token),
        Some(json!({ "status": "inactive" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "inactive");

    Ok(())
}

/// Tests that unknown paths and methods answer with the failure envelope.
///
/// Expected: 404 "Not found!" and 405 "Method not allowed!", both unsuccessful
#[tokio::test]
async fn unmatched_requests_use_envelope() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let app = router(state);

    let (status, body) = call(&app, Method::GET, "/api/nowhere", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Not found!");

    let (status, body) = call(&app, Method::DELETE, "/api/health", None, None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Method not allowed!");

    Ok(())
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 listing the login path
#[tokio::test]
async fn serves_openapi_document() -> Result<(), DbErr> {
    let (_test, state) = setup().await;
    let app = router(state);

    let (status, body) = call(&app, Method::GET, "/api/docs/openapi.json", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/api/users/auth/login").is_some());

    Ok(())
}
