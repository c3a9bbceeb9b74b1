//! The REST surface driven through the router without a socket.

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{setup, TestApp};
use dorm_service::application::{DefaultAdmin, UserInput};
use dorm_service::create_api_router;
use dorm_service::domain::UserRole;

async fn app_with_admin() -> (TestApp, Router) {
    let app = setup().await;
    app.users
        .ensure_default_admin(&DefaultAdmin::default())
        .await
        .unwrap();
    let router = create_api_router(app.state());
    (app, router)
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let req = match body {
        Some(body) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    let resp = router.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn login(router: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        router,
        "POST",
        "/api/login",
        None,
        Some(json!({"username": username, "password": password})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn login_issues_a_bearer_token() {
    let (_app, router) = app_with_admin().await;
    let (status, body) = send(
        &router,
        "POST",
        "/api/login",
        None,
        Some(json!({"username": "admin", "password": "admin123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tokenType"], "Bearer");
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["user"].get("passwordHash").is_none());

    let (status, body) = send(
        &router,
        "POST",
        "/api/login",
        None,
        Some(json!({"username": "admin", "password": "wrong"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"success": false, "data": null, "error": "用户名或密码错误"}));
}

#[tokio::test]
async fn protected_routes_require_a_valid_token() {
    let (_app, router) = app_with_admin().await;

    let (status, body) = send(&router, "GET", "/api/buildings", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "缺少令牌");

    let (status, body) = send(&router, "GET", "/api/buildings", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "令牌无效");

    let (status, body) = send(&router, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], true);
}

#[tokio::test]
async fn crud_flow_and_error_envelope() {
    let (_app, router) = app_with_admin().await;
    let token = login(&router, "admin", "admin123").await;
    let token = Some(token.as_str());

    let (status, building) = send(
        &router,
        "POST",
        "/api/buildings",
        token,
        Some(json!({"buildingNo": "A1", "floorCount": 6, "roomCount": 60, "startedAt": "2020-09-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", building);
    let building_id = building["id"].as_i64().unwrap();

    let (status, room) = send(
        &router,
        "POST",
        "/api/rooms",
        token,
        Some(json!({"roomNo": "101", "capacity": 1, "fee": 800.0, "buildingID": building_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", room);
    let room_id = room["id"].as_i64().unwrap();

    let student = |no: &str| {
        json!({
            "studentNo": no,
            "name": "李四",
            "gender": "男",
            "buildingID": building_id,
            "roomID": room_id
        })
    };
    let (status, first) = send(&router, "POST", "/api/students", token, Some(student("S1"))).await;
    assert_eq!(status, StatusCode::OK, "{}", first);
    assert_eq!(first["roomID"], room_id);

    let (status, body) = send(&router, "POST", "/api/students", token, Some(student("S2"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"success": false, "data": null, "error": "寝室人数已满"}));

    let (status, page) = send(
        &router,
        "GET",
        &format!("/api/students?buildingID={}&page=1&pageSize=10", building_id),
        token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["total"], 1);
    assert_eq!(page["items"][0]["studentNo"], "S1");

    let (status, bare) = send(&router, "GET", "/api/rooms", token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(bare.is_array());

    let (status, stats) = send(&router, "GET", "/api/stats/building-occupancy", token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats[0]["occupancyRate"], 100.0);

    let (status, body) = send(&router, "DELETE", "/api/students/9999", token, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);

    let (status, body) = send(
        &router,
        "DELETE",
        &format!("/api/students/{}", first["id"]),
        token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn malformed_input_is_a_bad_request() {
    let (_app, router) = app_with_admin().await;
    let token = login(&router, "admin", "admin123").await;

    let (status, body) = send(
        &router,
        "POST",
        "/api/buildings",
        Some(&token),
        Some(json!({"buildingNo": "A1", "floorCount": 6, "roomCount": 1, "startedAt": "yesterday"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "启用时间格式应为YYYY-MM-DD");
}

#[tokio::test]
async fn only_admins_manage_accounts() {
    let (app, router) = app_with_admin().await;
    app.users
        .create(UserInput {
            username: "clerk".into(),
            name: "前台".into(),
            password: "clerk123".into(),
            role: UserRole::Viewer,
        })
        .await
        .unwrap();

    let viewer = login(&router, "clerk", "clerk123").await;
    let (status, users) = send(&router, "GET", "/api/users", Some(&viewer), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(users.as_array().map(Vec::len), Some(2));

    let new_user = json!({"username": "ops", "password": "ops12345", "role": "operator"});
    let (status, body) = send(&router, "POST", "/api/users", Some(&viewer), Some(new_user.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "权限不足");

    let admin = login(&router, "admin", "admin123").await;
    let (status, body) = send(&router, "POST", "/api/users", Some(&admin), Some(new_user)).await;
    assert_eq!(status, StatusCode::OK, "{}", body);
    assert_eq!(body["role"], "operator");

    let (status, body) = send(
        &router,
        "POST",
        "/api/users",
        Some(&admin),
        Some(json!({"username": "ops", "password": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "编号已存在");
}
