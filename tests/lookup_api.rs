mod common;

use actix_web::http::StatusCode;
use actix_web::{test, App};
use serde_json::{json, Value};

#[actix_web::test]
async fn created_gender_can_be_fetched_by_id() {
    let ctx = common::context().await;
    let app = test::init_service(App::new().configure(ctx.routes())).await;

    let req = test::TestRequest::post()
        .uri("/jeniskelamin")
        .set_json(json!({ "jenis_kelamin": "Perempuan" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["message"], "Successfully create Jenis Kelamin");
    assert_eq!(created["data"]["jenis_kelamin"], "Perempuan");

    let id = created["data"]["id"].as_i64().unwrap();
    let req = test::TestRequest::get()
        .uri(&format!("/jeniskelamin/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["message"], format!("Successfully get Jenis Kelamin by ID : {}", id));
    assert_eq!(fetched["data"], created["data"]);
}

#[actix_web::test]
async fn update_only_changes_submitted_label() {
    let ctx = common::context().await;
    let app = test::init_service(App::new().configure(ctx.routes())).await;

    let req = test::TestRequest::post()
        .uri("/statuspegawai")
        .set_json(json!({ "status_pegawai": "Tetap" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["data"]["id"].as_i64().unwrap();
    let uri = format!("/statuspegawai/{}", id);

    let req = test::TestRequest::put().uri(&uri).set_json(json!({})).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status_pegawai"], "Tetap");
    assert_eq!(body["data"]["created_at"], created["data"]["created_at"]);

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "status_pegawai": "Kontrak" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status_pegawai"], "Kontrak");

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "status_pegawai": "   " }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["status_pegawai"], "Kontrak");
}

#[actix_web::test]
async fn deleted_employee_type_is_gone() {
    let ctx = common::context().await;
    let app = test::init_service(App::new().configure(ctx.routes())).await;

    let req = test::TestRequest::post()
        .uri("/jenispegawai")
        .set_json(json!({ "jenis_pegawai": "PNS" }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/jenispegawai/{}", created["data"]["id"]);

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Jenis Pegawai not found");

    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn list_filters_on_label_substring() {
    let ctx = common::context().await;
    let app = test::init_service(App::new().configure(ctx.routes())).await;

    for label in ["PNS", "Honorer", "PPPK"] {
        let req = test::TestRequest::post()
            .uri("/jenispegawai")
            .set_json(json!({ "jenis_pegawai": label }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/jenispegawai").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["filter"], "");

    let req = test::TestRequest::get().uri("/jenispegawai?search=ono").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["jenis_pegawai"], "Honorer");
    assert_eq!(body["filter"], "ono");

    // Wildcards are matched literally.
    let req = test::TestRequest::get().uri("/jenispegawai?search=%25").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn bad_input_is_rejected_with_400() {
    let ctx = common::context().await;
    let app = test::init_service(App::new().configure(ctx.routes())).await;

    let req = test::TestRequest::post()
        .uri("/jeniskelamin")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "jenis_kelamin is required");

    let req = test::TestRequest::post()
        .uri("/jeniskelamin")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get().uri("/jeniskelamin/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid ID");
}

#[actix_web::test]
async fn updating_unknown_id_is_not_found() {
    let ctx = common::context().await;
    let app = test::init_service(App::new().configure(ctx.routes())).await;

    let req = test::TestRequest::put()
        .uri("/jeniskelamin/42")
        .set_json(json!({ "jenis_kelamin": "Laki-laki" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
