// Integration tests for the /api/v1/categorias endpoints.
//
// Each test boots the actix application with the controller and service wired
// to a fresh in-memory repository, then drives it over HTTP.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use categorias_api::modules::categorias::controllers::categoria_controller;

macro_rules! test_app {
    ($service:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($service.clone()))
                .service(web::scope("/api/v1").configure(categoria_controller::configure)),
        )
        .await
    };
}

#[actix_web::test]
async fn test_full_crud_lifecycle() {
    let service = helpers::categoria_service();
    let app = test_app!(service);

    // Create
    let req = test::TestRequest::post()
        .uri("/api/v1/categorias")
        .set_json(json!({"nombre": "Libros"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created, json!({"id": 1, "nombre": "Libros"}));

    // Read back
    let req = test::TestRequest::get().uri("/api/v1/categorias/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, created);

    // Update; the body id must lose against the path id
    let req = test::TestRequest::put()
        .uri("/api/v1/categorias/1")
        .set_json(json!({"id": 99, "nombre": "Libros y Revistas"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated, json!({"id": 1, "nombre": "Libros y Revistas"}));

    // Delete
    let req = test::TestRequest::delete().uri("/api/v1/categorias/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());

    // Gone
    let req = test::TestRequest::get().uri("/api/v1/categorias/1").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_get_unknown_id_returns_empty_404() {
    let service = helpers::categoria_service();
    let app = test_app!(service);

    let req = test::TestRequest::get().uri("/api/v1/categorias/42").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn test_listing_pages_in_store_order() {
    let service = helpers::categoria_service();
    helpers::seed_categorias(&service, 15).await;
    let app = test_app!(service);

    let req = test::TestRequest::get()
        .uri("/api/v1/categorias?page=0&size=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let page: Value = test::read_body_json(resp).await;
    let content = page["content"].as_array().unwrap();
    assert_eq!(content.len(), 10);
    assert_eq!(page["total_elements"], 15);
    assert_eq!(page["total_pages"], 2);

    let ids: Vec<i64> = content.iter().map(|c| c["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<i64>>());

    // Second page carries the remainder
    let req = test::TestRequest::get()
        .uri("/api/v1/categorias?page=1&size=10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let page: Value = test::read_body_json(resp).await;
    let ids: Vec<i64> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, (11..=15).collect::<Vec<i64>>());
}

#[actix_web::test]
async fn test_listing_defaults_to_first_page_of_ten() {
    let service = helpers::categoria_service();
    helpers::seed_categorias(&service, 12).await;
    let app = test_app!(service);

    let req = test::TestRequest::get().uri("/api/v1/categorias").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["content"].as_array().unwrap().len(), 10);
    assert_eq!(page["page"], 0);
    assert_eq!(page["size"], 10);
}

#[actix_web::test]
async fn test_listing_normalizes_out_of_range_page_params() {
    let service = helpers::categoria_service();
    helpers::seed_categorias(&service, 3).await;
    let app = test_app!(service);

    let req = test::TestRequest::get()
        .uri("/api/v1/categorias?page=-1&size=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["page"], 0);
    assert_eq!(page["size"], 1);
    assert_eq!(page["content"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_create_ignores_client_supplied_id() {
    let service = helpers::categoria_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/api/v1/categorias")
        .set_json(json!({"id": 42, "nombre": "Libros"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["id"], 1);
}

#[actix_web::test]
async fn test_create_with_blank_nombre_returns_400() {
    let service = helpers::categoria_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/api/v1/categorias")
        .set_json(json!({"nombre": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 400);
}

#[actix_web::test]
async fn test_create_without_nombre_returns_400() {
    let service = helpers::categoria_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/api/v1/categorias")
        .set_json(json!({"descripcion": "sin nombre"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_update_unknown_id_returns_404_without_saving() {
    let service = helpers::categoria_service();
    let app = test_app!(service);

    let req = test::TestRequest::put()
        .uri("/api/v1/categorias/7")
        .set_json(json!({"nombre": "Libros"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    // Nothing was written
    let req = test::TestRequest::get().uri("/api/v1/categorias/7").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_update_with_blank_nombre_returns_400() {
    let service = helpers::categoria_service();
    helpers::seed_categorias(&service, 1).await;
    let app = test_app!(service);

    let req = test::TestRequest::put()
        .uri("/api/v1/categorias/1")
        .set_json(json!({"nombre": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_delete_unknown_id_returns_404_and_keeps_rows() {
    let service = helpers::categoria_service();
    helpers::seed_categorias(&service, 2).await;
    let app = test_app!(service);

    let req = test::TestRequest::delete().uri("/api/v1/categorias/99").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let req = test::TestRequest::get().uri("/api/v1/categorias").to_request();
    let resp = test::call_service(&app, req).await;
    let page: Value = test::read_body_json(resp).await;
    assert_eq!(page["total_elements"], 2);
}

#[actix_web::test]
async fn test_update_preserves_descripcion_round_trip() {
    let service = helpers::categoria_service();
    let app = test_app!(service);

    let req = test::TestRequest::post()
        .uri("/api/v1/categorias")
        .set_json(json!({"nombre": "Libros", "descripcion": "Impresos y encuadernados"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::get().uri("/api/v1/categorias/1").to_request();
    let resp = test::call_service(&app, req).await;
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched["descripcion"], "Impresos y encuadernados");
}
