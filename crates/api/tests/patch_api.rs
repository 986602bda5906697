//! Partial-update semantics over HTTP: omitted fields stay, `null` clears
//! nullable columns, `false`/`0`/`""` are real values, and PUT behaves the
//! same as PATCH.

mod common;

use axum::http::StatusCode;
use common::{
    animal_body, body_json, build_test_app, create, facility_body, get, patch_json, put_json,
    user_body,
};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_only_patch_leaves_listing_intact(pool: PgPool) {
    let id = create(&pool, "/api/v1/animals", animal_body("Luna")).await;
    let before = body_json(get(build_test_app(pool.clone()), &format!("/api/v1/animals/{id}")).await).await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/animals/{id}"),
        serde_json::json!({"status": "adopted"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let after = body_json(response).await;

    assert_eq!(after["status"], "adopted");
    for field in ["name", "breed", "location", "age", "type_key", "size_key", "posted_at"] {
        assert_eq!(after[field], before[field], "{field} should be unchanged");
    }
    assert_ne!(after["updated_at"], before["updated_at"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_put_uses_patch_semantics(pool: PgPool) {
    let id = create(&pool, "/api/v1/shelters", facility_body("Refugio Este")).await;

    let response = put_json(
        build_test_app(pool),
        &format!("/api/v1/shelters/{id}"),
        serde_json::json!({"capacity": 40}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["capacity"], 40);
    assert_eq!(json["name"], "Refugio Este");
    assert_eq!(json["phone_number"], "555-0199");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_null_clears_nullable_but_not_required_fields(pool: PgPool) {
    let mut body = facility_body("Con Web");
    body["website"] = "https://conweb.example".into();
    let id = create(&pool, "/api/v1/foster-homes", body).await;

    let response = patch_json(
        build_test_app(pool),
        &format!("/api/v1/foster-homes/{id}"),
        serde_json::json!({"website": null, "name": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["website"].is_null());
    assert_eq!(json["name"], "Con Web");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_false_and_zero_are_applied(pool: PgPool) {
    let user_id = create(&pool, "/api/v1/users", user_body("flags@example.com")).await;
    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/users/{user_id}"),
        serde_json::json!({"is_verified": true}),
    )
    .await;
    assert_eq!(body_json(response).await["is_verified"], true);

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/users/{user_id}"),
        serde_json::json!({"is_verified": false}),
    )
    .await;
    assert_eq!(body_json(response).await["is_verified"], false);

    let animal_id = create(&pool, "/api/v1/animals", animal_body("Cachorro")).await;
    let response = patch_json(
        build_test_app(pool),
        &format!("/api/v1/animals/{animal_id}"),
        serde_json::json!({"age": 0}),
    )
    .await;
    assert_eq!(body_json(response).await["age"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_string_is_stored_on_optional_report_field(pool: PgPool) {
    let id = create(
        &pool,
        "/api/v1/reports",
        serde_json::json!({
            "title": "Found kitten",
            "report_type": "found",
            "description": "Under a car",
            "city": "Sevilla",
        }),
    )
    .await;

    let response = patch_json(
        build_test_app(pool),
        &format!("/api/v1/reports/{id}"),
        serde_json::json!({"city": "", "status": "resolved"}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["city"], "");
    assert_eq!(json["status"], "resolved");
    assert_eq!(json["title"], "Found kitten");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_move_animal_between_custodians(pool: PgPool) {
    let shelter_id = create(&pool, "/api/v1/shelters", facility_body("Origen")).await;
    let foster_id = create(&pool, "/api/v1/foster-homes", facility_body("Destino")).await;
    let mut body = animal_body("Viajero");
    body["shelter_id"] = shelter_id.as_str().into();
    let animal_id = create(&pool, "/api/v1/animals", body).await;

    let response = patch_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/animals/{animal_id}"),
        serde_json::json!({
            "shelter_id": null,
            "foster_home_id": foster_id,
            "status": "fostered",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["shelter_id"].is_null());
    assert_eq!(json["foster_home_id"], foster_id.as_str());

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/foster-homes/{foster_id}/animals"),
    )
    .await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_adoption_request_approval(pool: PgPool) {
    let user_id = create(&pool, "/api/v1/users", user_body("approve@example.com")).await;
    let animal_id = create(&pool, "/api/v1/animals", animal_body("Pipa")).await;
    let request_id = create(
        &pool,
        "/api/v1/adoption-requests",
        serde_json::json!({"user_id": user_id, "animal_id": animal_id, "message": "Hi"}),
    )
    .await;

    let response = patch_json(
        build_test_app(pool),
        &format!("/api/v1/adoption-requests/{request_id}"),
        serde_json::json!({
            "status": "approved",
            "response": "Come and meet her",
            "responded_at": "2026-10-19T10:00:00Z",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "approved");
    assert_eq!(json["response"], "Come and meet her");
    assert_eq!(json["message"], "Hi");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_missing_entity_returns_404(pool: PgPool) {
    let response = patch_json(
        build_test_app(pool.clone()),
        "/api/v1/animals/6f1c1f9e-8a55-4c1e-9a53-3c3f0e6d2b11",
        serde_json::json!({"status": "adopted"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = patch_json(
        build_test_app(pool),
        "/api/v1/animal-images/999999",
        serde_json::json!({"is_main": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_parallel_patches_do_not_overwrite_each_other(pool: PgPool) {
    let id = create(&pool, "/api/v1/animals", animal_body("Bruno")).await;
    let uri = format!("/api/v1/animals/{id}");

    let (breed, location) = tokio::join!(
        patch_json(build_test_app(pool.clone()), &uri, serde_json::json!({"breed": "Beagle"})),
        patch_json(build_test_app(pool.clone()), &uri, serde_json::json!({"location": "Sevilla"})),
    );
    assert_eq!(breed.status(), StatusCode::OK);
    assert_eq!(location.status(), StatusCode::OK);

    let json = body_json(get(build_test_app(pool), &uri).await).await;
    assert_eq!(json["breed"], "Beagle");
    assert_eq!(json["location"], "Sevilla");
}
