//! Integration tests for repository CRUD against a real database:
//! - create/read/list/delete for every entity
//! - unique and foreign key violations
//! - cascade and detach behaviour on delete
//! - relationship lookups

mod common;

use assert_matches::assert_matches;
use sqlx::PgPool;
use uuid::Uuid;

use common::{new_animal, new_facility, new_image, new_report, new_request, new_user};
use petadopt_db::models::animal::CreateAnimal;
use petadopt_db::repositories::{
    AdoptionRequestRepo, AnimalImageRepo, AnimalRepo, FacilityRepo, ReportRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_create_and_lookup(pool: PgPool) {
    let mut input = new_user("ana@example.com");
    input.external_auth_uid = Some("idp|ana".to_string());
    let user = UserRepo::create(&pool, &input).await.unwrap();

    assert_eq!(user.email, "ana@example.com");
    assert!(!user.is_verified);
    assert!(!user.is_role_verified);

    let found = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(found.id, user.id);

    let by_uid = UserRepo::find_by_external_auth_uid(&pool, "idp|ana")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_uid.id, user.id);

    assert!(UserRepo::find_by_id(&pool, Uuid::new_v4()).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup@example.com")).await.unwrap();
    let result = UserRepo::create(&pool, &new_user("dup@example.com")).await;

    assert_matches!(
        result,
        Err(sqlx::Error::Database(ref e)) if e.constraint() == Some("uq_users_email")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_users_in_registration_order(pool: PgPool) {
    let first = UserRepo::create(&pool, &new_user("one@example.com")).await.unwrap();
    let second = UserRepo::create(&pool, &new_user("two@example.com")).await.unwrap();

    let users = UserRepo::list(&pool).await.unwrap();
    let ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

// ---------------------------------------------------------------------------
// Facilities
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_facility_counters_start_at_zero(pool: PgPool) {
    let shelter = FacilityRepo::SHELTERS
        .create(&pool, &new_facility("Refugio Norte", None))
        .await
        .unwrap();

    assert_eq!(shelter.capacity, 25);
    assert_eq!(shelter.current_capacity, 0);
    assert_eq!(shelter.current_occupancy, 0);
    assert!(!shelter.is_verified);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_shelters_and_foster_homes_are_separate_tables(pool: PgPool) {
    let shelter = FacilityRepo::SHELTERS
        .create(&pool, &new_facility("Casa Azul", None))
        .await
        .unwrap();

    assert!(FacilityRepo::FOSTER_HOMES
        .find_by_id(&pool, shelter.id)
        .await
        .unwrap()
        .is_none());
    assert_eq!(FacilityRepo::SHELTERS.list(&pool).await.unwrap().len(), 1);
    assert!(FacilityRepo::FOSTER_HOMES.list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_zero_capacity_rejected_by_schema(pool: PgPool) {
    let mut input = new_facility("Tiny", None);
    input.capacity = 0;
    let result = FacilityRepo::FOSTER_HOMES.create(&pool, &input).await;
    assert!(result.is_err(), "capacity 0 should violate the check constraint");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_by_name_is_case_insensitive(pool: PgPool) {
    let repo = FacilityRepo::SHELTERS;
    repo.create(&pool, &new_facility("Refugio Esperanza", None)).await.unwrap();
    repo.create(&pool, &new_facility("Huellas Felices", None)).await.unwrap();
    repo.create(&pool, &new_facility("100% Patitas", None)).await.unwrap();

    let hits = repo.search_by_name(&pool, "esperanza").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Refugio Esperanza");

    // A literal `%` must not behave as a wildcard.
    let hits = repo.search_by_name(&pool, "%").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "100% Patitas");

    assert!(repo.search_by_name(&pool, "gatos").await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_facilities_listed_by_owner(pool: PgPool) {
    let owner = UserRepo::create(&pool, &new_user("owner@example.com")).await.unwrap();
    FacilityRepo::FOSTER_HOMES
        .create(&pool, &new_facility("Casa de Ana", Some(owner.id)))
        .await
        .unwrap();
    FacilityRepo::FOSTER_HOMES
        .create(&pool, &new_facility("Unowned", None))
        .await
        .unwrap();

    let owned = FacilityRepo::FOSTER_HOMES
        .list_by_user(&pool, owner.id)
        .await
        .unwrap();
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0].name, "Casa de Ana");
}

// ---------------------------------------------------------------------------
// Animals and images
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_animal_with_unknown_type_rejected(pool: PgPool) {
    let input = CreateAnimal {
        type_key: "dragon".to_string(),
        ..new_animal("Smaug")
    };
    let result = AnimalRepo::create(&pool, &input).await;

    assert_matches!(
        result,
        Err(sqlx::Error::Database(ref e)) if e.code().as_deref() == Some("23503")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_animals_filtered_by_custodian_and_status(pool: PgPool) {
    let shelter = FacilityRepo::SHELTERS
        .create(&pool, &new_facility("Refugio Sur", None))
        .await
        .unwrap();
    let sheltered = AnimalRepo::create(
        &pool,
        &CreateAnimal {
            shelter_id: Some(shelter.id),
            status: "in_shelter".to_string(),
            ..new_animal("Kira")
        },
    )
    .await
    .unwrap();
    AnimalRepo::create(&pool, &new_animal("Nube")).await.unwrap();

    let housed = AnimalRepo::list_by_shelter(&pool, shelter.id).await.unwrap();
    assert_eq!(housed.len(), 1);
    assert_eq!(housed[0].id, sheltered.id);

    let available = AnimalRepo::list_by_status(&pool, "available").await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].name, "Nube");

    assert_eq!(AnimalRepo::list(&pool).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_images_listed_main_first(pool: PgPool) {
    let animal = AnimalRepo::create(&pool, &new_animal("Luna")).await.unwrap();
    let side = AnimalImageRepo::create(&pool, &new_image(animal.id, "https://cdn/side.jpg"))
        .await
        .unwrap();
    let mut main_input = new_image(animal.id, "https://cdn/main.jpg");
    main_input.is_main = Some(true);
    let main = AnimalImageRepo::create(&pool, &main_input).await.unwrap();

    assert!(!side.is_main);
    let images = AnimalImageRepo::list_by_animal(&pool, animal.id).await.unwrap();
    let ids: Vec<i32> = images.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![main.id, side.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_animal_cascades_images_and_requests(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("adopter@example.com")).await.unwrap();
    let animal = AnimalRepo::create(&pool, &new_animal("Bruno")).await.unwrap();
    let image = AnimalImageRepo::create(&pool, &new_image(animal.id, "https://cdn/b.jpg"))
        .await
        .unwrap();
    let request = AdoptionRequestRepo::create(&pool, &new_request(user.id, animal.id))
        .await
        .unwrap();

    assert!(AnimalRepo::delete(&pool, animal.id).await.unwrap());

    assert!(AnimalImageRepo::find_by_id(&pool, image.id).await.unwrap().is_none());
    assert!(AdoptionRequestRepo::find_by_id(&pool, request.id)
        .await
        .unwrap()
        .is_none());
    assert!(UserRepo::find_by_id(&pool, user.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_shelter_detaches_animals(pool: PgPool) {
    let shelter = FacilityRepo::SHELTERS
        .create(&pool, &new_facility("Closing Down", None))
        .await
        .unwrap();
    let animal = AnimalRepo::create(
        &pool,
        &CreateAnimal {
            shelter_id: Some(shelter.id),
            ..new_animal("Copo")
        },
    )
    .await
    .unwrap();

    assert!(FacilityRepo::SHELTERS.delete(&pool, shelter.id).await.unwrap());

    let animal = AnimalRepo::find_by_id(&pool, animal.id).await.unwrap().unwrap();
    assert_eq!(animal.shelter_id, None);
}

// ---------------------------------------------------------------------------
// Adoption requests and reports
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_adoption_request_defaults(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("req@example.com")).await.unwrap();
    let animal = AnimalRepo::create(&pool, &new_animal("Milo")).await.unwrap();
    let request = AdoptionRequestRepo::create(&pool, &new_request(user.id, animal.id))
        .await
        .unwrap();

    assert_eq!(request.status, "pending");
    assert!(!request.is_completed);
    assert!(request.response.is_none());

    assert_eq!(
        AdoptionRequestRepo::list_by_user(&pool, user.id).await.unwrap().len(),
        1
    );
    assert_eq!(
        AdoptionRequestRepo::list_by_animal(&pool, animal.id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_adoption_request_for_missing_animal_rejected(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("ghost@example.com")).await.unwrap();
    let result = AdoptionRequestRepo::create(&pool, &new_request(user.id, Uuid::new_v4())).await;
    assert!(result.is_err(), "Request for a missing animal should fail");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_user_cascades_requests_and_detaches_reports(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("leaver@example.com")).await.unwrap();
    let animal = AnimalRepo::create(&pool, &new_animal("Sombra")).await.unwrap();
    let request = AdoptionRequestRepo::create(&pool, &new_request(user.id, animal.id))
        .await
        .unwrap();
    let report = ReportRepo::create(&pool, &new_report("Lost dog", Some(user.id)))
        .await
        .unwrap();

    assert!(UserRepo::delete(&pool, user.id).await.unwrap());

    assert!(AdoptionRequestRepo::find_by_id(&pool, request.id)
        .await
        .unwrap()
        .is_none());
    let report = ReportRepo::find_by_id(&pool, report.id).await.unwrap().unwrap();
    assert_eq!(report.user_id, None);
    assert!(AnimalRepo::find_by_id(&pool, animal.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_status_defaults_to_pending(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("rep@example.com")).await.unwrap();
    let report = ReportRepo::create(&pool, &new_report("Found cat", Some(user.id)))
        .await
        .unwrap();

    assert_eq!(report.status, "pending");
    assert!(!report.is_verified);
    assert_eq!(ReportRepo::list_by_user(&pool, user.id).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_returns_false(pool: PgPool) {
    assert!(!UserRepo::delete(&pool, Uuid::new_v4()).await.unwrap());
    assert!(!FacilityRepo::SHELTERS.delete(&pool, Uuid::new_v4()).await.unwrap());
    assert!(!AnimalImageRepo::delete(&pool, 999_999).await.unwrap());
    assert!(!ReportRepo::delete(&pool, Uuid::new_v4()).await.unwrap());
}
