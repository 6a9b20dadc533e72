use axum::http::{Method, StatusCode};
use tower::ServiceExt;

use crate::test_support;

#[tokio::test]
async fn listing_returns_courses_with_pagination_envelope() {
    let ctx = test_support::setup_test_context().await;

    let response = ctx
        .app
        .oneshot(test_support::json_request(Method::GET, "/api/courses", None))
        .await
        .expect("list courses");

    assert_eq!(response.status(), StatusCode::OK);
    let json = test_support::read_json(response).await;
    assert_eq!(json["courses"].as_array().expect("courses").len(), 5);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["perPage"], 12);
    assert_eq!(json["pagination"]["total"], 5);
    assert_eq!(json["pagination"]["totalPages"], 1);
    // Wire format stays camelCase.
    assert!(json["courses"][0]["isFeatured"].is_boolean());
    assert!(json["courses"][0]["instructor"]["name"].is_string());
}

#[tokio::test]
async fn search_with_price_sort_orders_results() {
    let ctx = test_support::setup_test_context().await;

    let response = ctx
        .app
        .oneshot(test_support::json_request(
            Method::GET,
            "/api/courses?search=python&sortBy=price-asc",
            None,
        ))
        .await
        .expect("search courses");

    assert_eq!(response.status(), StatusCode::OK);
    let json = test_support::read_json(response).await;
    let prices: Vec<i64> = json["courses"]
        .as_array()
        .expect("courses")
        .iter()
        .map(|course| course["price"].as_i64().expect("price"))
        .collect();
    assert_eq!(prices, vec![1000, 1500, 2000]);
}

#[tokio::test]
async fn level_filter_accepts_csv() {
    let ctx = test_support::setup_test_context().await;

    let response = ctx
        .app
        .oneshot(test_support::json_request(
            Method::GET,
            "/api/courses?level=Beginner,Advanced",
            None,
        ))
        .await
        .expect("filter by level");

    let json = test_support::read_json(response).await;
    assert_eq!(json["pagination"]["total"], 4);
}

#[tokio::test]
async fn price_bounds_are_inclusive() {
    let ctx = test_support::setup_test_context().await;

    let response = ctx
        .app
        .oneshot(test_support::json_request(
            Method::GET,
            "/api/courses?minPrice=1200&maxPrice=1800",
            None,
        ))
        .await
        .expect("filter by price");

    let json = test_support::read_json(response).await;
    let ids: Vec<&str> = json["courses"]
        .as_array()
        .expect("courses")
        .iter()
        .map(|course| course["id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["3", "4", "5"]);
}

#[tokio::test]
async fn unparseable_price_bound_is_ignored() {
    let ctx = test_support::setup_test_context().await;

    let response = ctx
        .app
        .oneshot(test_support::json_request(Method::GET, "/api/courses?minPrice=abc", None))
        .await
        .expect("list courses");

    let json = test_support::read_json(response).await;
    assert_eq!(json["pagination"]["total"], 5);
}

#[tokio::test]
async fn non_positive_page_is_rejected() {
    let ctx = test_support::setup_test_context().await;

    let response = ctx
        .app
        .clone()
        .oneshot(test_support::json_request(Method::GET, "/api/courses?page=0", None))
        .await
        .expect("page zero");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = test_support::read_json(response).await;
    assert_eq!(json["error"], "page must be positive");

    let response = ctx
        .app
        .oneshot(test_support::json_request(Method::GET, "/api/courses?perPage=-1", None))
        .await
        .expect("negative perPage");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn third_page_of_twenty_five_holds_the_remainder() {
    let ctx =
        test_support::setup_test_context_with_catalog(test_support::numbered_catalog(25)).await;

    let response = ctx
        .app
        .oneshot(test_support::json_request(
            Method::GET,
            "/api/courses?page=3&perPage=12",
            None,
        ))
        .await
        .expect("page three");

    let json = test_support::read_json(response).await;
    assert_eq!(json["courses"].as_array().expect("courses").len(), 1);
    assert_eq!(json["courses"][0]["id"], "25");
    assert_eq!(json["pagination"]["total"], 25);
    assert_eq!(json["pagination"]["totalPages"], 3);
}

#[tokio::test]
async fn per_page_is_clamped_to_the_cap() {
    let ctx =
        test_support::setup_test_context_with_catalog(test_support::numbered_catalog(150)).await;

    let response = ctx
        .app
        .oneshot(test_support::json_request(Method::GET, "/api/courses?perPage=500", None))
        .await
        .expect("oversized perPage");

    let json = test_support::read_json(response).await;
    assert_eq!(json["courses"].as_array().expect("courses").len(), 100);
    assert_eq!(json["pagination"]["perPage"], 100);
}

#[tokio::test]
async fn detail_returns_full_course() {
    let ctx = test_support::setup_test_context().await;

    let response = ctx
        .app
        .oneshot(test_support::json_request(Method::GET, "/api/courses/3", None))
        .await
        .expect("course detail");

    assert_eq!(response.status(), StatusCode::OK);
    let json = test_support::read_json(response).await;
    assert_eq!(json["title"], "Python for Web");
    assert_eq!(json["level"], "Intermediate");
}

#[tokio::test]
async fn unknown_course_is_404() {
    let ctx = test_support::setup_test_context().await;

    let response = ctx
        .app
        .oneshot(test_support::json_request(Method::GET, "/api/courses/999", None))
        .await
        .expect("missing course");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = test_support::read_json(response).await;
    assert_eq!(json["error"], "Course not found");
}

#[tokio::test]
async fn featured_returns_flagged_courses_only() {
    let ctx = test_support::setup_test_context().await;

    let response = ctx
        .app
        .oneshot(test_support::json_request(Method::GET, "/api/courses/featured", None))
        .await
        .expect("featured courses");

    assert_eq!(response.status(), StatusCode::OK);
    let json = test_support::read_json(response).await;
    let ids: Vec<&str> = json
        .as_array()
        .expect("featured array")
        .iter()
        .map(|course| course["id"].as_str().expect("id"))
        .collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[tokio::test]
async fn departments_are_listed() {
    let ctx = test_support::setup_test_context().await;

    let response = ctx
        .app
        .oneshot(test_support::json_request(Method::GET, "/api/departments", None))
        .await
        .expect("departments");

    assert_eq!(response.status(), StatusCode::OK);
    let json = test_support::read_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .expect("departments array")
        .iter()
        .map(|dept| dept["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Computer Science", "Business"]);
}
