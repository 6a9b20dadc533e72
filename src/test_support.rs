use std::sync::{Arc, OnceLock};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    Router,
};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::api;
use crate::catalog::store::{Course, CourseStore, Department, Instructor, Level};
use crate::core::{config::Settings, state::AppState};

pub(crate) struct TestContext {
    pub(crate) state: AppState,
    pub(crate) app: Router,
    _guard: OwnedMutexGuard<()>,
}

// Settings::load reads process-global env vars, so tests that touch them
// serialize here.
pub(crate) async fn env_lock() -> OwnedMutexGuard<()> {
    static LOCK: OnceLock<Arc<Mutex<()>>> = OnceLock::new();
    let lock = LOCK.get_or_init(|| Arc::new(Mutex::new(()))).clone();
    lock.lock_owned().await
}

pub(crate) fn set_test_env() {
    std::env::set_var("LEARNHUB_ENV", "test");
    std::env::remove_var("LEARNHUB_HOST");
    std::env::remove_var("LEARNHUB_PORT");
    std::env::remove_var("PROJECT_NAME");
    std::env::remove_var("API_PREFIX");
    std::env::remove_var("BACKEND_CORS_ORIGINS");
    std::env::remove_var("CATALOG_DATA_DIR");
    std::env::remove_var("DEFAULT_PER_PAGE");
    std::env::remove_var("MAX_PER_PAGE");
    std::env::set_var("PROMETHEUS_ENABLED", "0");
}

pub(crate) async fn setup_test_context() -> TestContext {
    setup_test_context_with_catalog(test_catalog()).await
}

pub(crate) async fn setup_test_context_with_catalog(catalog: CourseStore) -> TestContext {
    let guard = env_lock().await;
    set_test_env();

    let settings = Settings::load().expect("settings");
    let state = AppState::new(settings, catalog);
    let app = api::router::router(state.clone());

    TestContext { state, app, _guard: guard }
}

pub(crate) fn make_course(
    id: &str,
    title: &str,
    department: &str,
    level: Level,
    price: i64,
    rating: f64,
    instructor: &str,
) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        code: format!("TST{id}"),
        department: department.to_string(),
        level,
        price,
        duration: "8 weeks".to_string(),
        rating,
        review_count: 10,
        instructor: Instructor {
            id: format!("inst-{id}"),
            name: instructor.to_string(),
            title: "Instructor".to_string(),
            bio: "Test instructor".to_string(),
            avatar: "/avatars/test.jpg".to_string(),
            rating,
        },
        description: "Test course".to_string(),
        prerequisites: vec![],
        learning_outcomes: vec![],
        reviews: vec![],
        thumbnail: "/thumbnails/test.jpg".to_string(),
        credits: 3,
        students_enrolled: 100,
        is_featured: false,
    }
}

/// Five-course fixture mirroring the shapes the filter tests care about:
/// three Python courses priced 1000/2000/1500, one Business, one Design.
pub(crate) fn test_catalog() -> CourseStore {
    let mut courses = vec![
        make_course("1", "Python Basics", "Computer Science", Level::Beginner, 1000, 4.7, "Ananya Sharma"),
        make_course("2", "Advanced Python", "Computer Science", Level::Advanced, 2000, 4.6, "Karthik Menon"),
        make_course("3", "Python for Web", "Computer Science", Level::Intermediate, 1500, 4.5, "Ananya Sharma"),
        make_course("4", "Marketing 101", "Business", Level::Beginner, 1200, 4.3, "Priya Desai"),
        make_course("5", "UX Essentials", "Design", Level::Beginner, 1800, 4.4, "Ritika Bose"),
    ];
    courses[0].is_featured = true;
    courses[2].is_featured = true;

    let departments = vec![
        Department {
            id: "dept-1".to_string(),
            name: "Computer Science".to_string(),
            icon: "💻".to_string(),
            course_count: 3,
            description: "CS courses".to_string(),
        },
        Department {
            id: "dept-2".to_string(),
            name: "Business".to_string(),
            icon: "📈".to_string(),
            course_count: 1,
            description: "Business courses".to_string(),
        },
    ];

    CourseStore::from_parts(courses, departments).expect("test catalog")
}

/// A catalog of `count` uniform courses, for pagination tests.
pub(crate) fn numbered_catalog(count: usize) -> CourseStore {
    let courses = (1..=count)
        .map(|index| {
            make_course(
                &index.to_string(),
                &format!("Course {index}"),
                "Computer Science",
                Level::Beginner,
                1000,
                4.0,
                "Test Instructor",
            )
        })
        .collect();
    CourseStore::from_parts(courses, vec![]).expect("numbered catalog")
}

pub(crate) fn json_request(
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    if let Some(body) = body {
        let bytes = serde_json::to_vec(&body).expect("serialize body");
        builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(bytes))
            .expect("request body")
    } else {
        builder.body(Body::empty()).expect("request body")
    }
}

pub(crate) async fn read_json(response: axum::response::Response<Body>) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("response body");
    serde_json::from_slice(&body).unwrap_or_else(|err| {
        let body_text = String::from_utf8_lossy(&body);
        panic!("json parse: {err}; body: {body_text}");
    })
}
