use axum::extract::{Path, Query, State};
use axum::{routing::get, Json, Router};
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::pagination::paginate;
use crate::catalog::query::{self, FilterState, SortOrder};
use crate::catalog::store::Course;
use crate::core::state::AppState;
use crate::schemas::course::CourseListResponse;

#[cfg(test)]
mod tests;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(list_courses)).route("/featured", get(featured_courses)).route(
        "/:course_id",
        get(get_course),
    )
}

/// Raw query parameters. Everything arrives as text; parsing decides what is
/// actually a filter.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ListCoursesParams {
    search: Option<String>,
    department: Option<String>,
    level: Option<String>,
    #[serde(rename = "minPrice")]
    min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    max_price: Option<String>,
    #[serde(rename = "sortBy")]
    sort_by: Option<String>,
    page: Option<String>,
    #[serde(rename = "perPage")]
    per_page: Option<String>,
}

async fn list_courses(
    Query(params): Query<ListCoursesParams>,
    State(state): State<AppState>,
) -> Result<Json<CourseListResponse>, ApiError> {
    let filters = parse_filters(&params);

    let defaults = state.settings().catalog();
    let page = parse_positive("page", params.page.as_deref(), 1)?;
    let per_page = parse_positive("perPage", params.per_page.as_deref(), defaults.default_per_page)?
        .min(defaults.max_per_page);

    let filtered = query::apply(state.catalog().courses(), &filters);
    let paged = paginate(filtered, page, per_page);

    Ok(Json(CourseListResponse { courses: paged.items, pagination: paged.meta }))
}

async fn featured_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.catalog().featured())
}

async fn get_course(
    Path(course_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Course>, ApiError> {
    state
        .catalog()
        .find(&course_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))
}

fn parse_filters(params: &ListCoursesParams) -> FilterState {
    FilterState {
        search: params.search.clone().unwrap_or_default(),
        department: params.department.clone().unwrap_or_default(),
        levels: params
            .level
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::to_string)
            .filter(|level| !level.is_empty())
            .collect(),
        min_price: parse_optional_price(params.min_price.as_deref()),
        max_price: parse_optional_price(params.max_price.as_deref()),
        sort: params.sort_by.as_deref().and_then(SortOrder::parse),
    }
}

/// Empty or unparseable price bounds are treated as absent, not as errors.
fn parse_optional_price(value: Option<&str>) -> Option<i64> {
    value.and_then(|raw| raw.parse::<i64>().ok())
}

/// Unparseable paging values fall back to the default; explicitly
/// non-positive ones are a client error.
fn parse_positive(field: &str, value: Option<&str>, default: u32) -> Result<u32, ApiError> {
    let Some(raw) = value.filter(|raw| !raw.is_empty()) else {
        return Ok(default);
    };

    match raw.parse::<i64>() {
        Ok(parsed) if parsed <= 0 => {
            Err(ApiError::BadRequest(format!("{field} must be positive")))
        }
        Ok(parsed) => Ok(u32::try_from(parsed).unwrap_or(u32::MAX)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn prices_parse_or_go_absent() {
        assert_eq!(parse_optional_price(Some("1500")), Some(1500));
        assert_eq!(parse_optional_price(Some("")), None);
        assert_eq!(parse_optional_price(Some("abc")), None);
        assert_eq!(parse_optional_price(None), None);
    }

    #[test]
    fn level_csv_splits_into_tokens() {
        let params = ListCoursesParams {
            level: Some("Beginner,Advanced".to_string()),
            ..ListCoursesParams::default()
        };
        assert_eq!(parse_filters(&params).levels, vec!["Beginner", "Advanced"]);

        let empty = ListCoursesParams { level: Some(String::new()), ..ListCoursesParams::default() };
        assert!(parse_filters(&empty).levels.is_empty());
    }

    #[test]
    fn paging_defaults_errors_and_parses() {
        assert_eq!(parse_positive("page", None, 1).unwrap(), 1);
        assert_eq!(parse_positive("page", Some("abc"), 1).unwrap(), 1);
        assert_eq!(parse_positive("page", Some("3"), 1).unwrap(), 3);
        assert!(parse_positive("page", Some("0"), 1).is_err());
        assert!(parse_positive("page", Some("-2"), 1).is_err());
    }
}
