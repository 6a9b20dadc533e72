use crate::catalog::store::Course;

/// Active search/filter/sort parameters for a course listing. All fields are
/// independently optional; empty means "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub department: String,
    /// Raw comma-separated level tokens. Tokens that name no real level
    /// match nothing rather than being dropped, so `level=Expert` returns an
    /// empty list instead of an unfiltered one.
    pub levels: Vec<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub sort: Option<SortOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl SortOrder {
    /// Unrecognized tokens mean "no explicit sort" rather than an error.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name-asc" => Some(Self::NameAsc),
            "name-desc" => Some(Self::NameDesc),
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }
}

/// Apply filters then sort. Pure over its inputs; with no sort requested the
/// catalog order is preserved, and the stable sort keeps tied elements in
/// input order.
pub fn apply(courses: &[Course], filters: &FilterState) -> Vec<Course> {
    let needle = filters.search.to_lowercase();

    let mut filtered: Vec<Course> = courses
        .iter()
        .filter(|course| {
            if !needle.is_empty()
                && !course.title.to_lowercase().contains(&needle)
                && !course.instructor.name.to_lowercase().contains(&needle)
            {
                return false;
            }
            if !filters.department.is_empty() && course.department != filters.department {
                return false;
            }
            if !filters.levels.is_empty()
                && !filters.levels.iter().any(|level| level == course.level.as_str())
            {
                return false;
            }
            if filters.min_price.is_some_and(|min| course.price < min) {
                return false;
            }
            if filters.max_price.is_some_and(|max| course.price > max) {
                return false;
            }
            true
        })
        .cloned()
        .collect();

    match filters.sort {
        Some(SortOrder::NameAsc) => {
            filtered.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        Some(SortOrder::NameDesc) => {
            filtered.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()));
        }
        Some(SortOrder::PriceAsc) => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
        Some(SortOrder::PriceDesc) => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
        Some(SortOrder::Rating) => filtered.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        None => {}
    }

    filtered
}
