use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::config::Settings;

const EMBEDDED_COURSES: &str = include_str!("../../data/courses.json");
const EMBEDDED_DEPARTMENTS: &str = include_str!("../../data/departments.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub code: String,
    pub department: String,
    pub level: Level,
    pub price: i64,
    pub duration: String,
    pub rating: f64,
    pub review_count: u32,
    pub instructor: Instructor,
    pub description: String,
    pub prerequisites: Vec<String>,
    pub learning_outcomes: Vec<String>,
    pub reviews: Vec<Review>,
    pub thumbnail: String,
    pub credits: u32,
    pub students_enrolled: u32,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    pub id: String,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub student_name: String,
    pub rating: f64,
    pub comment: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub course_count: u32,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate course id: {0}")]
    DuplicateId(String),
}

/// The read-only course catalog, loaded once at startup. The vector order is
/// the order unsorted listings are returned in.
pub struct CourseStore {
    courses: Vec<Course>,
    by_id: HashMap<String, usize>,
    departments: Vec<Department>,
}

impl CourseStore {
    pub(crate) fn load(settings: &Settings) -> Result<Self, CatalogError> {
        match &settings.catalog().data_dir {
            Some(dir) => Self::load_from_dir(dir),
            None => Self::load_embedded(),
        }
    }

    pub fn load_embedded() -> Result<Self, CatalogError> {
        let courses = parse_json("courses.json", EMBEDDED_COURSES)?;
        let departments = parse_json("departments.json", EMBEDDED_DEPARTMENTS)?;
        Self::from_parts(courses, departments)
    }

    fn load_from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let courses = parse_json("courses.json", &read_file(&dir.join("courses.json"))?)?;
        let departments =
            parse_json("departments.json", &read_file(&dir.join("departments.json"))?)?;
        Self::from_parts(courses, departments)
    }

    pub fn from_parts(
        courses: Vec<Course>,
        departments: Vec<Department>,
    ) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(courses.len());
        for (index, course) in courses.iter().enumerate() {
            if by_id.insert(course.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(course.id.clone()));
            }
        }
        Ok(Self { courses, by_id, departments })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn find(&self, id: &str) -> Option<&Course> {
        self.by_id.get(id).map(|&index| &self.courses[index])
    }

    pub fn featured(&self) -> Vec<Course> {
        self.courses.iter().filter(|course| course.is_featured).cloned().collect()
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path)
        .map_err(|source| CatalogError::Io { file: path.display().to_string(), source })
}

fn parse_json<T: serde::de::DeserializeOwned>(file: &str, raw: &str) -> Result<T, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Parse { file: file.to_string(), source })
}
