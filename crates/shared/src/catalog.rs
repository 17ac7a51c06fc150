//! Static, read-only course catalog embedded in the binary.
//!
//! The seed is parsed and validated once at startup; afterwards the catalog
//! is immutable for the whole session. Lookup misses are a normal result the
//! caller handles, not an error.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Course, CourseId, LessonId};

const BUILTIN_SEED: &str = include_str!("../data/courses.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog seed is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate course id {0}")]
    DuplicateCourseId(CourseId),
    #[error("course {course_id}: duplicate lesson id {lesson_id}")]
    DuplicateLessonId {
        course_id: CourseId,
        lesson_id: LessonId,
    },
    #[error("course {course_id} is marked free but priced at {price}")]
    FreeCourseWithPrice { course_id: CourseId, price: f64 },
    #[error("course {course_id}: price {price} is negative")]
    NegativePrice { course_id: CourseId, price: f64 },
    #[error("course {course_id}: rating {rating} is outside 0..=5")]
    RatingOutOfRange { course_id: CourseId, rating: f32 },
}

#[derive(Debug, Deserialize)]
struct CatalogSeed {
    courses: Vec<Course>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Parses and validates the seed shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        let seed: CatalogSeed = serde_json::from_str(BUILTIN_SEED)?;
        Self::from_courses(seed.courses)
    }

    /// Builds a catalog from explicit records, enforcing the seed invariants.
    pub fn from_courses(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut course_ids = HashSet::new();
        for course in &courses {
            if !course_ids.insert(course.id.clone()) {
                return Err(CatalogError::DuplicateCourseId(course.id.clone()));
            }
            if course.price < 0.0 {
                return Err(CatalogError::NegativePrice {
                    course_id: course.id.clone(),
                    price: course.price,
                });
            }
            if course.is_free && course.price != 0.0 {
                return Err(CatalogError::FreeCourseWithPrice {
                    course_id: course.id.clone(),
                    price: course.price,
                });
            }
            if !(0.0..=5.0).contains(&course.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    course_id: course.id.clone(),
                    rating: course.rating,
                });
            }
            let mut lesson_ids = HashSet::new();
            for lesson in &course.lessons {
                if !lesson_ids.insert(lesson.id.clone()) {
                    return Err(CatalogError::DuplicateLessonId {
                        course_id: course.id.clone(),
                        lesson_id: lesson.id.clone(),
                    });
                }
            }
        }
        Ok(Self { courses })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn find_by_id(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| &course.id == id)
    }

    pub fn free_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(|course| course.is_free)
    }

    pub fn paid_courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(|course| !course.is_free)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
