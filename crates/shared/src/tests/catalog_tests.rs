use super::*;
use crate::domain::{Course, Lesson, Level};

fn course(id: &str, is_free: bool, price: f64) -> Course {
    Course {
        id: CourseId::from(id),
        title: format!("Course {id}"),
        description: "A test course".to_string(),
        instructor: "Test Instructor".to_string(),
        duration: "10 hours".to_string(),
        level: Level::Beginner,
        price,
        is_free,
        thumbnail: "https://example.com/thumb.jpg".to_string(),
        rating: 4.5,
        students_count: 100,
        lessons: vec![
            Lesson {
                id: LessonId::from(&*format!("{id}-1")),
                title: "First lesson".to_string(),
                duration: "10:00".to_string(),
                is_completed: false,
            },
            Lesson {
                id: LessonId::from(&*format!("{id}-2")),
                title: "Second lesson".to_string(),
                duration: "12:30".to_string(),
                is_completed: false,
            },
        ],
    }
}

#[test]
fn builtin_seed_loads_and_validates() {
    let catalog = Catalog::builtin().expect("builtin seed");
    assert_eq!(catalog.courses().len(), 6);

    let python = catalog
        .find_by_id(&CourseId::from("3"))
        .expect("python course");
    assert!(python.is_free);
    assert_eq!(python.price, 0.0);
    assert_eq!(python.lessons.len(), 4);
}

#[test]
fn lookup_miss_is_a_normal_result() {
    let catalog = Catalog::builtin().expect("builtin seed");
    assert!(catalog.find_by_id(&CourseId::from("999")).is_none());
}

#[test]
fn partitions_follow_the_free_flag() {
    let catalog = Catalog::builtin().expect("builtin seed");

    let free: Vec<&str> = catalog.free_courses().map(|c| c.id.as_str()).collect();
    let paid: Vec<&str> = catalog.paid_courses().map(|c| c.id.as_str()).collect();

    assert_eq!(free, ["3", "5"]);
    assert_eq!(paid, ["1", "2", "4", "6"]);
    assert_eq!(free.len() + paid.len(), catalog.courses().len());
}

#[test]
fn free_courses_are_priced_at_zero() {
    let catalog = Catalog::builtin().expect("builtin seed");
    for course in catalog.free_courses() {
        assert_eq!(course.price, 0.0, "course {} violates the free invariant", course.id);
    }
}

#[test]
fn rejects_duplicate_course_ids() {
    let result = Catalog::from_courses(vec![course("1", true, 0.0), course("1", false, 10.0)]);
    assert!(matches!(result, Err(CatalogError::DuplicateCourseId(id)) if id.as_str() == "1"));
}

#[test]
fn rejects_free_course_with_a_price() {
    let result = Catalog::from_courses(vec![course("1", true, 9.99)]);
    assert!(matches!(
        result,
        Err(CatalogError::FreeCourseWithPrice { course_id, price })
            if course_id.as_str() == "1" && price == 9.99
    ));
}

#[test]
fn rejects_negative_price() {
    let result = Catalog::from_courses(vec![course("1", false, -1.0)]);
    assert!(matches!(result, Err(CatalogError::NegativePrice { .. })));
}

#[test]
fn rejects_rating_out_of_range() {
    let mut bad = course("1", false, 10.0);
    bad.rating = 5.1;
    let result = Catalog::from_courses(vec![bad]);
    assert!(matches!(result, Err(CatalogError::RatingOutOfRange { .. })));
}

#[test]
fn rejects_duplicate_lesson_ids_within_a_course() {
    let mut bad = course("1", false, 10.0);
    bad.lessons[1].id = bad.lessons[0].id.clone();
    let result = Catalog::from_courses(vec![bad]);
    assert!(matches!(result, Err(CatalogError::DuplicateLessonId { .. })));
}
