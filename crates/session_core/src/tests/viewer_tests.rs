use super::*;
use shared::domain::LessonId;
use shared::Catalog;

fn lesson(id: &str, is_completed: bool) -> Lesson {
    Lesson {
        id: LessonId::from(id),
        title: format!("Lesson {id}"),
        duration: "10:00".to_string(),
        is_completed,
    }
}

#[test]
fn previous_at_the_first_lesson_stays_put() {
    let mut cursor = LessonCursor::new(4);
    cursor.select_previous();
    assert_eq!(cursor.index(), 0);
    assert!(cursor.at_start());
}

#[test]
fn next_at_the_last_lesson_stays_put() {
    let mut cursor = LessonCursor::new(4);
    cursor.select(3);
    cursor.select_next();
    assert_eq!(cursor.index(), 3);
    assert!(cursor.at_end());
}

#[test]
fn select_then_next_advances() {
    let mut cursor = LessonCursor::new(4);
    cursor.select(2);
    cursor.select_next();
    assert_eq!(cursor.index(), 3);
}

#[test]
fn out_of_range_select_is_ignored() {
    let mut cursor = LessonCursor::new(4);
    cursor.select(2);
    cursor.select(4);
    assert_eq!(cursor.index(), 2);
}

#[test]
fn empty_cursor_is_inert() {
    let mut cursor = LessonCursor::new(0);
    cursor.select_next();
    cursor.select_previous();
    cursor.select(0);
    assert_eq!(cursor.index(), 0);
    assert!(cursor.is_empty());
    assert!(cursor.at_end());
}

#[test]
fn progress_is_zero_for_every_catalog_course() {
    let catalog = Catalog::builtin().expect("catalog");
    for course in catalog.courses() {
        assert_eq!(progress_percent(&course.lessons), 0, "course {}", course.id);
    }
}

#[test]
fn progress_rounds_the_completed_share() {
    let lessons = vec![lesson("a", true), lesson("b", false), lesson("c", false)];
    assert_eq!(progress_percent(&lessons), 33);

    let lessons = vec![lesson("a", true), lesson("b", true), lesson("c", false)];
    assert_eq!(progress_percent(&lessons), 67);

    let lessons = vec![lesson("a", true), lesson("b", true)];
    assert_eq!(progress_percent(&lessons), 100);
}

#[test]
fn progress_of_an_empty_lesson_list_is_zero() {
    assert_eq!(progress_percent(&[]), 0);
}
