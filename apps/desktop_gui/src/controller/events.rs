//! Worker-to-UI events for the desktop app.

use shared::domain::CourseId;

pub enum UiEvent {
    Info(String),
    PaymentSettled { course_id: CourseId },
}
