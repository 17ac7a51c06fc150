//! Commands queued from the UI to the settlement worker.

use shared::domain::CourseId;

pub enum AppCommand {
    ProcessPayment { course_id: CourseId },
}
