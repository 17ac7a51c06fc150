//! Session & navigation state for the desktop app.
//!
//! All cross-screen mutable state lives in [`SessionState`], owned by a
//! single [`SessionController`]. Views receive the state read-only and call
//! the named operations below; nothing else mutates it. Every operation is a
//! synchronous total function over the current state: misuse degrades to a
//! no-op and unresolved course ids are dealt with at render time via
//! [`SessionController::renderable_page`].

use std::sync::Arc;

use shared::domain::{Course, CourseId};
use shared::Catalog;
use tracing::{debug, info};
use uuid::Uuid;

pub mod viewer;

/// Top-level screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    CourseDetail,
    Dashboard,
    CourseViewer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// The mock-authenticated user. Exists only between login/signup and logout;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    enrolled_courses: Vec<CourseId>,
}

impl User {
    fn fabricate(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            enrolled_courses: Vec::new(),
        }
    }

    /// Enrolled course ids in enrollment order.
    pub fn enrolled_courses(&self) -> &[CourseId] {
        &self.enrolled_courses
    }

    pub fn is_enrolled(&self, course_id: &CourseId) -> bool {
        self.enrolled_courses.contains(course_id)
    }

    // Idempotent: enrolling twice keeps a single entry.
    fn enroll(&mut self, course_id: CourseId) {
        if !self.enrolled_courses.contains(&course_id) {
            self.enrolled_courses.push(course_id);
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionState {
    pub current_page: Page,
    pub selected_course_id: Option<CourseId>,
    pub user: Option<User>,
    pub auth_modal_open: bool,
    pub auth_mode: AuthMode,
    pub payment_modal_open: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            current_page: Page::Landing,
            selected_course_id: None,
            user: None,
            auth_modal_open: false,
            auth_mode: AuthMode::Login,
            payment_modal_open: false,
        }
    }
}

/// Owns the session state and funnels every mutation through named
/// operations.
pub struct SessionController {
    catalog: Arc<Catalog>,
    state: SessionState,
}

impl SessionController {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            state: SessionState::default(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The course the current selection resolves to, if any.
    pub fn resolved_course(&self) -> Option<&Course> {
        self.state
            .selected_course_id
            .as_ref()
            .and_then(|id| self.catalog.find_by_id(id))
    }

    pub fn is_enrolled(&self, course_id: &CourseId) -> bool {
        self.state
            .user
            .as_ref()
            .is_some_and(|user| user.is_enrolled(course_id))
    }

    /// The page the views should actually draw. Pages whose preconditions
    /// are unmet (no user, or a selection that does not resolve) degrade to
    /// the landing page instead of rendering.
    pub fn renderable_page(&self) -> Page {
        match self.state.current_page {
            Page::CourseDetail if self.resolved_course().is_none() => Page::Landing,
            Page::Dashboard if self.state.user.is_none() => Page::Landing,
            Page::CourseViewer
                if self.state.user.is_none() || self.resolved_course().is_none() =>
            {
                Page::Landing
            }
            page => page,
        }
    }

    /// Select a course and show its detail page. The id is not validated
    /// here; resolution failure is handled at render time.
    pub fn view_course(&mut self, course_id: CourseId) {
        debug!(course = %course_id, "viewing course detail");
        self.state.selected_course_id = Some(course_id);
        self.state.current_page = Page::CourseDetail;
    }

    /// Ask to enroll in a course. With no user this only raises the signup
    /// modal; the enrollment intent is not remembered. A paid, not yet
    /// enrolled course raises the payment modal; anything else enrolls
    /// immediately and opens the viewer.
    pub fn request_enrollment(&mut self, course_id: &CourseId) {
        let Some(user) = self.state.user.as_mut() else {
            info!(course = %course_id, "enrollment requested while signed out");
            self.state.auth_mode = AuthMode::Signup;
            self.state.auth_modal_open = true;
            return;
        };

        let needs_payment = self
            .catalog
            .find_by_id(course_id)
            .is_some_and(|course| !course.is_free && !user.is_enrolled(course_id));

        if needs_payment {
            info!(course = %course_id, "paid course, opening payment");
            self.state.payment_modal_open = true;
        } else {
            info!(course = %course_id, "enrolling");
            user.enroll(course_id.clone());
            self.state.current_page = Page::CourseViewer;
        }
    }

    /// Settle the pending payment. Enrolls the selected course, lowers the
    /// payment modal and opens the viewer. A no-op without a user or a
    /// resolvable selection, and it never raises the modal, so a settlement
    /// arriving after the modal was closed cannot resurrect it.
    pub fn complete_payment(&mut self) {
        let Some(course_id) = self.state.selected_course_id.clone() else {
            return;
        };
        if self.catalog.find_by_id(&course_id).is_none() {
            return;
        }
        let Some(user) = self.state.user.as_mut() else {
            return;
        };

        info!(course = %course_id, "payment settled, enrolling");
        user.enroll(course_id);
        self.state.payment_modal_open = false;
        self.state.current_page = Page::CourseViewer;
    }

    /// Mock login: always succeeds. The name is the local part of the email
    /// address. The password is deliberately ignored.
    pub fn login(&mut self, email: &str, _password: &str) {
        let name = email.split('@').next().unwrap_or(email);
        info!(name, "signed in");
        self.state.user = Some(User::fabricate(name, email));
        self.state.auth_modal_open = false;
    }

    /// Mock signup: always succeeds with the given name.
    pub fn signup(&mut self, name: &str, email: &str, _password: &str) {
        info!(name, "signed up");
        self.state.user = Some(User::fabricate(name, email));
        self.state.auth_modal_open = false;
    }

    /// Clears the user and returns to the landing page. Lowers both modals
    /// so no user-only surface stays reachable.
    pub fn logout(&mut self) {
        info!("signed out");
        self.state.user = None;
        self.state.current_page = Page::Landing;
        self.state.auth_modal_open = false;
        self.state.payment_modal_open = false;
    }

    /// Select a course and open the viewer directly, without an enrollment
    /// check. Used by the dashboard and the detail page's continue action.
    pub fn start_course(&mut self, course_id: CourseId) {
        debug!(course = %course_id, "starting course");
        self.state.selected_course_id = Some(course_id);
        self.state.current_page = Page::CourseViewer;
    }

    /// Direct page transition for back/browse actions. Leaves the selection
    /// and user untouched.
    pub fn navigate_to(&mut self, page: Page) {
        debug!(?page, "navigating");
        self.state.current_page = page;
    }

    pub fn open_auth_modal(&mut self, mode: AuthMode) {
        self.state.auth_mode = mode;
        self.state.auth_modal_open = true;
    }

    pub fn close_auth_modal(&mut self) {
        self.state.auth_modal_open = false;
    }

    pub fn switch_auth_mode(&mut self) {
        self.state.auth_mode = self.state.auth_mode.toggled();
    }

    pub fn open_payment_modal(&mut self) {
        self.state.payment_modal_open = true;
    }

    pub fn close_payment_modal(&mut self) {
        self.state.payment_modal_open = false;
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
