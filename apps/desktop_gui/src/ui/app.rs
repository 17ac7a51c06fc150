//! App shell: owns the session controller plus view-local scratch state and
//! renders the active page and modals.
//!
//! Views never mutate session state directly; every mutation goes through a
//! named `SessionController` operation. The one asynchronous flow (mock
//! payment settlement) round-trips through the worker bridge and is applied
//! in [`DesktopGuiApp::process_ui_events`] at the top of each frame.

use std::sync::Arc;

use chrono::Datelike;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::{Align2, Color32, FontId, RichText, Sense, Stroke};
use session_core::viewer::{progress_percent, LessonCursor};
use session_core::{AuthMode, Page, SessionController};
use shared::domain::{Course, CourseId};
use shared::Catalog;

use crate::backend_bridge::commands::AppCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_app_command;
use crate::ui::{theme, widgets};

const SELECTED_ROW_FILL: Color32 = Color32::from_rgb(219, 234, 254);

/// Scratch state for the auth modal; reset each time the modal opens, kept
/// across login/signup mode switches.
#[derive(Default)]
struct AuthFormState {
    name: String,
    email: String,
    password: String,
    error: Option<String>,
}

/// Scratch state for the payment modal. The card fields are never validated
/// or read; the checkout is a fixed-delay simulation.
#[derive(Default)]
struct PaymentFormState {
    card_number: String,
    expiry: String,
    cvc: String,
    cardholder: String,
    processing: bool,
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<AppCommand>,
    ui_rx: Receiver<UiEvent>,

    session: SessionController,

    auth_form: AuthFormState,
    payment_form: PaymentFormState,
    // Rebuilt whenever the viewer is entered or shows a different course.
    lesson_cursor: Option<(CourseId, LessonCursor)>,
    last_page: Page,
    search_query: String,

    status: String,
    theme_applied: bool,
}

impl DesktopGuiApp {
    pub fn new(
        cmd_tx: Sender<AppCommand>,
        ui_rx: Receiver<UiEvent>,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            session: SessionController::new(catalog),
            auth_form: AuthFormState::default(),
            payment_form: PaymentFormState::default(),
            lesson_cursor: None,
            last_page: Page::Landing,
            search_query: String::new(),
            status: "Browsing as guest".to_string(),
            theme_applied: false,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::PaymentSettled { course_id } => {
                    self.payment_form.processing = false;
                    let title = self
                        .session
                        .catalog()
                        .find_by_id(&course_id)
                        .map(|course| course.title.clone());
                    self.session.complete_payment();
                    if let Some(title) = title {
                        self.status = format!("Payment settled - enrolled in {title}");
                    }
                }
            }
        }
    }

    // ---------- actions ----------

    fn open_auth(&mut self, mode: AuthMode) {
        self.auth_form = AuthFormState::default();
        self.session.open_auth_modal(mode);
    }

    fn request_enrollment_for(&mut self, course_id: &CourseId) {
        let auth_was_open = self.session.state().auth_modal_open;
        let payment_was_open = self.session.state().payment_modal_open;

        self.session.request_enrollment(course_id);

        // Modals raised by the operation get fresh scratch state.
        if self.session.state().auth_modal_open && !auth_was_open {
            self.auth_form = AuthFormState::default();
        }
        if self.session.state().payment_modal_open && !payment_was_open {
            self.payment_form = PaymentFormState::default();
        }
        if self.session.is_enrolled(course_id) {
            if let Some(course) = self.session.catalog().find_by_id(course_id) {
                self.status = format!("Enrolled in {}", course.title);
            }
        }
    }

    fn submit_auth(&mut self) {
        let mode = self.session.state().auth_mode;
        let missing = self.auth_form.email.trim().is_empty()
            || self.auth_form.password.is_empty()
            || (mode == AuthMode::Signup && self.auth_form.name.trim().is_empty());
        if missing {
            self.auth_form.error = Some("Please fill in all fields.".to_string());
            return;
        }

        let email = self.auth_form.email.trim().to_string();
        match mode {
            AuthMode::Login => self.session.login(&email, &self.auth_form.password),
            AuthMode::Signup => {
                let name = self.auth_form.name.trim().to_string();
                self.session.signup(&name, &email, &self.auth_form.password);
            }
        }
        if let Some(user) = &self.session.state().user {
            self.status = format!("Signed in as {}", user.name);
        }
        self.auth_form = AuthFormState::default();
    }

    fn submit_payment(&mut self, course_id: CourseId) {
        self.payment_form.processing = true;
        self.status = "Processing payment...".to_string();
        dispatch_app_command(
            &self.cmd_tx,
            AppCommand::ProcessPayment { course_id },
            &mut self.status,
        );
    }

    fn logout(&mut self) {
        self.session.logout();
        self.status = "Browsing as guest".to_string();
    }

    // ---------- landing page ----------

    fn show_landing_page(&mut self, ctx: &egui::Context) {
        let free: Vec<Course> = self.session.catalog().free_courses().cloned().collect();
        let paid: Vec<Course> = self.session.catalog().paid_courses().cloned().collect();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_landing_header(ui);
                self.show_hero(ui);

                ui.add_space(18.0);
                section_heading(ui, "Free Courses", "Start learning without spending a penny");
                self.show_course_grid(ui, &free);

                ui.add_space(18.0);
                section_heading(
                    ui,
                    "Premium Courses",
                    "Invest in your future with expert-led courses",
                );
                self.show_course_grid(ui, &paid);

                ui.add_space(24.0);
                show_footer(ui);
            });
        });
    }

    fn show_landing_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("🎓").size(22.0));
            ui.label(RichText::new("LearnHub").color(theme::ACCENT).strong().size(18.0));

            ui.add_space(16.0);
            ui.label(RichText::new("Courses").color(theme::TEXT_MUTED));
            ui.label(RichText::new("About").color(theme::TEXT_MUTED));
            ui.label(RichText::new("Contact").color(theme::TEXT_MUTED));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(user) = self.session.state().user.clone() {
                    if ui.button("Logout").clicked() {
                        self.logout();
                    }
                    if ui.button("Dashboard").clicked() {
                        self.session.navigate_to(Page::Dashboard);
                    }
                    ui.label(RichText::new(format!("Hi, {}", user.name)).color(theme::TEXT_MUTED));
                } else {
                    let signup = egui::Button::new(RichText::new("Sign Up").color(Color32::WHITE))
                        .fill(theme::ACCENT);
                    if ui.add(signup).clicked() {
                        self.open_auth(AuthMode::Signup);
                    }
                    if ui.button("Login").clicked() {
                        self.open_auth(AuthMode::Login);
                    }
                }
            });
        });
        ui.separator();
    }

    fn show_hero(&mut self, ui: &mut egui::Ui) {
        egui::Frame::NONE
            .fill(theme::HERO_FILL)
            .corner_radius(12.0)
            .inner_margin(egui::Margin::symmetric(32, 40))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("Learn Without Limits")
                            .color(Color32::WHITE)
                            .strong()
                            .size(30.0),
                    );
                    ui.label(
                        RichText::new(
                            "Discover courses from expert instructors. Start learning today \
                             with free and paid courses.",
                        )
                        .color(Color32::from_rgb(219, 234, 254))
                        .size(15.0),
                    );

                    ui.add_space(12.0);
                    // Decorative: typing here filters nothing.
                    ui.add_sized(
                        [ui.available_width().min(480.0), 32.0],
                        egui::TextEdit::singleline(&mut self.search_query)
                            .hint_text("What do you want to learn?"),
                    );

                    ui.add_space(12.0);
                    ui.horizontal_wrapped(|ui| {
                        for chip in ["50,000+ Students", "100+ Courses", "4.8 Average Rating"] {
                            egui::Frame::NONE
                                .fill(Color32::from_rgba_unmultiplied(255, 255, 255, 26))
                                .corner_radius(8.0)
                                .inner_margin(egui::Margin::symmetric(10, 6))
                                .show(ui, |ui| {
                                    ui.label(RichText::new(chip).color(Color32::WHITE).size(13.0));
                                });
                        }
                    });
                });
            });
    }

    fn show_course_grid(&mut self, ui: &mut egui::Ui, courses: &[Course]) {
        ui.horizontal_wrapped(|ui| {
            for course in courses {
                if widgets::course_card(ui, course).clicked() {
                    self.session.view_course(course.id.clone());
                }
            }
        });
    }

    // ---------- course detail ----------

    fn show_course_detail(&mut self, ctx: &egui::Context) {
        let Some(course) = self.session.resolved_course().cloned() else {
            return;
        };
        let enrolled = self.session.is_enrolled(&course.id);
        let signed_in = self.session.state().user.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if ui.button("← Back to Courses").clicked() {
                    self.session.navigate_to(Page::Landing);
                }
                ui.separator();

                show_detail_hero(ui, &course);
                ui.add_space(14.0);

                let left_width = (ui.available_width() * 0.62).max(360.0);
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(left_width);
                        show_learning_outcomes(ui);
                        ui.add_space(10.0);
                        show_lesson_list(ui, &course);
                        ui.add_space(10.0);
                        show_requirements(ui);
                    });

                    ui.vertical(|ui| {
                        ui.set_width((ui.available_width() - 16.0).max(240.0));
                        self.show_enroll_card(ui, &course, enrolled, signed_in);
                    });
                });
            });
        });
    }

    fn show_enroll_card(
        &mut self,
        ui: &mut egui::Ui,
        course: &Course,
        enrolled: bool,
        signed_in: bool,
    ) {
        widgets::content_card(ui, |ui| {
            ui.label(widgets::price_label(course).size(24.0));
            ui.add_space(6.0);

            if enrolled {
                let button = egui::Button::new(
                    RichText::new("Continue Learning").color(Color32::WHITE).strong(),
                )
                .fill(theme::ACCENT)
                .min_size(egui::vec2(ui.available_width(), 36.0));
                if ui.add(button).clicked() {
                    self.session.start_course(course.id.clone());
                }
            } else {
                let label = if course.is_free { "Enroll for Free" } else { "Enroll Now" };
                let button = egui::Button::new(RichText::new(label).color(Color32::WHITE).strong())
                    .fill(theme::ACCENT)
                    .min_size(egui::vec2(ui.available_width(), 36.0));
                if ui.add(button).clicked() {
                    self.request_enrollment_for(&course.id);
                }
            }

            if !signed_in {
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        RichText::new("Already have an account?")
                            .size(12.0)
                            .color(theme::TEXT_MUTED),
                    );
                    if ui
                        .button(RichText::new("Login").size(12.0).color(theme::ACCENT))
                        .clicked()
                    {
                        self.open_auth(AuthMode::Login);
                    }
                });
            }

            ui.add_space(8.0);
            ui.separator();
            ui.label(RichText::new("This course includes").strong().size(13.0));
            for item in [
                format!("{} of on-demand video", course.duration),
                format!("{} lessons", course.lessons.len()),
                "Full lifetime access".to_string(),
                "Certificate of completion".to_string(),
            ] {
                ui.label(RichText::new(format!("• {item}")).size(12.0).color(theme::TEXT_MUTED));
            }
        });
    }

    // ---------- dashboard ----------

    fn show_dashboard(&mut self, ctx: &egui::Context) {
        let Some(user) = self.session.state().user.clone() else {
            return;
        };
        let enrolled: Vec<Course> = user
            .enrolled_courses()
            .iter()
            .filter_map(|id| self.session.catalog().find_by_id(id))
            .cloned()
            .collect();
        let recommended: Vec<Course> = self
            .session
            .catalog()
            .courses()
            .iter()
            .filter(|course| !user.is_enrolled(&course.id))
            .take(3)
            .cloned()
            .collect();
        let hours: u64 = enrolled
            .iter()
            .map(|course| widgets::parse_leading_hours(&course.duration))
            .sum();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("← Back to Home").clicked() {
                        self.session.navigate_to(Page::Landing);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Logout").clicked() {
                            self.logout();
                        }
                    });
                });
                ui.separator();

                ui.heading(format!("Welcome back, {}!", user.name));
                ui.label(RichText::new("Continue your learning journey").color(theme::TEXT_MUTED));
                ui.add_space(12.0);

                ui.horizontal_wrapped(|ui| {
                    widgets::stat_card(
                        ui,
                        "Enrolled Courses",
                        &enrolled.len().to_string(),
                        theme::ACCENT,
                    );
                    widgets::stat_card(ui, "Hours Learned", &format!("{hours}h"), theme::FREE_BADGE);
                    widgets::stat_card(ui, "Certificates", "0", Color32::from_rgb(147, 51, 234));
                    widgets::stat_card(ui, "Achievements", "0", Color32::from_rgb(234, 88, 12));
                });

                ui.add_space(16.0);
                ui.horizontal(|ui| {
                    ui.heading("My Courses");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Browse More Courses").clicked() {
                            self.session.navigate_to(Page::Landing);
                        }
                    });
                });
                ui.add_space(6.0);

                if enrolled.is_empty() {
                    self.show_empty_dashboard(ui);
                } else {
                    ui.horizontal_wrapped(|ui| {
                        for course in &enrolled {
                            self.show_enrolled_card(ui, course);
                        }
                    });

                    if !recommended.is_empty() {
                        ui.add_space(16.0);
                        ui.heading("Recommended for You");
                        ui.add_space(6.0);
                        ui.horizontal_wrapped(|ui| {
                            for course in &recommended {
                                // Recommendations lead back to the catalog,
                                // not into the course.
                                if widgets::course_card(ui, course).clicked() {
                                    self.session.navigate_to(Page::Landing);
                                }
                            }
                        });
                    }
                }
            });
        });
    }

    fn show_empty_dashboard(&mut self, ui: &mut egui::Ui) {
        widgets::content_card(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(RichText::new("📚").size(36.0));
                ui.label(RichText::new("No courses enrolled yet").strong().size(16.0));
                ui.label(
                    RichText::new("Start your learning journey by enrolling in a course")
                        .color(theme::TEXT_MUTED),
                );
                ui.add_space(8.0);
                if ui.button("Browse Courses").clicked() {
                    self.session.navigate_to(Page::Landing);
                }
                ui.add_space(16.0);
            });
        });
    }

    fn show_enrolled_card(&mut self, ui: &mut egui::Ui, course: &Course) {
        egui::Frame::NONE
            .fill(theme::CARD_BACKGROUND)
            .stroke(Stroke::new(1.0, theme::CARD_STROKE))
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(12, 12))
            .show(ui, |ui| {
                ui.set_width(widgets::CARD_WIDTH);

                widgets::thumbnail_banner(ui, course, widgets::CARD_WIDTH, 110.0);
                ui.label(RichText::new(&course.title).strong().size(15.0));
                ui.label(
                    RichText::new(&course.instructor)
                        .size(12.0)
                        .color(theme::TEXT_MUTED),
                );

                let progress = progress_percent(&course.lessons);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Progress").size(12.0).color(theme::TEXT_MUTED));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{progress}%")).size(12.0));
                    });
                });
                ui.add(egui::ProgressBar::new(f32::from(progress) / 100.0).desired_width(
                    widgets::CARD_WIDTH,
                ));

                ui.add_space(6.0);
                let button = egui::Button::new(
                    RichText::new("Continue Learning").color(Color32::WHITE),
                )
                .fill(theme::ACCENT)
                .min_size(egui::vec2(widgets::CARD_WIDTH, 30.0));
                if ui.add(button).clicked() {
                    self.session.start_course(course.id.clone());
                }
            });
    }

    // ---------- course viewer ----------

    fn show_course_viewer(&mut self, ctx: &egui::Context) {
        let Some(course) = self.session.resolved_course().cloned() else {
            return;
        };
        let mut cursor = self.cursor_for(&course);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("← Back to Dashboard").clicked() {
                    self.session.navigate_to(Page::Dashboard);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let progress = progress_percent(&course.lessons);
                    ui.add(
                        egui::ProgressBar::new(f32::from(progress) / 100.0).desired_width(140.0),
                    );
                    ui.label(
                        RichText::new(format!("Progress: {progress}%"))
                            .size(13.0)
                            .color(theme::TEXT_MUTED),
                    );
                });
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                let left_width = (ui.available_width() * 0.64).max(380.0);
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(left_width);
                        show_video_placeholder(ui, &course, left_width);
                        ui.add_space(10.0);
                        show_lesson_info(ui, &course, cursor.index());
                        ui.add_space(10.0);
                        show_lesson_resources(ui);
                        ui.add_space(10.0);

                        ui.horizontal(|ui| {
                            if ui
                                .add_enabled(
                                    !cursor.at_start(),
                                    egui::Button::new("Previous Lesson"),
                                )
                                .clicked()
                            {
                                cursor.select_previous();
                            }
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    let next = egui::Button::new(
                                        RichText::new("Next Lesson").color(Color32::WHITE),
                                    )
                                    .fill(theme::ACCENT);
                                    if ui.add_enabled(!cursor.at_end(), next).clicked() {
                                        cursor.select_next();
                                    }
                                },
                            );
                        });
                    });

                    ui.vertical(|ui| {
                        ui.set_width((ui.available_width() - 16.0).max(240.0));
                        show_lesson_sidebar(ui, &course, &mut cursor);
                    });
                });
            });
        });

        self.lesson_cursor = Some((course.id, cursor));
    }

    fn cursor_for(&mut self, course: &Course) -> LessonCursor {
        match &self.lesson_cursor {
            Some((id, cursor)) if *id == course.id => *cursor,
            _ => LessonCursor::new(course.lessons.len()),
        }
    }

    // ---------- modals ----------

    fn show_auth_modal(&mut self, ctx: &egui::Context) {
        if !self.session.state().auth_modal_open {
            return;
        }
        let mode = self.session.state().auth_mode;
        let (title, subtitle) = match mode {
            AuthMode::Login => ("Welcome Back", "Login to continue your learning journey"),
            AuthMode::Signup => ("Create Account", "Sign up to start learning today"),
        };

        let mut keep_open = true;
        egui::Window::new(title)
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_width(320.0);
                ui.label(RichText::new(subtitle).color(theme::TEXT_MUTED).size(13.0));
                ui.add_space(6.0);

                if let Some(error) = self.auth_form.error.clone() {
                    ui.label(RichText::new(error).color(Color32::from_rgb(185, 28, 28)));
                    ui.add_space(4.0);
                }

                if mode == AuthMode::Signup {
                    labelled_field(ui, "Full Name", "Ada Lovelace", &mut self.auth_form.name, false);
                }
                labelled_field(ui, "Email", "you@example.com", &mut self.auth_form.email, false);
                labelled_field(ui, "Password", "••••••••", &mut self.auth_form.password, true);

                ui.add_space(8.0);
                let submit_label = match mode {
                    AuthMode::Login => "Login",
                    AuthMode::Signup => "Sign Up",
                };
                let submit = egui::Button::new(
                    RichText::new(submit_label).color(Color32::WHITE).strong(),
                )
                .fill(theme::ACCENT)
                .min_size(egui::vec2(ui.available_width(), 34.0));
                let submitted = ui.add(submit).clicked()
                    || ui.input(|input| input.key_pressed(egui::Key::Enter));
                if submitted {
                    self.submit_auth();
                }

                ui.add_space(6.0);
                ui.horizontal_wrapped(|ui| {
                    let (question, switch_label) = match mode {
                        AuthMode::Login => ("Don't have an account?", "Sign Up"),
                        AuthMode::Signup => ("Already have an account?", "Login"),
                    };
                    ui.label(RichText::new(question).size(12.0).color(theme::TEXT_MUTED));
                    if ui
                        .button(RichText::new(switch_label).size(12.0).color(theme::ACCENT))
                        .clicked()
                    {
                        self.session.switch_auth_mode();
                    }
                });
            });

        if !keep_open {
            self.session.close_auth_modal();
        }
    }

    fn show_payment_modal(&mut self, ctx: &egui::Context) {
        if !self.session.state().payment_modal_open {
            return;
        }
        let Some(course) = self.session.resolved_course().cloned() else {
            return;
        };

        let mut keep_open = true;
        egui::Window::new("Complete Your Purchase")
            .open(&mut keep_open)
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_width(380.0);
                ui.label(
                    RichText::new("Simulated checkout - no card is ever charged")
                        .color(theme::TEXT_MUTED)
                        .size(13.0),
                );
                ui.add_space(6.0);

                egui::Frame::NONE
                    .fill(theme::PAGE_BACKGROUND)
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(10, 8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            widgets::thumbnail_banner(ui, &course, 72.0, 44.0);
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&course.title).size(13.0).strong());
                                ui.label(
                                    RichText::new(&course.instructor)
                                        .size(12.0)
                                        .color(theme::TEXT_MUTED),
                                );
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(widgets::price_label(&course));
                                },
                            );
                        });
                    });

                ui.add_space(6.0);
                labelled_field(
                    ui,
                    "Card Number",
                    "1234 5678 9012 3456",
                    &mut self.payment_form.card_number,
                    false,
                );
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.set_width(180.0);
                        labelled_field(ui, "Expiry Date", "MM/YY", &mut self.payment_form.expiry, false);
                    });
                    ui.vertical(|ui| {
                        ui.set_width(120.0);
                        labelled_field(ui, "CVC", "123", &mut self.payment_form.cvc, false);
                    });
                });
                labelled_field(
                    ui,
                    "Cardholder Name",
                    "Ada Lovelace",
                    &mut self.payment_form.cardholder,
                    false,
                );

                ui.add_space(6.0);
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Total").color(theme::TEXT_MUTED));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(widgets::price_label(&course));
                    });
                });

                ui.add_space(6.0);
                let pay_label = if self.payment_form.processing {
                    "Processing...".to_string()
                } else {
                    format!("Pay ${}", course.price)
                };
                let pay = egui::Button::new(RichText::new(pay_label).color(Color32::WHITE).strong())
                    .fill(theme::ACCENT)
                    .min_size(egui::vec2(ui.available_width(), 36.0));
                if ui.add_enabled(!self.payment_form.processing, pay).clicked() {
                    self.submit_payment(course.id.clone());
                }
                if self.payment_form.processing {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(
                            RichText::new("Confirming with the payment provider...")
                                .size(12.0)
                                .color(theme::TEXT_MUTED),
                        );
                    });
                }
            });

        if !keep_open {
            self.session.close_payment_modal();
        }
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(RichText::new(&self.status).color(theme::TEXT_MUTED));
            });
        });

        let page = self.session.renderable_page();
        if page != self.last_page {
            if page == Page::CourseViewer {
                // Each visit starts at the first lesson.
                self.lesson_cursor = None;
            }
            self.last_page = page;
        }

        match page {
            Page::Landing => self.show_landing_page(ctx),
            Page::CourseDetail => self.show_course_detail(ctx),
            Page::Dashboard => self.show_dashboard(ctx),
            Page::CourseViewer => self.show_course_viewer(ctx),
        }

        self.show_auth_modal(ctx);
        self.show_payment_modal(ctx);

        // Worker events do not wake the UI thread by themselves.
        if self.payment_form.processing {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}

// ---------- free-standing view pieces ----------

fn section_heading(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.heading(title);
    ui.label(RichText::new(subtitle).color(theme::TEXT_MUTED));
    ui.add_space(6.0);
}

fn labelled_field(ui: &mut egui::Ui, label: &str, hint: &str, value: &mut String, password: bool) {
    ui.label(RichText::new(label).strong().size(12.0));
    ui.add_sized(
        [ui.available_width(), 30.0],
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .password(password),
    );
    ui.add_space(4.0);
}

fn show_detail_hero(ui: &mut egui::Ui, course: &Course) {
    egui::Frame::NONE
        .fill(theme::HERO_FILL)
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(24, 22))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                widgets::badge(ui, course.level.label(), Color32::WHITE, theme::ACCENT);
                if course.is_free {
                    widgets::badge(ui, "FREE", theme::FREE_BADGE, Color32::WHITE);
                }
            });
            ui.label(
                RichText::new(&course.title)
                    .color(Color32::WHITE)
                    .strong()
                    .size(24.0),
            );
            ui.label(
                RichText::new(&course.description)
                    .color(Color32::from_rgb(219, 234, 254))
                    .size(14.0),
            );
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("★").color(theme::STAR));
                ui.label(
                    RichText::new(format!("{} rating", course.rating)).color(Color32::WHITE),
                );
                ui.add_space(10.0);
                ui.label(
                    RichText::new(format!(
                        "{} students",
                        widgets::format_count(course.students_count)
                    ))
                    .color(Color32::WHITE),
                );
                ui.add_space(10.0);
                ui.label(RichText::new(&course.duration).color(Color32::WHITE));
            });
            ui.label(
                RichText::new(format!("Created by {}", course.instructor))
                    .color(Color32::from_rgb(219, 234, 254))
                    .size(12.0),
            );
        });
}

fn show_learning_outcomes(ui: &mut egui::Ui) {
    widgets::content_card(ui, |ui| {
        ui.label(RichText::new("What you'll learn").strong().size(16.0));
        ui.add_space(4.0);
        for outcome in [
            "Build real-world projects from scratch",
            "Master the latest industry tools and technologies",
            "Gain practical experience with hands-on exercises",
            "Get a certificate upon completion",
        ] {
            ui.horizontal(|ui| {
                ui.label(RichText::new("✔").color(theme::FREE_BADGE));
                ui.label(RichText::new(outcome).size(13.0));
            });
        }
    });
}

fn show_lesson_list(ui: &mut egui::Ui, course: &Course) {
    widgets::content_card(ui, |ui| {
        ui.label(RichText::new("Course Content").strong().size(16.0));
        ui.add_space(4.0);
        for (index, lesson) in course.lessons.iter().enumerate() {
            egui::Frame::NONE
                .fill(theme::PAGE_BACKGROUND)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{}", index + 1))
                                .color(theme::ACCENT)
                                .strong(),
                        );
                        ui.vertical(|ui| {
                            ui.label(RichText::new(&lesson.title).size(13.0));
                            ui.label(
                                RichText::new(&lesson.duration)
                                    .size(11.0)
                                    .color(theme::TEXT_MUTED),
                            );
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(RichText::new("▶").color(theme::TEXT_MUTED));
                            },
                        );
                    });
                });
        }
    });
}

fn show_requirements(ui: &mut egui::Ui) {
    widgets::content_card(ui, |ui| {
        ui.label(RichText::new("Requirements").strong().size(16.0));
        ui.add_space(4.0);
        for requirement in [
            "No prior experience needed - we'll teach you everything",
            "A computer with internet connection",
            "Willingness to learn and practice",
        ] {
            ui.label(
                RichText::new(format!("• {requirement}"))
                    .size(13.0)
                    .color(theme::TEXT_MUTED),
            );
        }
    });
}

fn show_video_placeholder(ui: &mut egui::Ui, course: &Course, width: f32) {
    let height = (width * 9.0 / 16.0).min(320.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, egui::CornerRadius::same(10), theme::VIDEO_BACKGROUND);
    painter.circle_filled(rect.center(), 28.0, theme::ACCENT);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "▶",
        FontId::proportional(24.0),
        Color32::WHITE,
    );
    painter.text(
        rect.center_bottom() - egui::vec2(0.0, 16.0),
        Align2::CENTER_CENTER,
        &course.title,
        FontId::proportional(13.0),
        Color32::from_rgb(209, 213, 219),
    );
}

fn show_lesson_info(ui: &mut egui::Ui, course: &Course, lesson_index: usize) {
    let Some(lesson) = course.lessons.get(lesson_index) else {
        return;
    };
    widgets::content_card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&lesson.title).strong().size(17.0));
                ui.label(
                    RichText::new(format!(
                        "Lesson {} of {} • {}",
                        lesson_index + 1,
                        course.lessons.len(),
                        lesson.duration
                    ))
                    .size(12.0)
                    .color(theme::TEXT_MUTED),
                );
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_enabled(false, egui::Button::new("Mark as Complete"))
                    .on_disabled_hover_text("Completion tracking is not part of this demo");
            });
        });

        ui.add_space(6.0);
        ui.label(
            RichText::new(
                "In this lesson, you'll learn the fundamental concepts and practical \
                 applications. Follow along with the video and complete the exercises to \
                 reinforce your understanding.",
            )
            .size(13.0),
        );
        ui.add_space(4.0);
        ui.label(RichText::new("Key Takeaways").strong().size(13.0));
        for takeaway in [
            "Understand the core concepts",
            "Apply knowledge through practical examples",
            "Build a solid foundation for advanced topics",
        ] {
            ui.label(RichText::new(format!("• {takeaway}")).size(13.0));
        }
    });
}

fn show_lesson_resources(ui: &mut egui::Ui) {
    widgets::content_card(ui, |ui| {
        ui.label(RichText::new("Lesson Resources").strong().size(16.0));
        ui.add_space(4.0);
        for (name, details) in [("Lesson Notes", "PDF • 2.5 MB"), ("Exercise Files", "ZIP • 5.2 MB")]
        {
            egui::Frame::NONE
                .fill(theme::PAGE_BACKGROUND)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("🗎").color(theme::ACCENT));
                        ui.vertical(|ui| {
                            ui.label(RichText::new(name).size(13.0));
                            ui.label(RichText::new(details).size(11.0).color(theme::TEXT_MUTED));
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.add_enabled(false, egui::Button::new("Download"))
                                    .on_disabled_hover_text("Downloads are not part of this demo");
                            },
                        );
                    });
                });
        }
    });
}

fn show_lesson_sidebar(ui: &mut egui::Ui, course: &Course, cursor: &mut LessonCursor) {
    widgets::content_card(ui, |ui| {
        ui.label(RichText::new("Course Content").strong().size(16.0));
        ui.add_space(4.0);
        egui::ScrollArea::vertical().max_height(480.0).show(ui, |ui| {
            for (index, lesson) in course.lessons.iter().enumerate() {
                let selected = index == cursor.index();
                let fill = if selected {
                    SELECTED_ROW_FILL
                } else {
                    theme::CARD_BACKGROUND
                };
                let response = egui::Frame::NONE
                    .fill(fill)
                    .corner_radius(8.0)
                    .inner_margin(egui::Margin::symmetric(8, 6))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            let marker = if lesson.is_completed {
                                RichText::new("✔").color(theme::FREE_BADGE)
                            } else {
                                RichText::new("○").color(theme::TEXT_MUTED)
                            };
                            ui.label(marker);
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("{}. {}", index + 1, lesson.title))
                                        .size(12.5),
                                );
                                ui.label(
                                    RichText::new(&lesson.duration)
                                        .size(11.0)
                                        .color(theme::TEXT_MUTED),
                                );
                            });
                            if selected {
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        ui.label(RichText::new("▶").color(theme::ACCENT));
                                    },
                                );
                            }
                        });
                    })
                    .response;
                let row_id = ui.id().with(("lesson_row", index));
                if ui.interact(response.rect, row_id, Sense::click()).clicked() {
                    cursor.select(index);
                }
            }
        });
    });
}

fn show_footer(ui: &mut egui::Ui) {
    egui::Frame::NONE
        .fill(theme::FOOTER_BACKGROUND)
        .corner_radius(12.0)
        .inner_margin(egui::Margin::symmetric(24, 20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.vertical(|ui| {
                    ui.set_width(240.0);
                    ui.label(RichText::new("🎓 LearnHub").color(Color32::WHITE).strong());
                    ui.label(
                        RichText::new("Empowering learners worldwide with quality education.")
                            .size(12.0)
                            .color(Color32::from_rgb(156, 163, 175)),
                    );
                });
                for (heading, links) in [
                    ("Company", ["About Us", "Careers", "Blog"]),
                    ("Support", ["Help Center", "Terms of Service", "Privacy Policy"]),
                    ("Connect", ["Twitter", "Facebook", "LinkedIn"]),
                ] {
                    ui.vertical(|ui| {
                        ui.set_width(150.0);
                        ui.label(RichText::new(heading).color(Color32::WHITE).size(13.0));
                        for link in links {
                            ui.label(
                                RichText::new(link)
                                    .size(12.0)
                                    .color(Color32::from_rgb(156, 163, 175)),
                            );
                        }
                    });
                }
            });
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!(
                    "© {} LearnHub. All rights reserved.",
                    chrono::Local::now().year()
                ))
                .size(12.0)
                .color(Color32::from_rgb(156, 163, 175)),
            );
        });
}
