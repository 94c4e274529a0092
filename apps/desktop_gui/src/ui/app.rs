use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use intake_core::catalog::ServiceCatalog;
use intake_core::contact::ContactMessage;
use intake_core::controller::ModalFormController;
use intake_core::sink::{acknowledgment_message, contact_acknowledgment};
use shared::domain::QuestionKind;

use crate::config::Settings;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_sink_command;
use crate::sink_bridge::commands::SinkCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Info,
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

impl StatusBanner {
    fn info(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Info,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Error,
            message: message.into(),
        }
    }
}

pub struct IntakeApp {
    settings: Settings,
    catalog: ServiceCatalog,
    controller: ModalFormController,
    contact: ContactMessage,
    search_query: String,
    banner: Option<StatusBanner>,
    /// Inline validation notice inside the request modal.
    submit_notice: Option<String>,
    contact_notice: Option<String>,
    /// One-shot focus request for the first modal control.
    focus_first_field: bool,
    cmd_tx: Sender<SinkCommand>,
    ui_rx: Receiver<UiEvent>,
}

impl IntakeApp {
    pub fn new(
        settings: Settings,
        cmd_tx: Sender<SinkCommand>,
        ui_rx: Receiver<UiEvent>,
        initial_service: Option<String>,
    ) -> Self {
        let catalog = ServiceCatalog::builtin();
        let mut controller = ModalFormController::new();
        let mut focus_first_field = false;
        if let Some(slug) = initial_service {
            controller.open(&catalog, &slug);
            focus_first_field = true;
        }

        Self {
            settings,
            catalog,
            controller,
            contact: ContactMessage::default(),
            search_query: String::new(),
            banner: None,
            submit_notice: None,
            contact_notice: None,
            focus_first_field,
            cmd_tx,
            ui_rx,
        }
    }

    fn drain_worker_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::SubmissionAccepted { service_title } => {
                    self.banner = Some(StatusBanner::info(acknowledgment_message(
                        &service_title,
                        self.settings.response_hours,
                    )));
                }
                UiEvent::SubmissionFailed { reason } => {
                    self.banner = Some(StatusBanner::error(format!(
                        "Request could not be recorded: {reason}"
                    )));
                }
                UiEvent::ContactAccepted => {
                    self.banner = Some(StatusBanner::info(contact_acknowledgment(
                        self.settings.response_hours,
                    )));
                }
                UiEvent::ContactFailed { reason } => {
                    self.banner = Some(StatusBanner::error(format!(
                        "Message could not be recorded: {reason}"
                    )));
                }
            }
        }
    }

    fn open_service(&mut self, slug: &str) {
        self.controller.open(&self.catalog, slug);
        self.submit_notice = None;
        self.focus_first_field = true;
    }

    fn close_modal(&mut self) {
        self.controller.close();
        self.submit_notice = None;
    }

    fn attempt_submit(&mut self) {
        let service_title = self
            .controller
            .title()
            .unwrap_or("Service Request")
            .to_string();

        match self.controller.submit() {
            Ok(payload) => {
                self.submit_notice = None;
                self.queue_for_delivery(SinkCommand::Deliver {
                    payload,
                    service_title,
                });
            }
            Err(blocked) => self.submit_notice = Some(blocked.to_string()),
        }
    }

    fn send_contact(&mut self) {
        match self.contact.validate() {
            Ok(()) => {
                let message = std::mem::take(&mut self.contact);
                self.contact_notice = None;
                self.queue_for_delivery(SinkCommand::DeliverContact { message });
            }
            Err(incomplete) => self.contact_notice = Some(incomplete.to_string()),
        }
    }

    fn queue_for_delivery(&mut self, cmd: SinkCommand) {
        let mut status = String::new();
        dispatch_sink_command(&self.cmd_tx, cmd, &mut status);
        if !status.is_empty() {
            self.banner = Some(StatusBanner::error(status));
        }
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Info => (
                    egui::Color32::from_rgb(47, 84, 55),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(96, 153, 102)),
                ),
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.banner = None;
                            }
                        });
                    });
                });
            ui.add_space(8.0);
        }
    }

    fn show_header(&self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading(&self.settings.studio_name);
        ui.label("Pick a service below to tell us what you need.");
        ui.add_space(12.0);
    }

    fn show_service_grid(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(
                egui::TextEdit::singleline(&mut self.search_query)
                    .hint_text("Filter services...")
                    .desired_width(260.0),
            );
        });
        ui.add_space(8.0);

        let cards: Vec<(String, String, String)> = self
            .catalog
            .search(&self.search_query)
            .into_iter()
            .map(|entry| {
                (
                    entry.slug.to_string(),
                    entry.definition.title.clone(),
                    entry.blurb.to_string(),
                )
            })
            .collect();

        if cards.is_empty() {
            ui.weak("No services match your search.");
            return;
        }

        let mut open_request: Option<String> = None;
        for row in cards.chunks(2) {
            ui.columns(2, |columns| {
                for (column, (slug, title, blurb)) in columns.iter_mut().zip(row) {
                    let response = egui::Frame::group(column.style())
                        .fill(column.visuals().faint_bg_color)
                        .corner_radius(8.0)
                        .inner_margin(egui::Margin::same(10))
                        .show(column, |ui| {
                            ui.strong(title);
                            ui.label(blurb);
                            ui.add_space(4.0);
                            if ui.button("Request Service").clicked() {
                                open_request = Some(slug.clone());
                            }
                        })
                        .response;

                    // The whole card is clickable, like the button inside it.
                    if response.interact(egui::Sense::click()).clicked() {
                        open_request = Some(slug.clone());
                    }
                }
            });
            ui.add_space(8.0);
        }

        if let Some(slug) = open_request {
            self.open_service(&slug);
        }
    }

    fn show_contact_section(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Contact Us")
            .default_open(false)
            .show(ui, |ui| {
                labeled_text_field(ui, "Name", "Full name", &mut self.contact.name, false);
                labeled_text_field(
                    ui,
                    "Email",
                    "you@example.com",
                    &mut self.contact.email,
                    false,
                );

                ui.label(egui::RichText::new("Service").strong());
                let entries: Vec<(String, String)> = self
                    .catalog
                    .entries()
                    .iter()
                    .map(|entry| (entry.slug.to_string(), entry.definition.title.clone()))
                    .collect();
                let selected_text = entries
                    .iter()
                    .find(|(slug, _)| *slug == self.contact.service)
                    .map(|(_, title)| title.clone())
                    .unwrap_or_else(|| "Select a service...".to_string());
                egui::ComboBox::from_id_salt("contact_service")
                    .selected_text(selected_text)
                    .show_ui(ui, |ui| {
                        for (slug, title) in &entries {
                            if ui
                                .selectable_label(self.contact.service == *slug, title)
                                .clicked()
                            {
                                self.contact.service = slug.clone();
                            }
                        }
                    });

                ui.label(egui::RichText::new("Message").strong());
                ui.add(
                    egui::TextEdit::multiline(&mut self.contact.message)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY)
                        .hint_text("How can we help?"),
                );

                if let Some(notice) = &self.contact_notice {
                    ui.colored_label(ui.visuals().error_fg_color, notice);
                }
                if ui.button("Send Message").clicked() {
                    self.send_contact();
                }
            });
    }

    fn show_request_modal(&mut self, ctx: &egui::Context) {
        if !self.controller.is_open() {
            return;
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.close_modal();
            return;
        }

        // Dimmed backdrop; clicking it dismisses the modal.
        let screen = ctx.screen_rect();
        let backdrop = egui::Area::new(egui::Id::new("request_modal_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(110));
                ui.allocate_rect(screen, egui::Sense::click())
            });
        if backdrop.inner.clicked() {
            self.close_modal();
            return;
        }

        let title = self
            .controller
            .title()
            .unwrap_or("Service Request")
            .to_string();

        let mut keep_open = true;
        egui::Window::new(title)
            .id(egui::Id::new("service_request_modal"))
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .collapsible(false)
            .resizable(false)
            .default_width(540.0)
            .open(&mut keep_open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(540.0).show(ui, |ui| {
                    self.show_client_info_fields(ui);
                    ui.separator();
                    self.show_question_controls(ui);

                    if let Some(notice) = &self.submit_notice {
                        ui.add_space(4.0);
                        ui.colored_label(ui.visuals().error_fg_color, notice);
                    }

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Submit Request").clicked() {
                            self.attempt_submit();
                        }
                        if ui.button("Cancel").clicked() {
                            self.close_modal();
                        }
                    });
                });
            });

        if !keep_open {
            self.close_modal();
        }
    }

    fn show_client_info_fields(&mut self, ui: &mut egui::Ui) {
        let focus_name = self.focus_first_field;
        self.focus_first_field = false;

        let Some(client) = self.controller.client_info_mut() else {
            return;
        };

        ui.strong("Your Details");
        ui.add_space(4.0);
        labeled_text_field(ui, "Name", "Full name", &mut client.name, focus_name);
        labeled_text_field(ui, "Email", "you@example.com", &mut client.email, false);
        labeled_text_field(ui, "Phone", "Optional phone number", &mut client.phone, false);
        labeled_text_field(
            ui,
            "Timeline",
            "When do you need this?",
            &mut client.timeline,
            false,
        );
        labeled_text_field(ui, "Budget", "Rough budget, if any", &mut client.budget, false);
        ui.label(egui::RichText::new("Additional information").strong());
        ui.add(
            egui::TextEdit::multiline(&mut client.notes)
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .hint_text("Anything else we should know?"),
        );
    }

    fn show_question_controls(&mut self, ui: &mut egui::Ui) {
        let questions = match self.controller.definition() {
            Some(definition) if !definition.questions.is_empty() => definition.questions.clone(),
            _ => return,
        };

        ui.strong("Service-Specific Questions");
        for (index, question) in questions.iter().enumerate() {
            ui.add_space(6.0);
            let label = if question.required {
                format!("{} *", question.prompt)
            } else {
                question.prompt.clone()
            };
            ui.label(egui::RichText::new(label).strong());

            match question.kind {
                QuestionKind::ShortText => {
                    if let Some(buffer) = self.controller.text_mut(index) {
                        let mut edit =
                            egui::TextEdit::singleline(buffer).desired_width(f32::INFINITY);
                        if let Some(hint) = &question.placeholder {
                            edit = edit.hint_text(hint.as_str());
                        }
                        ui.add(edit);
                    }
                }
                QuestionKind::LongText => {
                    if let Some(buffer) = self.controller.text_mut(index) {
                        let mut edit = egui::TextEdit::multiline(buffer)
                            .desired_rows(3)
                            .desired_width(f32::INFINITY);
                        if let Some(hint) = &question.placeholder {
                            edit = edit.hint_text(hint.as_str());
                        }
                        ui.add(edit);
                    }
                }
                QuestionKind::SingleSelect => {
                    let current = self.controller.selected(index).map(str::to_string);
                    let selected_text = current
                        .as_deref()
                        .and_then(|value| {
                            question
                                .options
                                .iter()
                                .find(|option| option.value == value)
                        })
                        .map(|option| option.label.clone())
                        .unwrap_or_else(|| "Please select...".to_string());

                    egui::ComboBox::from_id_salt(("request_question", index))
                        .selected_text(selected_text)
                        .width(ui.available_width().min(320.0))
                        .show_ui(ui, |ui| {
                            for option in &question.options {
                                let is_selected =
                                    current.as_deref() == Some(option.value.as_str());
                                if ui.selectable_label(is_selected, &option.label).clicked() {
                                    self.controller.select(index, &option.value);
                                }
                            }
                        });
                }
                QuestionKind::MultiSelect => {
                    for (opt_index, option) in question.options.iter().enumerate() {
                        let mut checked = self.controller.is_checked(index, opt_index);
                        let row_fill = if checked {
                            ui.visuals().selection.bg_fill.gamma_multiply(0.25)
                        } else {
                            egui::Color32::TRANSPARENT
                        };
                        egui::Frame::NONE
                            .fill(row_fill)
                            .corner_radius(4.0)
                            .inner_margin(egui::Margin::symmetric(6, 2))
                            .show(ui, |ui| {
                                if ui.checkbox(&mut checked, &option.label).changed() {
                                    self.controller.toggle_option(index, opt_index);
                                }
                            });
                    }
                }
            }
        }
    }
}

impl eframe::App for IntakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_worker_events();
        // Worker replies arrive off-thread; poll for them even when idle.
        ctx.request_repaint_after(Duration::from_millis(250));

        let modal_open = self.controller.is_open();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!modal_open, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.show_status_banner(ui);
                    self.show_header(ui);
                    self.show_service_grid(ui);
                    ui.add_space(16.0);
                    self.show_contact_section(ui);
                });
            });
        });

        self.show_request_modal(ctx);
    }
}

fn labeled_text_field(
    ui: &mut egui::Ui,
    label: &str,
    hint: &str,
    value: &mut String,
    should_focus: bool,
) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    let response = ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    if should_focus {
        response.request_focus();
    }
    response
}
