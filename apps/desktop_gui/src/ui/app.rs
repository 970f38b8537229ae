use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::reducer::{reduce, AppState, StatusBanner, StatusBannerSeverity};
use crate::ui::card::{customer_card, CardAction};

const FRAME_INTERVAL: Duration = Duration::from_millis(100);

pub struct PlaytimeApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    api_base_url: String,
    state: AppState,
}

impl PlaytimeApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        api_base_url: String,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            api_base_url,
            state: AppState::default(),
        };
        dispatch_backend_command(
            &app.cmd_tx,
            BackendCommand::LoadCustomers,
            &mut app.state.banner,
        );
        app
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            reduce(&mut self.state, event);
        }
    }

    fn submit_registration(&mut self) {
        match self.state.form.validate() {
            Ok(request) => {
                self.state.submitting = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::CreateCustomer { request },
                    &mut self.state.banner,
                );
            }
            Err(err) => {
                tracing::debug!("registration dropped: {err}");
                self.state.banner = Some(StatusBanner::error(
                    UiError::from_validation(&err).banner_text(),
                ));
            }
        }
    }

    fn show_banner(&mut self, ui: &mut egui::Ui) {
        let mut dismissed = false;
        if let Some(banner) = &self.state.banner {
            let color = match banner.severity {
                StatusBannerSeverity::Info => ui.visuals().text_color(),
                StatusBannerSeverity::Error => ui.visuals().error_fg_color,
            };
            ui.horizontal(|ui| {
                ui.colored_label(color, &banner.message);
                if ui.small_button("Dismiss").clicked() {
                    dismissed = true;
                }
            });
            ui.add_space(8.0);
        }
        if dismissed {
            self.state.banner = None;
        }
    }

    fn show_registration_form(&mut self, ui: &mut egui::Ui) {
        let form = &mut self.state.form;
        ui.label(egui::RichText::new("Name:").strong());
        ui.add(
            egui::TextEdit::singleline(&mut form.name)
                .hint_text("Full name...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);
        ui.label(egui::RichText::new("Email:").strong());
        ui.add(
            egui::TextEdit::singleline(&mut form.email)
                .hint_text("Email address...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);
        ui.label(egui::RichText::new("Computer:").strong());
        let computer = ui.add(
            egui::TextEdit::singleline(&mut form.computer_label)
                .hint_text("Computer to be used...")
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let enter_pressed =
            computer.lost_focus() && ui.input(|input| input.key_pressed(egui::Key::Enter));
        let register = egui::Button::new(egui::RichText::new("Register").strong())
            .min_size(egui::vec2(ui.available_width(), 28.0));
        let clicked = ui.add_enabled(!self.state.submitting, register).clicked();
        if (clicked || enter_pressed) && !self.state.submitting {
            self.submit_registration();
        }
    }

    fn show_customers(&mut self, ui: &mut egui::Ui) {
        if self.state.cards.is_empty() {
            let text = if self.state.loaded {
                "No customers registered yet."
            } else {
                "Loading customers..."
            };
            ui.weak(text);
            return;
        }

        let mut actions = Vec::new();
        for (index, card) in self.state.cards.iter().enumerate() {
            let delete_pending = self.state.is_delete_pending(&card.customer.id);
            let action = ui
                .push_id(card.customer.id.as_str(), |ui| {
                    customer_card(ui, card, delete_pending)
                })
                .inner;
            if let Some(action) = action {
                actions.push((index, action));
            }
            ui.add_space(8.0);
        }

        let now = Instant::now();
        for (index, action) in actions {
            match action {
                CardAction::StartTimer => self.state.cards[index].timer.start(now),
                CardAction::StopTimer => self.state.cards[index].timer.reset(),
                CardAction::Delete => {
                    let id = self.state.cards[index].customer.id.clone();
                    if dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::DeleteCustomer { id: id.clone() },
                        &mut self.state.banner,
                    ) {
                        self.state.pending_deletes.push(id);
                    }
                }
            }
        }
    }
}

impl eframe::App for PlaytimeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let now = Instant::now();
        for card in &mut self.state.cards {
            card.timer.advance(now);
        }

        egui::TopBottomPanel::bottom("connection").show(ctx, |ui| {
            ui.weak(format!("Directory: {}", self.api_base_url));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("PlayTime Machine Control");
                });
                ui.add_space(12.0);
                self.show_banner(ui);
                self.show_registration_form(ui);
                ui.add_space(16.0);
                ui.separator();
                ui.add_space(8.0);
                self.show_customers(ui);
            });
        });

        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}
