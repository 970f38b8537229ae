use chrono::{DateTime, Local};
use client_core::TimerState;
use eframe::egui;

use crate::controller::reducer::CustomerCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    StartTimer,
    StopTimer,
    Delete,
}

fn field_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).strong());
        ui.label(value);
    });
}

/// Shows RFC 3339 timestamps in local time; anything else is shown verbatim.
pub fn display_created_at(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|created| {
            created
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

fn timer_color(ui: &egui::Ui, state: TimerState) -> egui::Color32 {
    match state {
        TimerState::Idle => ui.visuals().text_color(),
        TimerState::Running => egui::Color32::from_rgb(0x3b, 0x82, 0xf6),
        TimerState::Expired => ui.visuals().error_fg_color,
    }
}

pub fn customer_card(
    ui: &mut egui::Ui,
    card: &CustomerCard,
    delete_pending: bool,
) -> Option<CardAction> {
    let mut action = None;
    let customer = &card.customer;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                field_row(ui, "Name:", &customer.name);
                field_row(ui, "Email:", &customer.email);
                field_row(ui, "Computer:", &customer.computer_label);
                field_row(ui, "Status:", customer.status_label());
                field_row(ui, "Registered:", &display_created_at(&customer.created_at));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let delete = egui::Button::new(
                    egui::RichText::new("Delete").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(0xef, 0x44, 0x44));
                if ui.add_enabled(!delete_pending, delete).clicked() {
                    action = Some(CardAction::Delete);
                }
            });
        });

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Time left:").strong());
            ui.label(
                egui::RichText::new(card.timer.display())
                    .monospace()
                    .color(timer_color(ui, card.timer.state())),
            );
            if card.timer.state() == TimerState::Expired {
                ui.colored_label(ui.visuals().error_fg_color, "time is up");
            }
        });
        ui.horizontal(|ui| {
            if ui.button("Start / Restart").clicked() {
                action = Some(CardAction::StartTimer);
            }
            if ui.button("Stop").clicked() {
                action = Some(CardAction::StopTimer);
            }
        });
    });

    action
}
