//! Number lab panel: synchronized fields, bit grid, signed and byte views.

use eframe::egui::{self, RichText, Sense};

use super::widgets::{byte_cells, copy_button, info_row, section, status_badge, tool_btn};
use crate::app::LabApp;
use crate::repr::{self, Base, BitWidth};
use crate::util::color::{
    ALERT_RED, CAUTION_AMBER, DATA_WHITE, DIM_CYAN, INTERFACE_GRAY, MUTED_TEXT, TACTICAL_CYAN,
    VOID_BLACK,
};

/// Bits per row of the grid.
const GRID_ROW_BITS: u32 = 16;

pub fn draw_number_lab(app: &mut LabApp, ui: &mut egui::Ui) {
    draw_width_selector(app, ui);
    ui.add_space(8.0);

    let width = app.number.width();
    let set_bits = format!("{} of {} set", app.number.value().count_ones(), width.bits());
    let status = match app.number.challenge() {
        None => "idle",
        Some(_) if app.number.challenge_solved() => "solved",
        Some(_) => "open",
    };

    section(ui, "REPRESENTATIONS", width.name(), |ui| draw_fields(app, ui));
    section(ui, "BITS", &set_bits, |ui| draw_bit_grid(app, ui));
    section(ui, "INTERPRETATION", "two's complement", |ui| draw_interpretation(app, ui));
    section(ui, "CHALLENGE", status, |ui| draw_challenge(app, ui));
}

fn draw_width_selector(app: &mut LabApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("WIDTH:").size(10.0).color(MUTED_TEXT));
        let mut width = app.number.width();
        for &w in BitWidth::all() {
            ui.selectable_value(&mut width, w, RichText::new(w.name()).monospace());
        }
        app.number.set_width(width);
    });
}

fn draw_fields(app: &mut LabApp, ui: &mut egui::Ui) {
    for &base in Base::all() {
        ui.horizontal(|ui| {
            ui.add_sized(
                [40.0, ui.spacing().interact_size.y],
                egui::Label::new(
                    RichText::new(base.name())
                        .monospace()
                        .strong()
                        .color(TACTICAL_CYAN),
                ),
            );

            let mut buffer = app.number.field(base).to_string();
            let response = ui.add(
                egui::TextEdit::singleline(&mut buffer)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(320.0),
            );
            if response.changed() {
                app.number.edit_field(base, &buffer);
            }
            if response.lost_focus() {
                app.number.commit_fields();
            }

            let canonical = app.number.formatted(base);
            copy_button(app, ui, base.name(), &canonical);

            if let Some(hint) = app.number.hint.as_ref().filter(|h| h.base == base) {
                ui.label(
                    RichText::new(hint.error.to_string())
                        .size(10.0)
                        .color(CAUTION_AMBER),
                );
            }
        });
    }
}

fn draw_bit_grid(app: &mut LabApp, ui: &mut egui::Ui) {
    let width = app.number.width();
    let value = app.number.value();
    let mut toggled = None;

    let rows = width.bits().div_ceil(GRID_ROW_BITS);
    for row in (0..rows).rev() {
        let top = ((row + 1) * GRID_ROW_BITS).min(width.bits());
        let bottom = row * GRID_ROW_BITS;
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            for index in (bottom..top).rev() {
                let set = repr::bit_is_set(value, index);
                let (rect, response) = ui.allocate_exact_size(egui::vec2(26.0, 36.0), Sense::click());
                let fill = if set { DIM_CYAN } else { VOID_BLACK };
                let sign = index == width.bits() - 1;
                let stroke = if response.hovered() {
                    TACTICAL_CYAN
                } else if sign {
                    ALERT_RED.gamma_multiply(0.6)
                } else {
                    INTERFACE_GRAY
                };
                let painter = ui.painter();
                painter.rect_filled(rect, 0.0, fill);
                painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, stroke));
                painter.text(
                    rect.center() - egui::vec2(0.0, 5.0),
                    egui::Align2::CENTER_CENTER,
                    if set { "1" } else { "0" },
                    egui::FontId::monospace(14.0),
                    DATA_WHITE,
                );
                painter.text(
                    rect.center() + egui::vec2(0.0, 11.0),
                    egui::Align2::CENTER_CENTER,
                    index.to_string(),
                    egui::FontId::monospace(8.0),
                    MUTED_TEXT,
                );
                let response = response.on_hover_text(format!(
                    "bit {index} = {}{}",
                    repr::place_value(index),
                    if sign { " (sign bit)" } else { "" }
                ));
                if response.clicked() {
                    toggled = Some(index);
                }
                // Gap between nibbles
                if index % 4 == 0 && index != bottom {
                    ui.add_space(6.0);
                }
            }
        });
    }

    if let Some(index) = toggled {
        app.number.toggle_bit(index);
    }
}

fn draw_interpretation(app: &mut LabApp, ui: &mut egui::Ui) {
    let width = app.number.width();
    let (lo, hi) = repr::signed_range(width);

    info_row(ui, "UNSIGNED", &app.number.value().to_string());
    info_row(ui, "SIGNED (2'S COMP)", &app.number.signed().to_string());
    info_row(
        ui,
        "UNSIGNED RANGE",
        &format!("0 .. {}", width.max_unsigned()),
    );
    info_row(ui, "SIGNED RANGE", &format!("{lo} .. {hi}"));

    ui.add_space(6.0);
    ui.label(RichText::new("BIG-ENDIAN").monospace().size(10.0).color(MUTED_TEXT));
    byte_cells(ui, &app.number.big_endian(), |_| TACTICAL_CYAN);
    ui.label(RichText::new("LITTLE-ENDIAN").monospace().size(10.0).color(MUTED_TEXT));
    byte_cells(ui, &app.number.little_endian(), |_| CAUTION_AMBER);
}

fn draw_challenge(app: &mut LabApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if tool_btn(ui, "NEW TARGET", true) {
            app.number.new_challenge(&mut rand::rng());
        }
        let has_challenge = app.number.challenge().is_some();
        if tool_btn(ui, "CLEAR", has_challenge) {
            app.number.clear_challenge();
        }
    });

    match app.number.challenge().copied() {
        Some(challenge) => {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "SET THE {} BITS TO {}",
                        challenge.width.name().to_uppercase(),
                        challenge.target
                    ))
                    .monospace()
                    .color(DATA_WHITE),
                );
                let solved = app.number.challenge_solved();
                status_badge(ui, if solved { "SOLVED" } else { "PENDING" }, solved);
            });
        }
        None => {
            ui.label(
                RichText::new("No active target. Changing width clears the target.")
                    .size(10.0)
                    .color(MUTED_TEXT),
            );
        }
    }
}
