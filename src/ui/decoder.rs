//! Decoder panel: pasted hex bytes to UTF-8 text.

use eframe::egui::{self, RichText};

use super::widgets::{byte_cells, copy_button, info_row, section};
use crate::app::{DecodeOutcome, LabApp, INVALID_INPUT_MESSAGE};
use crate::error::HexDecodeError;
use crate::text::{byte_role, code_point_label, parse_hex_bytes};
use crate::util::color::{byte_role_color, ALERT_RED, DATA_WHITE, MUTED_TEXT, VOID_BLACK};

pub fn draw_decoder(app: &mut LabApp, ui: &mut egui::Ui) {
    section(ui, "HEX BYTES", "", |ui| {
        ui.label(
            RichText::new("Space-separated bytes, e.g. 48 65 6C 6C 6F or 0xC3 0xA9")
                .size(10.0)
                .color(MUTED_TEXT),
        );
        let mut buffer = app.decoder.input().to_string();
        let response = ui.add(
            egui::TextEdit::multiline(&mut buffer)
                .font(egui::TextStyle::Monospace)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            app.decoder.set_input(&buffer);
        }

        // Show whatever parsed, even if the UTF-8 is broken
        if let Ok(bytes) = parse_hex_bytes(app.decoder.input()) {
            if !bytes.is_empty() {
                ui.add_space(4.0);
                byte_cells(ui, &bytes, |i| byte_role_color(byte_role(bytes[i])));
            }
        }
    });

    let detail = match app.decoder.outcome() {
        DecodeOutcome::Empty => "",
        DecodeOutcome::Text(_) => "utf-8 ok",
        DecodeOutcome::Invalid(_) => "error",
    };
    section(ui, "DECODED", detail, |ui| match app.decoder.outcome().clone() {
        DecodeOutcome::Empty => {
            ui.label(RichText::new("No input.").size(10.0).color(MUTED_TEXT));
        }
        DecodeOutcome::Text(text) => {
            egui::Frame::none()
                .fill(VOID_BLACK)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(&text).size(18.0).color(DATA_WHITE));
                });
            ui.add_space(4.0);
            info_row(ui, "CHARACTERS", &text.chars().count().to_string());
            info_row(
                ui,
                "CODE POINTS",
                &text
                    .chars()
                    .map(|c| code_point_label(u32::from(c)))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
            copy_button(app, ui, "TEXT", &text);
        }
        DecodeOutcome::Invalid(err) => {
            ui.label(
                RichText::new(INVALID_INPUT_MESSAGE)
                    .strong()
                    .color(ALERT_RED),
            );
            let detail = match err {
                HexDecodeError::Hex(e) => e.to_string(),
                HexDecodeError::Utf8(e) => e.to_string(),
            };
            ui.label(RichText::new(detail).size(10.0).color(MUTED_TEXT));
        }
    });
}
