//! Text lab panel: code points and UTF-8 byte layout of typed text.

use eframe::egui::{self, RichText};

use super::widgets::{byte_cells, copy_button, info_row, section, tool_btn};
use crate::app::LabApp;
use crate::text::byte_role;
use crate::util::color::{byte_role_color, char_group_color, DATA_WHITE, MUTED_TEXT, TACTICAL_CYAN};
use crate::util::format::{hex_bytes, hex_dump};

pub fn draw_text_lab(app: &mut LabApp, ui: &mut egui::Ui) {
    section(ui, "INPUT", "", |ui| {
        let mut buffer = app.text.input().to_string();
        let response = ui.add(
            egui::TextEdit::multiline(&mut buffer)
                .desired_rows(2)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            app.text.set_input(&buffer);
        }
        ui.horizontal(|ui| {
            let bytes = hex_bytes(app.text.utf8_bytes());
            copy_button(app, ui, "UTF-8", &bytes);
            if tool_btn(ui, "SEND TO DECODER", !app.text.input().is_empty()) {
                app.send_text_to_decoder();
            }
        });
    });

    section(ui, "SUMMARY", "", |ui| {
        let points = app.text.code_points();
        info_row(ui, "CODE POINTS", &points.len().to_string());
        info_row(ui, "UTF-8 BYTES", &app.text.utf8_bytes().len().to_string());
        info_row(
            ui,
            "VALUES",
            &points
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        );
    });

    let chars = format!("{} chars", app.text.breakdown().len());
    section(ui, "CHARACTERS", &chars, |ui| draw_breakdown(app, ui));

    let bytes = format!("{} bytes", app.text.utf8_bytes().len());
    section(ui, "BYTE STREAM", &bytes, |ui| {
        // Map each byte back to the character it belongs to
        let owners: Vec<usize> = app
            .text
            .breakdown()
            .iter()
            .enumerate()
            .flat_map(|(i, c)| std::iter::repeat(i).take(c.bytes.len()))
            .collect();
        byte_cells(ui, app.text.utf8_bytes(), |i| {
            owners.get(i).map_or(MUTED_TEXT, |&c| char_group_color(c))
        });
        ui.add_space(6.0);
        ui.label(
            RichText::new(hex_dump(app.text.utf8_bytes()))
                .monospace()
                .size(11.0)
                .color(MUTED_TEXT),
        );
    });
}

fn draw_breakdown(app: &LabApp, ui: &mut egui::Ui) {
    let rows = app.text.breakdown();
    if rows.is_empty() {
        ui.label(RichText::new("Type something above.").size(10.0).color(MUTED_TEXT));
        return;
    }

    egui::ScrollArea::vertical()
        .max_height(280.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("char_breakdown")
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for header in ["CHAR", "CODE POINT", "DEC", "CLASS", "UTF-8 BITS"] {
                        ui.label(RichText::new(header).monospace().size(10.0).color(MUTED_TEXT));
                    }
                    ui.end_row();

                    for (i, row) in rows.iter().enumerate() {
                        let shown = if row.ch.is_whitespace() || row.ch.is_control() {
                            format!("{:?}", row.ch)
                        } else {
                            row.ch.to_string()
                        };
                        ui.label(RichText::new(shown).size(16.0).color(char_group_color(i)));
                        ui.label(RichText::new(&row.label).monospace().color(TACTICAL_CYAN));
                        ui.label(RichText::new(row.code_point.to_string()).monospace().color(DATA_WHITE));
                        ui.label(RichText::new(row.class.name()).size(11.0).color(MUTED_TEXT));
                        ui.horizontal(|ui| {
                            for &byte in &row.bytes {
                                draw_byte_bits(ui, byte);
                            }
                        });
                        ui.end_row();
                    }
                });
        });
}

/// One byte as binary, marker bits in the role color and payload bits in white.
fn draw_byte_bits(ui: &mut egui::Ui, byte: u8) {
    let role = byte_role(byte);
    let bits = format!("{byte:08b}");
    let split = (role.marker_bits() as usize).min(8);
    let (marker, payload) = bits.split_at(split);

    let mut job = egui::text::LayoutJob::default();
    let font = egui::FontId::monospace(12.0);
    job.append(
        marker,
        0.0,
        egui::TextFormat::simple(font.clone(), byte_role_color(role)),
    );
    job.append(payload, 0.0, egui::TextFormat::simple(font, DATA_WHITE));
    ui.label(job).on_hover_text(role.name());
}
