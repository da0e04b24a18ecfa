//! Shared panel building blocks.

use eframe::egui::{self, Color32, RichText, Sense};

use crate::app::LabApp;
use crate::clipboard::EguiClipboard;
use crate::util::color::{
    DATA_WHITE, INTERFACE_GRAY, MUTED_TEXT, OPERATIONAL_GREEN, PANEL_DARK, TACTICAL_CYAN,
    VOID_BLACK,
};

/// Titled panel: an accent-tabbed header with a muted detail on the right
/// (width, counts, status), over a bordered body.
pub fn section(
    ui: &mut egui::Ui,
    title: &str,
    detail: &str,
    content: impl FnOnce(&mut egui::Ui),
) {
    ui.horizontal(|ui| {
        let (tab, _) = ui.allocate_exact_size(egui::vec2(4.0, 14.0), Sense::hover());
        ui.painter().rect_filled(tab, 0.0, TACTICAL_CYAN);
        ui.label(
            RichText::new(title)
                .monospace()
                .size(11.0)
                .strong()
                .color(TACTICAL_CYAN),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(detail).monospace().size(10.0).color(MUTED_TEXT));
        });
    });
    egui::Frame::none()
        .fill(PANEL_DARK)
        .stroke(egui::Stroke::new(1.0, INTERFACE_GRAY))
        .inner_margin(egui::Margin::symmetric(10.0, 8.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            content(ui);
        });
    ui.add_space(10.0);
}

/// Label on the left, monospace value on the right.
pub fn info_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.add_sized(
            [140.0, ui.spacing().interact_size.y],
            egui::Label::new(
                RichText::new(label)
                    .monospace()
                    .size(10.0)
                    .color(MUTED_TEXT),
            ),
        );
        ui.label(
            RichText::new(value)
                .monospace()
                .size(12.0)
                .color(DATA_WHITE),
        );
    });
}

/// Flat, square toolbar button. Returns whether it was clicked.
pub fn tool_btn(ui: &mut egui::Ui, text: &str, enabled: bool) -> bool {
    let response = ui.add_enabled(
        enabled,
        egui::Button::new(RichText::new(text.to_uppercase()).size(10.0).color(
            if enabled {
                DATA_WHITE
            } else {
                MUTED_TEXT.gamma_multiply(0.5)
            },
        ))
        .fill(INTERFACE_GRAY)
        .rounding(0.0)
        .min_size(egui::vec2(0.0, 22.0)),
    );
    response.clicked()
}

/// Copy button that records the outcome on the app.
pub fn copy_button(app: &mut LabApp, ui: &mut egui::Ui, label: &str, content: &str) {
    let copied = app
        .last_copy
        .as_ref()
        .is_some_and(|s| s.ok && s.label == label);
    let text = if copied { "COPIED" } else { "COPY" };
    if tool_btn(ui, text, !content.is_empty()) {
        let ctx = ui.ctx().clone();
        app.copy(&mut EguiClipboard::new(&ctx), label, content);
    }
}

/// Row of boxed byte cells, each showing `XX` with an optional caption below.
pub fn byte_cells(ui: &mut egui::Ui, bytes: &[u8], color: impl Fn(usize) -> Color32) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        for (i, &byte) in bytes.iter().enumerate() {
            let (rect, response) = ui.allocate_exact_size(egui::vec2(34.0, 26.0), Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, VOID_BLACK);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, color(i)));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("{byte:02X}"),
                egui::FontId::monospace(13.0),
                color(i),
            );
            response.on_hover_text(format!("byte {i}: {byte} / {byte:08b}"));
        }
    });
}

/// Status badge: green when `ok`, muted otherwise.
pub fn status_badge(ui: &mut egui::Ui, text: &str, ok: bool) {
    ui.label(
        RichText::new(format!("[{text}]"))
            .monospace()
            .size(10.0)
            .strong()
            .color(if ok { OPERATIONAL_GREEN } else { MUTED_TEXT }),
    );
}
