//! Help window contents.

use eframe::egui::{self, RichText};

use crate::util::color::{DATA_WHITE, TACTICAL_CYAN};

pub fn draw_help(ui: &mut egui::Ui) {
    entry(
        ui,
        "NUMBER",
        "Type a value in any base, or click bits to flip them. Width changes wrap the value.",
    );
    entry(
        ui,
        "TEXT",
        "See each character's code point and the UTF-8 bytes that encode it.",
    );
    entry(
        ui,
        "DECODER",
        "Paste hex bytes to decode them as UTF-8. Malformed input is reported, never patched.",
    );
    entry(
        ui,
        "PIXEL",
        "Open or drop an image, hover to read a pixel, click to pin it.",
    );
}

fn entry(ui: &mut egui::Ui, code: &str, desc: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(
            RichText::new(format!("[{code}]"))
                .monospace()
                .strong()
                .color(TACTICAL_CYAN),
        );
        ui.label(RichText::new(desc).size(11.0).color(DATA_WHITE));
    });
    ui.add_space(4.0);
}
