//! Pixel inspector panel.

use eframe::egui::{self, Color32, RichText, Sense};

use super::widgets::{copy_button, info_row, section, tool_btn};
use crate::app::LabApp;
use crate::pixel::PixelSample;
use crate::util::color::{ALERT_RED, INTERFACE_GRAY, MUTED_TEXT, TACTICAL_CYAN};

/// Largest on-screen edge of the displayed image.
const MAX_DISPLAY: f32 = 520.0;

pub fn draw_pixel_inspector(app: &mut LabApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if tool_btn(ui, "OPEN IMAGE", true) {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp", "webp"])
                .pick_file()
            {
                app.open_image(path);
            }
        }
        ui.label(
            RichText::new("or drop an image file onto the window")
                .size(10.0)
                .color(MUTED_TEXT),
        );
    });
    if let Some(error) = &app.pixel.error {
        ui.label(RichText::new(error).size(10.0).color(ALERT_RED));
    }
    ui.add_space(8.0);

    if app.pixel.image.is_none() {
        return;
    }

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| draw_image(app, ui));
        ui.add_space(12.0);
        ui.vertical(|ui| {
            let detail = if app.pixel.pinned.is_some() { "pinned" } else { "hover" };
            section(ui, "PIXEL", detail, |ui| match app.pixel.readout() {
                Some(sample) => draw_readout(app, ui, sample),
                None => {
                    ui.label(
                        RichText::new("Hover the image; click to pin a pixel.")
                            .size(10.0)
                            .color(MUTED_TEXT),
                    );
                }
            });
        });
    });
}

fn draw_image(app: &mut LabApp, ui: &mut egui::Ui) {
    let ctx = ui.ctx().clone();
    let Some(image) = app.pixel.image.as_mut() else {
        return;
    };

    let texture = image.texture.get_or_insert_with(|| {
        let color_image =
            egui::ColorImage::from_rgba_unmultiplied(image.raster.size(), image.raster.rgba());
        ctx.load_texture(&image.title, color_image, egui::TextureOptions::NEAREST)
    });
    let texture_id = texture.id();

    let (w, h) = (image.raster.width() as f32, image.raster.height() as f32);
    let scale = (MAX_DISPLAY / w.max(h)).min(ui.available_width() / w);
    let size = egui::vec2(w * scale, h * scale);

    ui.label(
        RichText::new(format!(
            "[ {} ] // {}x{}",
            image.title,
            image.raster.width(),
            image.raster.height()
        ))
        .monospace()
        .size(10.0)
        .color(TACTICAL_CYAN),
    );

    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    let painter = ui.painter();
    painter.image(
        texture_id,
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        Color32::WHITE,
    );
    painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, INTERFACE_GRAY));

    match response.hover_pos() {
        Some(pos) => {
            let u = (pos.x - rect.min.x) / rect.width();
            let v = (pos.y - rect.min.y) / rect.height();
            app.pixel.hover_uv(u, v);
        }
        None => app.pixel.hovered = None,
    }
    if response.clicked() {
        app.pixel.pin_hovered();
    }

    // Outline the pinned pixel
    if let Some(pinned) = app.pixel.pinned {
        let cell = egui::Rect::from_min_size(
            rect.min + egui::vec2(pinned.x as f32 * scale, pinned.y as f32 * scale),
            egui::vec2(scale.max(2.0), scale.max(2.0)),
        );
        ui.painter()
            .rect_stroke(cell, 0.0, egui::Stroke::new(1.5, TACTICAL_CYAN));
    }
}

fn draw_readout(app: &mut LabApp, ui: &mut egui::Ui, sample: PixelSample) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(64.0, 64.0), Sense::hover());
    ui.painter().rect_filled(
        rect,
        0.0,
        Color32::from_rgba_unmultiplied(sample.r, sample.g, sample.b, sample.a),
    );
    ui.painter()
        .rect_stroke(rect, 0.0, egui::Stroke::new(1.0, INTERFACE_GRAY));
    ui.add_space(6.0);

    let hsv = sample.hsv();
    let hex = sample.hex();
    info_row(ui, "POSITION", &format!("({}, {})", sample.x, sample.y));
    info_row(
        ui,
        "RGBA",
        &format!("{}, {}, {}, {}", sample.r, sample.g, sample.b, sample.a),
    );
    info_row(ui, "HEX", &hex);
    info_row(
        ui,
        "HSV",
        &format!("{:.0}°, {:.0}%, {:.0}%", hsv.h, hsv.s * 100.0, hsv.v * 100.0),
    );
    info_row(
        ui,
        "BINARY R/G/B",
        &format!("{:08b} {:08b} {:08b}", sample.r, sample.g, sample.b),
    );
    if app.pixel.pinned == Some(sample) {
        ui.label(RichText::new("[PINNED]").monospace().size(10.0).color(TACTICAL_CYAN));
    }
    copy_button(app, ui, "COLOR", &hex);
}
