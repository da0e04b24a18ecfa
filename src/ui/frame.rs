//! Frame loop: toolbar, tool tabs, dropped files and the central panel.

use eframe::egui::{self, RichText, Sense};

use super::{draw_decoder, draw_help, draw_number_lab, draw_pixel_inspector, draw_text_lab};
use super::widgets::tool_btn;
use crate::app::{LabApp, Tool};
use crate::util::color::{
    ALERT_RED, DATA_WHITE, DIM_CYAN, INTERFACE_GRAY, MUTED_TEXT, OPERATIONAL_GREEN, PANEL_DARK,
    TACTICAL_CYAN, VOID_BLACK,
};

impl eframe::App for LabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load initial image from command-line argument (first frame only)
        if let Some(path) = self.initial_image.take() {
            tracing::info!(path = %path.display(), "loading image from command line");
            self.open_image(path);
        }

        self.handle_dropped_files(ctx);

        egui::TopBottomPanel::top("toolbar")
            .frame(egui::Frame::none().fill(PANEL_DARK).inner_margin(6.0))
            .show(ctx, |ui| {
                self.draw_tabs(ui);
                ui.add_space(4.0);
                self.draw_toolbar(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(VOID_BLACK).inner_margin(12.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.active_tool {
                        Tool::Number => draw_number_lab(self, ui),
                        Tool::Text => draw_text_lab(self, ui),
                        Tool::Decoder => draw_decoder(self, ui),
                        Tool::Pixel => draw_pixel_inspector(self, ui),
                    });

                if self.is_drop_target {
                    let rect = ui.max_rect();
                    ui.painter()
                        .rect_stroke(rect, 0.0, egui::Stroke::new(2.0, TACTICAL_CYAN));
                }
            });

        if self.show_help {
            egui::Window::new("Lab Guide")
                .collapsible(false)
                .resizable(false)
                .open(&mut self.show_help)
                .show(ctx, draw_help);
        }
    }
}

impl LabApp {
    /// Accept a dropped image, by path on native and by bytes on web.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| {
            self.is_drop_target = !i.raw.hovered_files.is_empty();
            i.raw.dropped_files.first().cloned()
        });
        let Some(file) = dropped else {
            return;
        };

        if let Some(bytes) = file.bytes.as_deref() {
            let name = if file.name.is_empty() {
                "dropped image"
            } else {
                file.name.as_str()
            };
            self.open_image_bytes(name, bytes);
        } else if let Some(path) = file.path {
            self.open_image(path);
        }
    }

    fn draw_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("REPR//LAB")
                    .monospace()
                    .strong()
                    .color(TACTICAL_CYAN),
            );
            ui.add_space(12.0);

            for &tool in Tool::all() {
                let is_active = tool == self.active_tool;
                let title = tool.name().to_uppercase();
                let text_width = ui.fonts(|f| {
                    f.glyph_width(&egui::FontId::monospace(11.0), 'M') * title.len() as f32
                });
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(text_width + 24.0, 26.0), Sense::click());

                let fill = if is_active {
                    INTERFACE_GRAY
                } else if response.hovered() {
                    INTERFACE_GRAY.gamma_multiply(0.5)
                } else {
                    PANEL_DARK
                };
                ui.painter().rect_filled(rect, 0.0, fill);
                if is_active {
                    ui.painter().line_segment(
                        [rect.left_bottom(), rect.right_bottom()],
                        egui::Stroke::new(2.0, TACTICAL_CYAN),
                    );
                }
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    title,
                    egui::FontId::monospace(11.0),
                    if is_active { DATA_WHITE } else { MUTED_TEXT },
                );

                if response.clicked() {
                    self.active_tool = tool;
                }
                ui.add_space(2.0);
            }
        });
    }

    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if tool_btn(ui, "?", true) {
                self.show_help = !self.show_help;
            }
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("// {}", self.active_tool.name().to_uppercase()))
                    .monospace()
                    .size(10.0)
                    .color(DIM_CYAN),
            );

            if let Some(status) = &self.last_copy {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let (text, color) = if status.ok {
                        (format!("{} COPIED", status.label), OPERATIONAL_GREEN)
                    } else {
                        (format!("{} COPY FAILED", status.label), ALERT_RED)
                    };
                    ui.label(RichText::new(text).monospace().size(10.0).color(color));
                });
            }
        });
    }
}
