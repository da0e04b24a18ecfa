//! egui panels for each tool and the `eframe::App` frame loop.

mod decoder;
mod frame;
mod help;
mod number;
mod pixel;
mod text;
mod widgets;

pub use decoder::draw_decoder;
pub use help::draw_help;
pub use number::draw_number_lab;
pub use pixel::draw_pixel_inspector;
pub use text::draw_text_lab;
pub use widgets::{section, tool_btn};
