use egui::vec2;

pub const STAGE_WIDTH: u32 = 800;
pub const STAGE_HEIGHT: u32 = 450;
pub const STAGE_SIZE: egui::Vec2 = vec2(STAGE_WIDTH as f32, STAGE_HEIGHT as f32);

pub const CAPTION_FONT_SIZE: f32 = 24.0;
pub const CAPTION_HIT_PADDING: f32 = 4.0;

pub const TRANSPORT_BTN_SIZE: egui::Vec2 = vec2(32.0, 26.0);
