pub mod constants;
pub mod inspector;
pub mod stage;
pub mod theme;
pub mod transport;

/// Texture access for the stage panel. The app owns the texture handles;
/// panels only look them up.
pub trait TextureLookup {
    fn stage_frame(&self) -> Option<&egui::TextureHandle>;
}
