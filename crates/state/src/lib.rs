pub mod caption;
pub mod playback;
pub mod selection;
pub mod session;
pub mod video;
