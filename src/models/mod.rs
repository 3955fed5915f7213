pub mod video;
pub mod youtube;
