pub mod play;
pub mod show;
pub mod stops;
