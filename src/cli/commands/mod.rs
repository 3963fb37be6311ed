pub mod play;
pub mod solve;
