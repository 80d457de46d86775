pub mod common;
pub mod game;
pub mod pick;
pub mod standings;
pub mod week;
