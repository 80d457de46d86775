pub mod game;
pub mod pick;
pub mod standings;
pub mod user;
pub mod week;
