pub mod games;
pub mod picks;
pub mod standings;
pub mod weeks;
