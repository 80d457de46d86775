pub mod report;
pub mod standings_computation;
