mod game;
mod pick;
mod standing;
mod team;
mod user;
mod week;

pub use game::{FinalizedGame, Game, GameOutcome, GameStatus};
pub use pick::{Pick, PickWinner};
pub use standing::{Standing, UserScoreTotal};
pub use team::Team;
pub use user::UserDisplayName;
pub use week::Week;
