pub mod args;
pub mod error;
pub mod model;
pub mod storage;
pub mod controller {
    pub mod handicap;
    pub mod leaderboard;
    pub mod score;
    pub mod skins;
}
pub mod mvu {
    pub mod runtime;
    pub mod score;
}
pub mod view {
    pub mod scorecard;
    pub mod summary;
}

pub use error::ScoringError;
pub use model::{Directory, GameFormat, Round};
