pub mod entry;
pub mod format_aggregators;
pub mod match_play;
pub mod round_setup;

pub use entry::*;
pub use format_aggregators::*;
pub use match_play::*;
pub use round_setup::*;
