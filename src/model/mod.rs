pub mod directory;
pub mod round;
pub mod score;
pub mod types;

pub use directory::*;
pub use round::*;
pub use score::*;
pub use types::*;
