pub mod sort_utils;
pub mod standings;
pub mod summary;

pub use sort_utils::*;
pub use standings::*;
pub use summary::*;
