pub mod relative;
pub mod score_display;
pub mod summary;
pub mod totals;

pub use relative::*;
pub use score_display::*;
pub use summary::*;
pub use totals::*;
