pub mod export_bar;
pub mod hole_row;
pub mod template;
pub mod totals;

pub use export_bar::*;
pub use hole_row::*;
pub use template::*;
pub use totals::*;
