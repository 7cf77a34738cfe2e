pub mod hole;
pub mod input;
pub mod round;

pub use hole::*;
pub use input::*;
pub use round::*;
