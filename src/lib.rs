pub mod args;
pub mod controller;
pub mod error;
pub mod export;
pub mod model;
pub mod mvu;
pub mod score;
pub mod view;

pub const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use error::ScorecardError;
pub use model::{Hole, HoleEdit, HoleField, Round};
pub use mvu::ScorecardStore;
