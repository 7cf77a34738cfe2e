pub mod routes;
pub mod scorecard;

pub use routes::configure;
