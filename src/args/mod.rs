use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

#[must_use]
pub fn args_checks() -> CleanArgs {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            host: args.host.trim().to_string(),
            port: args.port,
            holes: args.holes,
            default_par: args.default_par,
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

impl Default for CleanArgs {
    fn default() -> Self {
        CleanArgs {
            host: "127.0.0.1".to_string(),
            port: 5201,
            holes: crate::model::DEFAULT_HOLE_COUNT,
            default_par: crate::model::DEFAULT_PAR,
        }
    }
}
