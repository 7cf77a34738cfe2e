use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to serve the scorecard on.
    #[arg(long, value_name = "HOST", default_value = "127.0.0.1")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "5201")]
    pub port: u16,
    /// Number of holes on the card.
    #[arg(
        long,
        value_name = "HOLES",
        default_value = "18",
        value_parser = crate::args::validation::check_hole_count
    )]
    pub holes: u32,
    /// Par every hole starts with.
    #[arg(
        long,
        value_name = "PAR",
        default_value = "4",
        value_parser = crate::args::validation::check_default_par
    )]
    pub default_par: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanArgs {
    pub host: String,
    pub port: u16,
    pub holes: u32,
    pub default_par: u32,
}
