use clap::Parser;
use golf_scorecard::args::validation::{check_default_par, check_hole_count};
use golf_scorecard::args::{Args, CleanArgs};

#[test]
fn test_defaults() {
    let args = CleanArgs::new(Args::parse_from(["golf-scorecard"]));
    assert_eq!(args, CleanArgs::default());
    assert_eq!(args.bind_addr(), ("127.0.0.1".to_string(), 5201));
}

#[test]
fn test_flags() {
    let args = CleanArgs::new(Args::parse_from([
        "golf-scorecard",
        "--host",
        "0.0.0.0",
        "-p",
        "8080",
        "--holes",
        "9",
        "--default-par",
        "3",
    ]));
    assert_eq!(args.host, "0.0.0.0");
    assert_eq!(args.port, 8080);
    assert_eq!(args.holes, 9);
    assert_eq!(args.default_par, 3);
}

#[test]
fn test_validation() {
    assert_eq!(check_hole_count("18"), Ok(18));
    assert!(check_hole_count("0").is_err());
    assert!(check_hole_count("-1").is_err());
    assert_eq!(check_default_par("0"), Ok(0));
    assert_eq!(check_default_par("7"), Ok(7));
    assert!(check_default_par("four").is_err());
    assert!(Args::try_parse_from(["golf-scorecard", "--holes", "0"]).is_err());
}
