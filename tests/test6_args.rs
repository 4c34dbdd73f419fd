use clap::Parser;
use golf_scorecard::args::validation::{MAX_IDLE_MINUTES, check_course_name, check_idle_minutes};
use golf_scorecard::args::{Args, CleanArgs};
use std::path::PathBuf;

#[test]
fn test_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from(["golf-scorecard"])?;
    assert_eq!(args.host, "0.0.0.0");
    assert_eq!(args.port, 8081);
    assert_eq!(args.static_dir, PathBuf::from("./static"));
    assert_eq!(args.session_idle_minutes, 120);
    assert_eq!(args.default_course, "My Golf Course");

    let clean = CleanArgs::from(args);
    assert_eq!(clean.session_idle.num_minutes(), 120);
    Ok(())
}

#[test]
fn test_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from([
        "golf-scorecard",
        "--host",
        "127.0.0.1",
        "-p",
        "9000",
        "--session-idle-minutes",
        "15",
        "--default-course",
        "  St Andrews ",
    ])?;
    assert_eq!(args.host, "127.0.0.1");
    assert_eq!(args.port, 9000);
    assert_eq!(args.session_idle_minutes, 15);
    assert_eq!(args.default_course, "St Andrews");
    Ok(())
}

#[test]
fn test_invalid_values_rejected() {
    assert!(Args::try_parse_from(["golf-scorecard", "--session-idle-minutes", "0"]).is_err());
    assert!(Args::try_parse_from(["golf-scorecard", "--default-course", "   "]).is_err());
    assert!(Args::try_parse_from(["golf-scorecard", "--port", "not-a-port"]).is_err());
}

#[test]
fn test_validators() {
    assert_eq!(check_idle_minutes(" 30 "), Ok(30));
    assert!(check_idle_minutes("-1").is_err());
    assert!(check_idle_minutes(&(MAX_IDLE_MINUTES + 1).to_string()).is_err());
    assert!(check_idle_minutes("ten").is_err());
    assert_eq!(check_course_name(" Pebble "), Ok("Pebble".to_string()));
    assert!(check_course_name("").is_err());
}
