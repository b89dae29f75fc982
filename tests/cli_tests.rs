use clap::Parser;
use duress::cli::commands::CommandContext;
use duress::cli::{Cli, Commands};

#[test]
fn spike_flags_parse_into_args() {
    let cli = Cli::try_parse_from(["duress", "spike", "64", "--hold-seconds", "2", "-n"]).unwrap();
    assert!(cli.dry_run);
    match cli.command {
        Commands::Spike(args) => {
            assert_eq!(args.megabytes, 64);
            assert_eq!(args.hold_seconds, Some(2));
        }
        _ => panic!("expected spike subcommand"),
    }
}

#[test]
fn churn_takes_rounds_and_payload_positionally() {
    let cli = Cli::try_parse_from(["duress", "churn", "100", "1024"]).unwrap();
    match cli.command {
        Commands::Churn(args) => {
            assert_eq!(args.iterations, 100);
            assert_eq!(args.bytes_per_iteration, 1024);
            assert_eq!(args.file, None);
        }
        _ => panic!("expected churn subcommand"),
    }
}

#[test]
fn churn_payload_size_is_required() {
    assert!(Cli::try_parse_from(["duress", "churn", "100"]).is_err());
}

#[test]
fn exit_with_uses_kebab_case_name() {
    let cli = Cli::try_parse_from(["duress", "exit-with", "3"]).unwrap();
    assert!(matches!(cli.command, Commands::ExitWith(_)));
}

#[test]
fn negative_counts_are_rejected_at_parse_time() {
    assert!(Cli::try_parse_from(["duress", "burn", "-1"]).is_err());
    assert!(Cli::try_parse_from(["duress", "spike", "-8"]).is_err());
}

#[test]
fn config_file_feeds_command_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("duress.toml");
    std::fs::write(&path, "hold_seconds = 9\nworkers = 3\n").unwrap();

    let cli = Cli::try_parse_from([
        "duress",
        "spike",
        "8",
        "--config",
        path.to_str().unwrap(),
    ])
    .unwrap();
    let ctx = CommandContext::from_cli(&cli).unwrap();
    assert_eq!(ctx.defaults.hold_seconds, 9);
    assert_eq!(ctx.defaults.workers, Some(3));
}

#[test]
fn missing_config_file_is_an_error() {
    let cli = Cli::try_parse_from(["duress", "wait", "0", "--config", "/nonexistent/duress.toml"])
        .unwrap();
    assert!(CommandContext::from_cli(&cli).is_err());
}
