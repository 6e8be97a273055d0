use clap::Parser;

use crate::cli::{Cli, Command, Mode};

#[test]
fn cli_structure_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn build_defaults() {
    let cli = Cli::try_parse_from(["takin", "build"]).unwrap();
    assert!(!cli.verbose);
    assert!(!cli.quiet);
    let Command::Build(args) = cli.command else {
        panic!("expected the build command");
    };
    assert_eq!(args.root, std::path::PathBuf::from("."));
}

#[test]
fn compiler_args_accept_hyphen_values() {
    let cli = Cli::try_parse_from([
        "takin",
        "build",
        "--compiler",
        "sh",
        "--compiler-arg=-c",
        "--compiler-arg",
        "cat stats.json",
    ])
    .unwrap();
    let Command::Build(args) = cli.command else {
        panic!("expected the build command");
    };
    assert_eq!(args.compiler, "sh");
    assert_eq!(args.compiler_args, ["-c", "cat stats.json"]);
}

#[test]
fn inspect_parses_mode() {
    let cli = Cli::try_parse_from(["takin", "inspect", "--mode", "development"]).unwrap();
    let Command::Inspect(args) = cli.command else {
        panic!("expected the inspect command");
    };
    assert_eq!(args.mode, Mode::Development);
}

#[test]
fn verbose_conflicts_with_quiet() {
    assert!(Cli::try_parse_from(["takin", "--verbose", "--quiet", "build"]).is_err());
}

#[test]
fn global_flags_work_after_the_subcommand() {
    let cli = Cli::try_parse_from(["takin", "dev", "--verbose"]).unwrap();
    assert!(cli.verbose);
    assert!(matches!(cli.command, Command::Dev(_)));
}
