// Unit tests for the clap command surface
// Uses try_parse_from so usage errors come back as values instead of exiting.

use crate::cli::{Cli, CliCommand};

use catalog_core::{Command, JENTIC_BASE_URL};

use clap::Parser;
use clap::error::ErrorKind;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("jentic").chain(args.iter().copied()))
}

fn command(args: &[&str]) -> Command {
    Command::from(parse(args).unwrap().command)
}

/// **VALUE**: Verifies each subcommand maps onto the matching `Command` variant.
///
/// **WHY THIS MATTERS**: The dispatcher only sees `Command`. A wrong mapping (e.g.
/// `pub-search` turning into the authenticated search) changes which endpoint is
/// called and whether a key is required.
#[test]
fn given_each_subcommand_when_parsed_then_maps_to_command_variant() {
    assert_eq!(command(&["apis"]), Command::ListApis);
    assert_eq!(
        command(&["search", "get top news stories"]),
        Command::Search {
            query: String::from("get top news stories"),
            limit: 5,
        }
    );
    assert_eq!(
        command(&["pub-search", "home automation", "--limit", "3"]),
        Command::PublicSearch {
            query: String::from("home automation"),
            limit: 3,
        }
    );
    assert_eq!(
        command(&["load", "op_ad385f1f20e34e5b", "wf_1"]),
        Command::Load {
            ids: vec![String::from("op_ad385f1f20e34e5b"), String::from("wf_1")],
        }
    );
    assert_eq!(
        command(&["execute", "op_7ae5ecc5d29bed24", "--inputs", r#"{"category":"general"}"#]),
        Command::Execute {
            id: String::from("op_7ae5ecc5d29bed24"),
            inputs: Some(String::from(r#"{"category":"general"}"#)),
        }
    );
}

#[test]
fn given_json_flag_before_or_after_subcommand_when_parsed_then_machine_mode() {
    assert!(parse(&["--json", "apis"]).unwrap().json);
    assert!(parse(&["search", "q", "--json"]).unwrap().json);
    assert!(!parse(&["apis"]).unwrap().json);
}

/// **VALUE**: Verifies argument-shape violations are rejected at parse time.
///
/// **BUG THIS CATCHES**: Would catch `--limit 0`, an empty query, or a bare
/// `load` reaching the network layer.
#[test]
fn given_invalid_argument_shapes_when_parsed_then_rejected() {
    let cases: [&[&str]; 6] = [
        &["search", ""],
        &["search", "q", "--limit", "0"],
        &["pub-search", "q", "--limit", "-1"],
        &["load"],
        &["execute"],
        &["unknown"],
    ];

    for args in cases {
        assert!(parse(args).is_err(), "{args:?} should not parse");
    }
}

#[test]
fn given_missing_subcommand_when_parsed_then_usage_error() {
    let err = parse(&[]).unwrap_err();

    assert_ne!(err.kind(), ErrorKind::DisplayVersion);
    assert_ne!(err.exit_code(), 0, "Missing subcommand must not exit cleanly");
}

#[test]
fn given_no_base_url_flag_when_parsed_then_uses_default_or_env() {
    let cli = parse(&["--base-url", "http://localhost:9999/api/v1/", "apis"]).unwrap();
    assert_eq!(cli.base_url, "http://localhost:9999/api/v1/");

    if std::env::var_os("JENTIC_BASE_URL").is_none() {
        assert_eq!(parse(&["apis"]).unwrap().base_url, JENTIC_BASE_URL);
    }
}

#[test]
fn given_verbose_flags_when_parsed_then_counted() {
    assert_eq!(parse(&["-vv", "apis"]).unwrap().verbose, 2);
    assert!(matches!(parse(&["apis"]).unwrap().command, CliCommand::Apis));
}
