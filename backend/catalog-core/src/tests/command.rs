// Unit tests for the closed command variant

use crate::DEFAULT_SEARCH_LIMIT;
use crate::command::{Command, CommandKind};

/// **VALUE**: Verifies that only the public search runs without a credential.
///
/// **WHY THIS MATTERS**: The dispatcher consults `requires_auth()` before touching
/// the resolver. A wrong answer either leaks the key to the public endpoint or
/// makes `pub-search` fail for users with no key configured.
///
/// **BUG THIS CATCHES**: Would catch a new variant defaulting to "no auth".
#[test]
fn given_each_command_when_requires_auth_checked_then_only_public_search_is_anonymous() {
    let commands = [
        (Command::ListApis, true),
        (Command::search("news"), true),
        (
            Command::PublicSearch {
                query: String::from("news"),
                limit: 5,
            },
            false,
        ),
        (
            Command::Load {
                ids: vec![String::from("op_1")],
            },
            true,
        ),
        (
            Command::Execute {
                id: String::from("wf_1"),
                inputs: None,
            },
            true,
        ),
    ];

    for (command, expected) in commands {
        assert_eq!(
            command.requires_auth(),
            expected,
            "requires_auth mismatch for {command:?}"
        );
    }
}

#[test]
fn given_search_shorthand_when_built_then_uses_default_limit() {
    let command = Command::search("weather");

    assert_eq!(command.kind(), CommandKind::Search);
    assert_eq!(
        command,
        Command::Search {
            query: String::from("weather"),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    );
}
