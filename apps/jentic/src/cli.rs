//! Command-line surface.
//!
//! clap enforces the per-command argument shape (non-empty query, positive
//! limit, at least one `load` id); everything past parsing works on
//! [`catalog_core::Command`].

use catalog_core::{Command, DEFAULT_SEARCH_LIMIT, JENTIC_BASE_URL};

use clap::builder::NonEmptyStringValueParser;
use clap::{ArgAction, Args, Parser, Subcommand, value_parser};

#[derive(Parser, Debug)]
#[command(
    name = "jentic",
    version,
    about = "Jentic API client. Search → Load → Execute API operations and workflows."
)]
pub struct Cli {
    /// Raw JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Catalog API base URL
    #[arg(
        long,
        env = "JENTIC_BASE_URL",
        default_value = JENTIC_BASE_URL,
        global = true,
        hide_env_values = true
    )]
    pub base_url: String,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// List scoped APIs for this agent
    Apis,

    /// Semantic search (agent-scoped)
    Search(SearchArgs),

    /// Search public catalog (no auth)
    PubSearch(SearchArgs),

    /// Load operation/workflow details by UUID
    Load {
        /// op_... or wf_... UUIDs
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Execute an operation or workflow
    Execute {
        /// op_... or wf_... UUID
        id: String,

        /// JSON inputs e.g. '{"key":"value"}'
        #[arg(long)]
        inputs: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Natural language query
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub query: String,

    #[arg(long, default_value_t = DEFAULT_SEARCH_LIMIT, value_parser = value_parser!(u32).range(1..))]
    pub limit: u32,
}

impl From<CliCommand> for Command {
    fn from(command: CliCommand) -> Self {
        match command {
            CliCommand::Apis => Command::ListApis,
            CliCommand::Search(SearchArgs { query, limit }) => Command::Search { query, limit },
            CliCommand::PubSearch(SearchArgs { query, limit }) => {
                Command::PublicSearch { query, limit }
            }
            CliCommand::Load { ids } => Command::Load { ids },
            CliCommand::Execute { id, inputs } => Command::Execute { id, inputs },
        }
    }
}
