use crate::DEFAULT_SEARCH_LIMIT;

/// One remote operation with its validated arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// APIs scoped to the agent key.
    ListApis,
    /// Agent-scoped semantic search.
    Search { query: String, limit: u32 },
    /// Public catalog search; needs no key.
    PublicSearch { query: String, limit: u32 },
    /// Fetch details for `op_`/`wf_` identifiers.
    Load { ids: Vec<String> },
    /// Run one operation or workflow. `inputs` is the raw `--inputs` text.
    Execute { id: String, inputs: Option<String> },
}

/// Fieldless twin of [`Command`], used to pick a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    ListApis,
    Search,
    PublicSearch,
    Load,
    Execute,
}

impl Command {
    pub fn search(query: impl Into<String>) -> Self {
        Command::Search {
            query: query.into(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::ListApis => CommandKind::ListApis,
            Command::Search { .. } => CommandKind::Search,
            Command::PublicSearch { .. } => CommandKind::PublicSearch,
            Command::Load { .. } => CommandKind::Load,
            Command::Execute { .. } => CommandKind::Execute,
        }
    }

    pub fn requires_auth(&self) -> bool {
        match self {
            Command::PublicSearch { .. } => false,
            Command::ListApis
            | Command::Search { .. }
            | Command::Load { .. }
            | Command::Execute { .. } => true,
        }
    }
}
