use std::fmt;

/// Logical resource a request target refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Models,
    Chats,
    Config,
    Generate,
    Unknown,
}

/// Substring rules checked in order. The first hit wins.
const RULES: [(&str, ResourceKind); 4] = [
    ("models", ResourceKind::Models),
    ("chats", ResourceKind::Chats),
    ("config", ResourceKind::Config),
    ("generate", ResourceKind::Generate),
];

impl ResourceKind {
    /// Classifies a request target (path, URL or any string).
    ///
    /// Matching is a plain substring test in the priority order
    /// models > chats > config > generate, so `/api/models/config` is a
    /// models request.
    pub fn classify(target: &str) -> Self {
        RULES
            .iter()
            .find(|(needle, _)| target.contains(needle))
            .map(|(_, kind)| *kind)
            .unwrap_or(ResourceKind::Unknown)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Models => "models",
            ResourceKind::Chats => "chats",
            ResourceKind::Config => "config",
            ResourceKind::Generate => "generate",
            ResourceKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
