//! Model classification and name normalization
//!
//! Callers name models in three shapes: a provider-qualified path
//! (`together/deepseek-ai/DeepSeek-V3`), a short alias (`deepseek-v3`), or an
//! ad hoc string mentioning the provider. Each provider owns a static rule
//! list that accepts all three, plus an alias table mapping friendly names
//! onto the upstream's canonical path.

/// Single classification predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Identifier starts with `<provider>:` or `<provider>/`
    Scheme,
    /// Identifier equals the value
    Exact(&'static str),
    /// Identifier starts with the value
    Prefix(&'static str),
    /// Identifier contains the value, ignoring ASCII case
    ContainsIgnoreCase(&'static str),
}

impl MatchRule {
    fn matches(self, provider: &str, model: &str) -> bool {
        match self {
            Self::Scheme => strip_scheme(provider, model).is_some(),
            Self::Exact(value) => model == value,
            Self::Prefix(prefix) => model.starts_with(prefix),
            Self::ContainsIgnoreCase(needle) => model.to_ascii_lowercase().contains(needle),
        }
    }
}

/// Static routing table for one upstream provider
#[derive(Debug)]
pub struct ProviderRules {
    /// Scheme name, used as `<scheme>:` / `<scheme>/`
    pub scheme: &'static str,
    /// Ordered predicates, most precise first
    pub rules: &'static [MatchRule],
    /// Friendly name to canonical upstream path
    pub aliases: &'static [(&'static str, &'static str)],
}

impl ProviderRules {
    /// Whether any rule accepts the identifier
    ///
    /// Rules are evaluated in declaration order and stop at the first match.
    // The trailing `ContainsIgnoreCase` rule also accepts unrelated models
    // whose name merely mentions the provider.
    pub fn matches(&self, model: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(self.scheme, model))
    }

    /// First rule accepting the identifier
    pub fn matching_rule(&self, model: &str) -> Option<MatchRule> {
        self.rules.iter().copied().find(|rule| rule.matches(self.scheme, model))
    }

    /// Translate an identifier into the provider's canonical model name
    ///
    /// Strips one leading scheme, then substitutes a known alias. Unknown
    /// names pass through so new upstream models work before the table is
    /// updated.
    pub fn normalize(&self, model: &str) -> String {
        let bare = strip_scheme(self.scheme, model).unwrap_or(model);

        self.aliases
            .iter()
            .find(|(alias, _)| *alias == bare)
            .map_or(bare, |&(_, canonical)| canonical)
            .to_owned()
    }
}

fn strip_scheme<'a>(scheme: &str, model: &'a str) -> Option<&'a str> {
    model
        .strip_prefix(scheme)
        .and_then(|rest| rest.strip_prefix(':').or_else(|| rest.strip_prefix('/')))
}

/// Routing table for Together AI
pub static TOGETHER_RULES: ProviderRules = ProviderRules {
    scheme: "together",
    rules: &[
        MatchRule::Scheme,
        // DeepSeek
        MatchRule::Exact("deepseek-v3"),
        MatchRule::Exact("deepseek-ai/DeepSeek-V3"),
        MatchRule::Prefix("deepseek-"),
        MatchRule::Prefix("deepseek-ai/"),
        // Qwen
        MatchRule::Exact("qwen2.5"),
        MatchRule::Exact("qwen2.5-coder"),
        MatchRule::Exact("qwen2.5-coder-32b-instruct"),
        MatchRule::Prefix("qwen2.5"),
        MatchRule::Prefix("Qwen/"),
        MatchRule::ContainsIgnoreCase("together"),
    ],
    aliases: &[
        ("deepseek-v3", "deepseek-ai/DeepSeek-V3"),
        ("qwen2.5-coder", "Qwen/Qwen2.5-Coder-32B-Instruct"),
        ("qwen2.5-coder-32b-instruct", "Qwen/Qwen2.5-Coder-32B-Instruct"),
        ("qwen2.5", "Qwen/QwQ-32B-Preview"),
    ],
};

/// Upstream providers the router knows how to classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// Together AI chat completions
    Together,
}

impl ProviderKind {
    /// All providers, in classification priority order
    pub const ALL: &'static [Self] = &[Self::Together];

    /// Static routing table for this provider
    pub const fn rules(self) -> &'static ProviderRules {
        match self {
            Self::Together => &TOGETHER_RULES,
        }
    }

    /// Human-readable provider name
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Together => "Together AI",
        }
    }

    /// Find the provider that should serve a model identifier
    pub fn classify(model: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.rules().matches(model))
    }

    /// Canonical model name for this provider
    pub fn normalize(self, model: &str) -> String {
        self.rules().normalize(model)
    }
}

/// Whether a model identifier should be routed to Together AI
pub fn is_together_model(model: &str) -> bool {
    TOGETHER_RULES.matches(model)
}

/// Strip a `together:` / `together/` scheme and resolve Together aliases
pub fn normalize_together_model_name(model: &str) -> String {
    TOGETHER_RULES.normalize(model)
}
