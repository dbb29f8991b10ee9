use std::path::PathBuf;

use clap::Parser;
use snapchef_core::{
    domain::{
        common::{CorpusConfig, LLMConfig, MatchingConfig, SnapChefConfig},
        recipe::value_objects::DEFAULT_MATCH_THRESHOLD,
    },
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "snapchef", version, about = "Snap Chef API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub corpus: CorpusArgs,

    #[command(flatten)]
    pub matching: MatchingArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/snapchef`
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8081"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        action = clap::ArgAction::Set,
        default_value_t = true
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct CorpusArgs {
    #[arg(long, env = "RECIPES_PATH", default_value = "data/recipes.json")]
    pub recipes_path: PathBuf,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MatchingArgs {
    /// Minimum share of a recipe's ingredients that must be in the fridge
    #[arg(long, env = "MATCH_THRESHOLD", default_value_t = DEFAULT_MATCH_THRESHOLD)]
    pub match_threshold: f64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long, env = "LOG_FILTER", default_value = "info")]
    pub log_filter: String,

    #[arg(
        long,
        env = "LOG_JSON",
        action = clap::ArgAction::Set,
        default_value_t = false
    )]
    pub log_json: bool,
}

impl From<Args> for SnapChefConfig {
    fn from(args: Args) -> Self {
        SnapChefConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            corpus: CorpusConfig {
                recipes_path: args.corpus.recipes_path,
            },
            matching: MatchingConfig {
                default_threshold: args.matching.match_threshold,
            },
        }
    }
}
