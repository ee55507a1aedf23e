//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Plugreg - AstrBot marketplace registry maintenance
///
/// Validate self-reported plugin metadata and merge it into the marketplace
/// registry with live GitHub enrichment.
#[derive(Parser, Debug)]
#[command(
    name = "plugreg",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Registry maintenance tool for the AstrBot plugin marketplace",
    long_about = "Plugreg repairs plugin metadata submissions (alias folding, auto-generated \
                  fields, type coercion), enriches them with live repository data from GitHub \
                  (stars, last push, logo), and merges the result into the plugins.json \
                  registry, newest entries first.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  plugreg validate '{\"name\": \"astrbot_plugin_demo\"}'\n    \
                  plugreg validate --repo author/astrbot_plugin_demo\n    \
                  plugreg update '{\"repo\": \"https://github.com/author/demo\"}'\n    \
                  plugreg update --registry plugins.json\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/astrbot-market/plugreg"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate and repair plugin metadata
    Validate(ValidateArgs),

    /// Enrich metadata and merge it into the registry
    Update(UpdateArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate inline JSON:\n    plugreg validate '{\"description\": \"demo\"}'\n\n\
                  Validate inline YAML:\n    plugreg validate 'tags: a, b, c'\n\n\
                  Validate from the environment (CI):\n    PLUGIN_METADATA='{}' plugreg validate\n\n\
                  Supply repository context:\n    plugreg validate --repo author/astrbot_plugin_demo --git-ref refs/tags/v1.2.0")]
pub struct ValidateArgs {
    /// Raw plugin metadata as YAML or JSON. If not provided, reads PLUGIN_METADATA
    #[arg(env = "PLUGIN_METADATA", default_value = "{}", hide_env_values = true)]
    pub metadata: String,

    /// Repository context as owner/name (e.g. from CI)
    #[arg(long = "repo", env = "GITHUB_REPOSITORY", default_value = "")]
    pub repo: String,

    /// Version-control ref (e.g. refs/tags/v1.0.0)
    #[arg(long = "git-ref", env = "GITHUB_REF", default_value = "")]
    pub git_ref: String,
}

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Update from inline JSON:\n    plugreg update '{\"repo\": \"https://github.com/author/demo\"}'\n\n\
                  Update from the environment (CI):\n    PLUGIN_DATA='{...}' plugreg update\n\n\
                  Use a custom registry file:\n    plugreg update --registry market/plugins.json\n\n\
                  Skip GitHub enrichment (tests, offline runs):\n    plugreg update --offline")]
pub struct UpdateArgs {
    /// Raw plugin metadata as YAML or JSON. If not provided, reads PLUGIN_DATA
    #[arg(env = "PLUGIN_DATA", default_value = "{}", hide_env_values = true)]
    pub metadata: String,

    /// Path to the registry file
    #[arg(long, default_value = "plugins.json")]
    pub registry: PathBuf,

    /// Do not contact GitHub; use default enrichment values
    #[arg(long)]
    pub offline: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    plugreg completions --shell bash > ~/.bash_completion.d/plugreg\n\n\
                  Generate zsh completions:\n    plugreg completions --shell zsh > ~/.zfunc/_plugreg\n\n\
                  Generate fish completions:\n    plugreg completions --shell fish > ~/.config/fish/completions/plugreg.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
