//! Update command implementation
//!
//! Parses the submission, enriches it with live GitHub data (unless
//! --offline), and merges it into the registry file. Prints a confirmation
//! line followed by the pretty-printed `{id: record}` object.

use indexmap::IndexMap;

use crate::cli::UpdateArgs;
use crate::enrich::github::GithubClient;
use crate::enrich::{OfflineHost, RepoHost};
use crate::error::Result;
use crate::metadata::parse_lenient;
use crate::registry::store::FileStore;
use crate::updater::update_registry;

/// Run update command
pub fn run(args: UpdateArgs) -> Result<()> {
    let metadata = parse_lenient(&args.metadata);

    let host: Box<dyn RepoHost> = if args.offline {
        Box::new(OfflineHost)
    } else {
        Box::new(GithubClient::from_env())
    };
    let store = FileStore::new(&args.registry);

    let (plugin_id, record) = update_registry(&metadata, host.as_ref(), &store)?;

    println!("Updated plugin: {plugin_id}");
    let output: IndexMap<&str, _> = IndexMap::from([(plugin_id.as_str(), record)]);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
