//! Validate command implementation
//!
//! Reads raw metadata from the CLI (or the PLUGIN_METADATA environment
//! variable via clap), runs the repair pipeline, and prints the repaired
//! mapping as compact JSON on stdout. Repair notes go to stderr so the
//! stdout payload stays machine-readable for the next pipeline step.

use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::metadata::diagnostics::Diagnostics;
use crate::metadata::parse_lenient;
use crate::metadata::validate::validate_and_fix;

/// Run validate command
pub fn run(args: ValidateArgs) -> Result<()> {
    let metadata = parse_lenient(&args.metadata);
    let mut diag = Diagnostics::stderr();
    let repaired = validate_and_fix(metadata, &args.repo, &args.git_ref, &mut diag);

    println!("{}", serde_json::to_string(&repaired)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_with_empty_input() {
        let args = ValidateArgs {
            metadata: "{}".to_string(),
            repo: String::new(),
            git_ref: String::new(),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_run_with_garbage_input() {
        let args = ValidateArgs {
            metadata: "{definitely not parseable".to_string(),
            repo: "alice/demo".to_string(),
            git_ref: "refs/tags/v1.0.0".to_string(),
        };
        assert!(run(args).is_ok());
    }
}
