use anyhow::Context;
use tracing::debug;

use arbor_dispatch::{handle_request, Listing, Outcome, ReferenceRequest};
use arbor_refs::ReferenceStore;

use crate::cli::*;
use crate::config::ArborConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = ArborConfig::load(cli.config.as_deref())?;
    debug!(config = ?cli.config, default_branch = %config.default_branch, "loaded configuration");
    if !config.output.color {
        colored::control::set_override(false);
    }
    let store = config.build_store()?;

    let request = match cli.command {
        Command::Branch(args) => args.into_request(true),
        Command::Tag(args) => args.into_request(false),
    };
    let output = execute(&store, &config, request)?;
    print!("{output}");
    Ok(())
}

/// Run one request and return what should be printed.
fn execute<S: ReferenceStore>(
    store: &S,
    config: &ArborConfig,
    mut request: ReferenceRequest,
) -> anyhow::Result<String> {
    request.json |= config.output.json;
    request.verbose |= config.output.verbose;

    let kind = request.kind();
    debug!(?request, "resolved request");
    let outcome = handle_request(store, &request).with_context(|| format!("{kind} command failed"))?;

    Ok(match outcome {
        Outcome::Done => String::new(),
        Outcome::Listing(Listing::Json(json)) => format!("{json}\n"),
        Outcome::Listing(Listing::Table(table)) => table.to_colored_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_refs::{CommitHash, InMemoryReferenceStore, Reference};

    fn session() -> (InMemoryReferenceStore, ArborConfig) {
        let config = ArborConfig {
            default_hash: "aaaa".into(),
            references: vec![
                Reference::branch("feature1", CommitHash::parse("abc123").unwrap()),
                Reference::tag("v1", CommitHash::parse("cccc").unwrap()),
            ],
            ..ArborConfig::default()
        };
        let store = config.build_store().unwrap();
        (store, config)
    }

    #[test]
    fn mutations_print_nothing() {
        colored::control::set_override(false);
        let (store, config) = session();
        let request = ReferenceRequest {
            name: Some("dev".into()),
            is_branch: true,
            ..Default::default()
        };
        assert_eq!(execute(&store, &config, request).unwrap(), "");
        assert!(store.get_reference("dev").is_ok());
    }

    #[test]
    fn config_output_defaults_apply() {
        colored::control::set_override(false);
        let (store, mut config) = session();
        config.output.json = true;
        let out = execute(&store, &config, ReferenceRequest::tags()).unwrap();
        assert_eq!(out, "[{\"name\":\"v1\",\"kind\":\"TAG\",\"hash\":\"cccc\"}]\n");
    }

    #[test]
    fn branch_table() {
        colored::control::set_override(false);
        let (store, config) = session();
        let out = execute(&store, &config, ReferenceRequest::branches()).unwrap();
        assert_eq!(out, "  feature1 \n* main     \n");
    }

    #[test]
    fn store_errors_surface_with_context() {
        let (store, config) = session();
        let request = ReferenceRequest {
            name: Some("ghost".into()),
            delete: true,
            ..Default::default()
        };
        let err = execute(&store, &config, request).unwrap_err();
        assert_eq!(err.to_string(), "tag command failed");
        assert!(format!("{err:#}").contains("reference not found: ghost"));
    }
}
