use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use arbor_dispatch::ReferenceRequest;

#[derive(Parser)]
#[command(
    name = "arbor",
    about = "arbor — branch and tag management against a reference store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List, create, delete, or assign branches
    Branch(RefArgs),
    /// List, create, delete, or assign tags
    Tag(RefArgs),
}

#[derive(Args, Debug)]
pub struct RefArgs {
    /// Reference to create, delete, or assign; filters a listing
    pub name: Option<String>,
    /// Commit hash to create from, or to assign to with --force
    pub new_name: Option<String>,
    /// List references
    #[arg(short, long)]
    pub list: bool,
    /// Delete the named reference
    #[arg(short, long)]
    pub delete: bool,
    /// Move an existing reference to NEW_NAME
    #[arg(short, long)]
    pub force: bool,
    /// Show hashes in listings
    #[arg(short, long)]
    pub verbose: bool,
    /// Print listings as JSON
    #[arg(long)]
    pub json: bool,
}

impl RefArgs {
    pub fn into_request(self, is_branch: bool) -> ReferenceRequest {
        ReferenceRequest {
            list: self.list,
            delete: self.delete,
            name: self.name,
            target: self.new_name,
            is_branch,
            json: self.json,
            force: self.force,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_branch() {
        let cli = Cli::try_parse_from(["arbor", "branch"]).unwrap();
        if let Command::Branch(args) = cli.command {
            let req = args.into_request(true);
            assert_eq!(req, ReferenceRequest::branches());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_branch_delete() {
        let cli = Cli::try_parse_from(["arbor", "branch", "-d", "feature1"]).unwrap();
        if let Command::Branch(args) = cli.command {
            assert!(args.delete);
            assert_eq!(args.name, Some("feature1".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_tag_force_assign() {
        let cli = Cli::try_parse_from(["arbor", "tag", "-f", "rel", "def456"]).unwrap();
        if let Command::Tag(args) = cli.command {
            let req = args.into_request(false);
            assert!(req.force);
            assert!(!req.is_branch);
            assert_eq!(req.name, Some("rel".into()));
            assert_eq!(req.target, Some("def456".into()));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_list_flags() {
        let cli = Cli::try_parse_from(["arbor", "tag", "-l", "-v", "--json"]).unwrap();
        if let Command::Tag(args) = cli.command {
            assert!(args.list);
            assert!(args.verbose);
            assert!(args.json);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_global_config() {
        let cli = Cli::try_parse_from(["arbor", "branch", "--config", "arbor.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("arbor.toml")));
    }
}
