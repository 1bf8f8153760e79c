//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// IDM Console - headless administration for identity servers.
#[derive(Debug, Parser)]
#[command(name = "idm-console")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Identity server URL (overrides config).
    #[arg(short, long, env = "IDM_CONSOLE_SERVER_URL")]
    pub server: Option<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Email template type commands.
    #[command(subcommand)]
    TemplateTypes(TemplateTypeCommand),

    /// Identity provider commands.
    #[command(subcommand)]
    Idp(IdpCommand),

    /// Print the route table.
    Routes(RoutesArgs),
}

#[derive(Debug, Subcommand)]
pub enum TemplateTypeCommand {
    /// List one page of template types.
    List {
        /// 1-based page number.
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Items per page (defaults to the configured item limit).
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Create a template type.
    Create {
        /// Display name.
        display_name: String,
    },

    /// Delete a template type.
    Delete {
        /// Template type ID.
        id: String,
    },

    /// Preview a locale template.
    Preview {
        /// Template type ID.
        type_id: String,

        /// Template (locale) ID, e.g. en_US.
        template_id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum IdpCommand {
    /// Show an identity provider.
    Show {
        /// Identity provider ID.
        id: String,
    },

    /// Delete an identity provider.
    Delete {
        /// Identity provider ID.
        id: String,
    },

    /// Rename an identity provider.
    Rename {
        /// Identity provider ID.
        id: String,

        /// New name.
        name: String,
    },
}

#[derive(Debug, Args)]
pub struct RoutesArgs {
    /// Show the admin portal routes instead of the user portal.
    #[arg(long)]
    pub admin: bool,
}
