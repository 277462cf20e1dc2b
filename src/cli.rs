//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// elgglp - Elgg language pack tool
///
/// Validate, list, synchronize, export and import Elgg language packs.
#[derive(Parser, Debug)]
#[command(
    name = "elgglp",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Elgg language pack tool",
    long_about = "elgglp validates Elgg language packs, lists their modules, copies locale files \
                  between trees, and exports or imports zip packs pinned to one Elgg release.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  elgglp check ./pack\n    \
                  elgglp list /var/www/elgg --install\n    \
                  elgglp export /var/www/elgg fr.zip --locale fr\n    \
                  elgglp import fr.zip /var/www/elgg"
)]
pub struct Cli {
    /// Configuration file (defaults to ./elgglp.yaml when present)
    #[arg(long, short = 'c', global = true, env = "ELGGLP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a language pack or an Elgg install
    Check(CheckArgs),

    /// List the modules of a language pack or an Elgg install
    List(ListArgs),

    /// Copy locale files from one tree into another
    Sync(SyncArgs),

    /// Export an Elgg install's locale files as a zip pack
    Export(ExportArgs),

    /// Import a zip pack into an Elgg install
    Import(ImportArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Module and locale selection shared by the copying commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only process this module (core, install or a plugin slug); repeatable
    #[arg(long = "project", value_name = "SLUG")]
    pub projects: Vec<String>,

    /// Only copy this locale (e.g. fr, pt_br); repeatable
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locales: Vec<String>,

    /// Replace locale files that already exist in the destination
    #[arg(long)]
    pub overwrite: bool,

    /// Do not copy English locale files
    #[arg(long)]
    pub skip_english: bool,

    /// Elgg release of the host, instead of reading version.php
    #[arg(long, value_name = "RELEASE", env = "ELGGLP_ELGG_VERSION")]
    pub elgg_version: Option<String>,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate a language pack:\n    elgglp check ./pack\n\n\
                  Validate an Elgg install:\n    elgglp check /var/www/elgg --install")]
pub struct CheckArgs {
    /// Pack or install root
    pub root: PathBuf,

    /// Read the release from version.php instead of languagepack.meta
    #[arg(long)]
    pub install: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List the modules of a pack:\n    elgglp list ./pack\n\n\
                  List with skip reasons:\n    elgglp list /var/www/elgg --install -v")]
pub struct ListArgs {
    /// Pack or install root
    pub root: PathBuf,

    /// Read the release from version.php instead of languagepack.meta
    #[arg(long)]
    pub install: bool,

    /// Elgg release of the host to check the pack against
    #[arg(long, value_name = "RELEASE", env = "ELGGLP_ELGG_VERSION")]
    pub elgg_version: Option<String>,
}

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Copy an unpacked pack into an install:\n    elgglp sync ./pack /var/www/elgg --require-sidecar\n\n\
                  Copy French only, replacing existing files:\n    elgglp sync ./pack /var/www/elgg --require-sidecar --locale fr --overwrite")]
pub struct SyncArgs {
    /// Source tree
    pub src: PathBuf,

    /// Destination tree
    pub dest: PathBuf,

    /// Source is a pack with languagepack.meta and languagemod.meta sidecars
    #[arg(long)]
    pub require_sidecar: bool,

    /// Only copy plugins with a manifest.xml, and write sidecars into the destination
    #[arg(long)]
    pub require_manifest: bool,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the export command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Export every locale:\n    elgglp export /var/www/elgg pack.zip\n\n\
                  Export German without English:\n    elgglp export /var/www/elgg de.zip --locale de --skip-english")]
pub struct ExportArgs {
    /// Elgg install root
    pub install_root: PathBuf,

    /// Zip file to create
    pub archive: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for the import command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Import a pack:\n    elgglp import fr.zip /var/www/elgg\n\n\
                  Import one plugin only:\n    elgglp import fr.zip /var/www/elgg --project blog")]
pub struct ImportArgs {
    /// Zip pack to import
    pub archive: PathBuf,

    /// Elgg install root
    pub install_root: PathBuf,

    #[command(flatten)]
    pub filters: FilterArgs,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    elgglp completions --shell bash > ~/.bash_completion.d/elgglp\n\n\
                  Generate zsh completions:\n    elgglp completions --shell zsh > ~/.zfunc/_elgglp")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(long, value_enum)]
    pub shell: clap_complete::Shell,
}
