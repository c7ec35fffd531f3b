use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use foundations::config::log_path;
use foundations::logging::{self, LogFormat, LogOptions};
use foundations::plugin::{
    BuildInfo, FoundationsPlugin, GameEvent, PluginDescriptor, PluginMeta, StaticPluginManager,
    dispatch,
};
use foundations::version::{ComparableVersion, encode};

#[derive(Parser)]
#[command(name = "foundations")]
#[command(version, about = "Identity and version tooling for the foundations plugin")]
struct Cli {
    /// Default log filter, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Log to a file instead of stderr (defaults to the data directory)
    #[arg(long, global = true, require_equals = true, value_name = "PATH")]
    log_file: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the comparable integer for each version
    Encode {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// Print the version an integer encodes
    Decode { value: u64 },
    /// Print the metadata built from a plugin descriptor as JSON
    Describe { descriptor: PathBuf },
    /// Load a plugin descriptor and run the plugin through startup and shutdown
    Run { descriptor: PathBuf },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file = cli.log_file.map(|path| path.unwrap_or_else(log_path));
    if let Some(dir) = file.as_deref().and_then(Path::parent) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {dir:?}"))?;
    }
    let _guard = logging::init(&LogOptions {
        level: cli.log_level,
        format: cli.log_format,
        file,
    })?;

    match cli.command {
        Command::Encode { versions } => {
            for raw in versions {
                let encoded = encode(&raw)?;
                println!("{raw}\t{encoded}");
            }
        }
        Command::Decode { value } => {
            println!("{}", ComparableVersion::from(value).decode());
        }
        Command::Describe { descriptor } => {
            let meta = load_meta(&descriptor)?.0;
            println!("{}", serde_json::to_string_pretty(&meta)?);
        }
        Command::Run { descriptor } => {
            let (meta, plugin) = load_meta(&descriptor)?;
            info!(version = %meta.version_incremental(), "Plugin activated");
            dispatch(&plugin, GameEvent::pre_initialization());
            dispatch(&plugin, GameEvent::stopping());
        }
    }

    Ok(())
}

fn load_meta(path: &Path) -> anyhow::Result<(PluginMeta, FoundationsPlugin)> {
    let descriptor = PluginDescriptor::load(path)
        .with_context(|| format!("Failed to load descriptor {path:?}"))?;
    let container = Arc::new(descriptor);

    let mut manager = StaticPluginManager::new();
    manager.register(container.clone());

    let meta = PluginMeta::load(&manager, BuildInfo::current())?;
    Ok((meta, FoundationsPlugin::new(container)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["foundations", "--log-file", "encode", "1.2.3"], Some(None))]
    #[case(&["foundations", "encode", "1.2.3", "--log-file"], Some(None))]
    #[case(
        &["foundations", "--log-file=/tmp/f.log", "encode", "1.2.3"],
        Some(Some(PathBuf::from("/tmp/f.log")))
    )]
    #[case(&["foundations", "encode", "1.2.3"], None)]
    fn log_file_flag_does_not_consume_subcommand(
        #[case] args: &[&str],
        #[case] expected: Option<Option<PathBuf>>,
    ) {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();

        assert_eq!(cli.log_file, expected);
        assert!(matches!(cli.command, Command::Encode { versions } if versions == ["1.2.3"]));
    }
}
