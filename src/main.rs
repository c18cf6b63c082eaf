use clap::Parser;
use draftpad::core::config::{self, CliOverrides, ResolvedConfig};
use draftpad::core::panel::RichTextPanel;
use draftpad::core::storage::FileStore;
use draftpad::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "draftpad", about = "Terminal rich-text editor that saves as you type")]
struct Args {
    /// Store file (default: ~/.draftpad/local_storage.json)
    #[arg(long)]
    storage: Option<PathBuf>,

    /// Record key inside the store file
    #[arg(long)]
    key: Option<String>,

    /// Print the stored document as plain text and exit
    #[arg(long)]
    dump: bool,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Some(parent) = config.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {}; using defaults", e);
        config::DraftpadConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            storage_path: args.storage,
            storage_key: args.key,
            log_level: args.log_level,
        },
    );

    init_logging(&resolved);
    log::info!(
        "Draftpad starting up (store: {}, key: {})",
        resolved.storage_path.display(),
        resolved.storage_key
    );

    if args.dump {
        let store = FileStore::new(&resolved.storage_path);
        let panel = RichTextPanel::load(Box::new(store), resolved.storage_key.clone());
        println!("{}", panel.editor_state().content().plain_text());
        return Ok(());
    }

    tui::run(resolved)
}
