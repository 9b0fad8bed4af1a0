use clap::Parser;
use directories::ProjectDirs;
use pastebox::api::{ConfigAction, PasteApi, PasteboxPaths};
use pastebox::config::PasteboxConfig;
use pastebox::error::{PasteError, Result};
use pastebox::model::PasteDraft;
use pastebox::store::fs_backend::FsBackend;
use pastebox::store::PasteStore;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_full_pastes, print_messages, print_pastes};

const HOME_ENV: &str = "PASTEBOX_HOME";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PasteApi<FsBackend>,
    config: PasteboxConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Create {
            title,
            content,
            id,
            stdin,
        }) => handle_create(&mut ctx, title, content, id, stdin),
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::Search { term }) => handle_list(&mut ctx, Some(term)),
        Some(Commands::View { ids }) => handle_view(&mut ctx, ids),
        Some(Commands::Update {
            id,
            title,
            content,
            stdin,
        }) => handle_update(&mut ctx, id, title, content, stdin),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut ctx, None),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pastebox={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "pastebox", "pastebox")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PasteError::Config("Could not determine data directory".to_string()))
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = PasteboxConfig::load(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), slot = %config.slot, "starting");

    let store = PasteStore::open_slot(FsBackend::new(&data_dir), config.slot.clone());
    let api = PasteApi::new(store, PasteboxPaths { data_dir });

    Ok(AppContext { api, config })
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(PasteError::Io)?;
    Ok(buf)
}

fn handle_create(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Option<String>,
    id: Option<String>,
    stdin: bool,
) -> Result<()> {
    let content = if stdin {
        read_stdin()?
    } else {
        content.unwrap_or_default()
    };

    let mut draft = PasteDraft::new(title.unwrap_or_default(), content);
    draft.id = id;

    let result = ctx.api.create_paste(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    let result = match search {
        Some(term) => ctx.api.search_pastes(&term)?,
        None => ctx.api.list_pastes()?,
    };
    print_messages(&result.messages);
    print_pastes(&result.listed_pastes, ctx.config.preview_width);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.view_pastes(&ids)?;
    print_full_pastes(&result.listed_pastes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    id: String,
    title: Option<String>,
    content: Option<String>,
    stdin: bool,
) -> Result<()> {
    let content = if stdin { Some(read_stdin()?) } else { content };
    if title.is_none() && content.is_none() {
        return Err(PasteError::Api(
            "Nothing to update: pass --title, --content or --stdin".into(),
        ));
    }

    let result = ctx.api.patch_paste(&id, title, content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_pastes(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.reset(yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.slot_path().display());
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        println!("slot = {}", config.slot);
        println!("preview-width = {}", config.preview_width);
    }
    print_messages(&result.messages);
    Ok(())
}
