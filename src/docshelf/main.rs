use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use docshelf::api::{CatalogPaths, CmdMessage, ConfigAction, DocshelfApi, MessageLevel};
use docshelf::config::DocshelfConfig;
use docshelf::content::fs::FileContent;
use docshelf::error::{DocshelfError, Result};
use docshelf::model::Document;
use docshelf::store::fs::FileStore;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: DocshelfApi<FileStore, FileContent>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { files }) => handle_add(&ctx, files),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Show { position }) => handle_show(&ctx, position),
        Some(Commands::Move {
            position,
            new_position,
        }) => handle_move(&ctx, position, new_position),
        Some(Commands::Delete { positions }) => handle_delete(&ctx, positions),
        Some(Commands::Path { positions }) => handle_paths(&ctx, positions),
        Some(Commands::Doctor) => handle_doctor(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("io", "docshelf", "docshelf")
                .expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = DocshelfConfig::load(&root).unwrap_or_default();
    let record = FileStore::new(root.clone());
    let content = FileContent::new(root.join(config.get_content_dir()));
    let api = DocshelfApi::new(record, content, CatalogPaths::new(root));

    Ok(AppContext { api })
}

fn handle_add(ctx: &AppContext, files: Vec<PathBuf>) -> Result<()> {
    for file in files {
        let bytes = std::fs::read(&file).map_err(DocshelfError::Io)?;
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| DocshelfError::Api(format!("Not a file: {}", file.display())))?;

        let result = ctx.api.upload(&name, &bytes)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list(search.as_deref())?;
    print_documents(&result.listed_documents);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, position: usize) -> Result<()> {
    let result = ctx.api.get(position)?;
    for document in &result.listed_documents {
        println!(
            "{} {}",
            format!("{}.", document.position).yellow(),
            document.name.bold()
        );
        println!("--------------------------------");
        println!("id:       {}", document.id);
        println!("size:     {}", bytesize::ByteSize(document.file_size));
        println!("location: {}", document.location);
        println!(
            "uploaded: {}",
            document.uploaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    Ok(())
}

fn handle_move(ctx: &AppContext, position: usize, new_position: usize) -> Result<()> {
    let result = ctx.api.move_to_position(position, new_position)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &AppContext, positions: Vec<usize>) -> Result<()> {
    let result = ctx.api.delete(&positions)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_paths(ctx: &AppContext, positions: Vec<usize>) -> Result<()> {
    let result = ctx.api.document_paths(&positions)?;
    for path in &result.document_paths {
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_doctor(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.doctor()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("content-dir"), None) => ConfigAction::ShowKey("content-dir".to_string()),
        (Some("content-dir"), Some(v)) => ConfigAction::SetContentDir(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("content-dir = {}", config.get_content_dir());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const SIZE_WIDTH: usize = 10;
const TIME_WIDTH: usize = 16;

fn print_documents(documents: &[Document]) {
    if documents.is_empty() {
        println!("The shelf is empty.");
        return;
    }

    for document in documents {
        let idx_str = format!("{}. ", document.position);
        let size_str = format!(
            "{:>width$}",
            bytesize::ByteSize(document.file_size).to_string(),
            width = SIZE_WIDTH
        );
        let time_str = format!(
            "{:>width$}",
            format_time_ago(document.uploaded_at),
            width = TIME_WIDTH
        );

        let fixed_width = 4 + idx_str.width() + SIZE_WIDTH + TIME_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let name_display = truncate_to_width(&document.name, available);
        let padding = available.saturating_sub(name_display.width());

        println!(
            "    {}{}{} {} {}",
            idx_str.normal(),
            name_display,
            " ".repeat(padding),
            size_str.dimmed(),
            time_str.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
