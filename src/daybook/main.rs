use chrono::{DateTime, Local, Utc};
use clap::Parser;
use colored::*;
use daybook::config::DaybookConfig;
use daybook::error::{DaybookError, Result};
use daybook::init::{initialize, DaybookContext};
use daybook::model::{DiaryDraft, DiaryEntry};
use daybook::resolve::resolve_id;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = initialize(cli.dir.clone())?;

    match cli.command {
        Some(Commands::New {
            title,
            content,
            weather,
            mood,
        }) => handle_new(&mut ctx, title, content, weather, mood),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Edit {
            id,
            title,
            content,
            weather,
            mood,
        }) => handle_edit(&mut ctx, &id, title, content, weather, mood),
        Some(Commands::Delete { id }) => handle_delete(&mut ctx, &id),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::List) | None => handle_list(&ctx),
    }
}

fn handle_new(
    ctx: &mut DaybookContext,
    title: String,
    content: String,
    weather: Option<String>,
    mood: Option<String>,
) -> Result<()> {
    let draft = DiaryDraft {
        id: None,
        title,
        content,
        weather,
        mood,
    };
    // Creation always yields an entry
    if let Some(entry) = ctx.diary.save(draft)? {
        println!(
            "{}",
            format!("Entry created ({}): {}", short_id(&entry), entry.title).green()
        );
    }
    Ok(())
}

fn handle_show(ctx: &DaybookContext, selector: &str) -> Result<()> {
    let id = resolve_id(ctx.diary.entries(), selector)?;
    if let Some(entry) = ctx.diary.find_by_id(id) {
        print_full_entry(entry, &ctx.config);
    }
    Ok(())
}

fn handle_edit(
    ctx: &mut DaybookContext,
    selector: &str,
    title: Option<String>,
    content: Option<String>,
    weather: Option<String>,
    mood: Option<String>,
) -> Result<()> {
    let id = resolve_id(ctx.diary.entries(), selector)?;
    let current = ctx
        .diary
        .find_by_id(id)
        .cloned()
        .ok_or(DaybookError::EntryNotFound(id))?;

    // Pre-fill from the existing entry, then apply the flags that were given.
    // The store replaces fields wholesale.
    let draft = DiaryDraft {
        id: Some(id),
        title: title.unwrap_or(current.title),
        content: content.unwrap_or(current.content),
        weather: weather.or(current.weather),
        mood: mood.or(current.mood),
    };

    if let Some(entry) = ctx.diary.save(draft)? {
        println!(
            "{}",
            format!("Entry updated ({}): {}", short_id(&entry), entry.title).green()
        );
    }
    Ok(())
}

fn handle_delete(ctx: &mut DaybookContext, selector: &str) -> Result<()> {
    let id = resolve_id(ctx.diary.entries(), selector)?;
    let title = ctx
        .diary
        .find_by_id(id)
        .map(|e| e.title.clone())
        .unwrap_or_default();
    ctx.diary.delete(id)?;
    println!("{}", format!("Entry deleted: {}", title).green());
    Ok(())
}

fn handle_config(
    ctx: &mut DaybookContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("date-format = {}", ctx.config.date_format);
            println!("relative-times = {}", ctx.config.relative_times);
        }
        (Some("date-format"), None) => println!("date-format = {}", ctx.config.date_format),
        (Some("date-format"), Some(v)) => {
            ctx.config.date_format = v;
            ctx.config.save(&ctx.data_dir)?;
            println!("{}", "Config updated".green());
        }
        (Some("relative-times"), None) => {
            println!("relative-times = {}", ctx.config.relative_times)
        }
        (Some("relative-times"), Some(v)) => {
            ctx.config.relative_times = matches!(v.as_str(), "true" | "yes" | "on" | "1");
            ctx.config.save(&ctx.data_dir)?;
            println!("{}", "Config updated".green());
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;

fn handle_list(ctx: &DaybookContext) -> Result<()> {
    let entries: Vec<&DiaryEntry> = ctx.diary.sorted().collect();
    if entries.is_empty() {
        println!("No entries yet. Write one with `daybook new --title ...`");
        return Ok(());
    }

    for entry in entries {
        let id_str = format!("{}  ", short_id(entry));
        let marker = entry.mood.as_deref().map(first_char).unwrap_or(' ');
        let prefix = format!("  {} ", marker);

        let time_str = if ctx.config.relative_times {
            format_time_ago(entry.created_at)
        } else {
            let absolute = entry
                .created_at
                .with_timezone(&Local)
                .format(&ctx.config.date_format)
                .to_string();
            format!("{:>width$}", absolute, width = TIME_WIDTH)
        };

        let fixed = prefix.width() + id_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = truncate_to_width(&entry.title, available);
        let padding = available.saturating_sub(title.width());

        println!(
            "{}{}{}{}{}",
            prefix,
            id_str.dimmed(),
            title,
            " ".repeat(padding),
            time_str.dimmed()
        );
    }
    Ok(())
}

fn print_full_entry(entry: &DiaryEntry, config: &DaybookConfig) {
    println!(
        "{} {}",
        short_id(entry).dimmed(),
        entry.title.bold()
    );

    let created = entry
        .created_at
        .with_timezone(&Local)
        .format(&config.date_format);
    match entry.updated_at {
        Some(updated) => println!(
            "{}",
            format!(
                "written {}, last edited {}",
                created,
                updated.with_timezone(&Local).format(&config.date_format)
            )
            .dimmed()
        ),
        None => println!("{}", format!("written {}", created).dimmed()),
    }

    if entry.weather.is_some() || entry.mood.is_some() {
        let labels: Vec<&str> = [entry.weather.as_deref(), entry.mood.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        println!("{}", labels.join("  ").dimmed());
    }

    println!("--------------------------------");
    println!("{}", entry.content);
}

fn short_id(entry: &DiaryEntry) -> String {
    entry.id.simple().to_string()[..8].to_string()
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or(' ')
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

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
