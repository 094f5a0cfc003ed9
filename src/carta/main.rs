use carta::api::MenuApi;
use carta::commands::{CmdMessage, ListedItem, ListedTab, MessageLevel};
use carta::config::CartaConfig;
use carta::error::{CartaError, Result};
use carta::event::UiEvent;
use carta::model::SpiceLevel;
use carta::store::fs::FileSource;
use carta::view::ViewCommand;
use colored::*;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};
use clap::Parser;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tabs { ref menu } => handle_tabs(menu, cli.config.as_deref()),
        Commands::Show {
            ref menu,
            ref tab,
            ref filters,
            spice,
            commands,
        } => handle_show(menu, cli.config.as_deref(), tab.clone(), filters, spice, commands),
        Commands::Resolve {
            ref menu,
            ref fragment,
        } => handle_resolve(menu, cli.config.as_deref(), fragment),
        Commands::Replay {
            ref menu,
            ref script,
        } => handle_replay(menu, cli.config.as_deref(), script),
    }
}

fn open_api(menu_path: &Path, config_dir: Option<&Path>) -> Result<MenuApi> {
    let dir = config_dir
        .map(Path::to_path_buf)
        .or_else(|| menu_path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    let config = CartaConfig::load(&dir)?;
    MenuApi::open(&FileSource::new(menu_path), config)
}

fn handle_tabs(menu_path: &Path, config_dir: Option<&Path>) -> Result<()> {
    let api = open_api(menu_path, config_dir)?;
    let result = api.tabs()?;
    print_tabs(&result.listed_tabs);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(
    menu_path: &Path,
    config_dir: Option<&Path>,
    tab: Option<String>,
    filters: &[String],
    spice: Option<SpiceLevel>,
    show_commands: bool,
) -> Result<()> {
    let mut api = open_api(menu_path, config_dir)?;

    let mut results = Vec::new();
    if let Some(tab_id) = tab {
        results.push(api.tab_clicked(&tab_id)?);
    }
    for tag in filters {
        results.push(api.dietary_filter_clicked(tag)?);
    }
    if let Some(level) = spice {
        results.push(api.spice_filter_clicked(level)?);
    }

    if show_commands {
        for result in &results {
            print_commands(&result.commands);
            print_messages(&result.messages);
        }
        return Ok(());
    }

    let result = api.show()?;
    print_items(&result.listed_items);
    for result in &results {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_resolve(menu_path: &Path, config_dir: Option<&Path>, fragment: &str) -> Result<()> {
    let mut api = open_api(menu_path, config_dir)?;
    let result = api.location_hash_changed(fragment)?;

    println!("active tab: {}", api.session().active_tab.bold());
    print_commands(&result.commands);
    print_messages(&result.messages);
    Ok(())
}

fn handle_replay(menu_path: &Path, config_dir: Option<&Path>, script_path: &Path) -> Result<()> {
    let mut api = open_api(menu_path, config_dir)?;
    let script = std::fs::read_to_string(script_path)?;

    for line in script.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event: UiEvent = line
            .parse()
            .map_err(|e: String| CartaError::Api(format!("{}: {}", script_path.display(), e)))?;

        println!("{} {}", ">".yellow(), event.to_string().bold());
        let result = api.dispatch(event)?;
        if result.is_noop() {
            println!("  {}", "(no-op)".dimmed());
        } else {
            print_commands(&result.commands);
            print_messages(&result.messages);
        }
    }
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

fn print_commands(commands: &[ViewCommand]) {
    for command in commands {
        println!("  {}", command);
    }
}

const VISIBLE_MARKER: &str = "●";
const HIDDEN_MARKER: &str = "○";

fn print_tabs(tabs: &[ListedTab]) {
    for tab in tabs {
        let marker = if tab.active { "▸" } else { " " };
        let title = if tab.active {
            tab.title.bold()
        } else {
            tab.title.normal()
        };
        let note = if tab.reserved {
            " (filters hidden)".dimmed()
        } else {
            "".normal()
        };
        println!("{} {}  {}{}", marker, title, tab.id.dimmed(), note);
    }
}

fn print_items(items: &[ListedItem]) {
    if items.is_empty() {
        println!("No items in this tab.");
        return;
    }

    let name_col = items
        .iter()
        .map(|i| i.name.width())
        .max()
        .unwrap_or(0);

    for item in items {
        let padding = " ".repeat(name_col.saturating_sub(item.name.width()));
        let price = item.price.as_deref().unwrap_or("");
        let line = format!("{}{}  {}", item.name, padding, price);
        if item.visible {
            println!("  {} {}", VISIBLE_MARKER.green(), line);
        } else {
            println!("  {} {}", HIDDEN_MARKER.dimmed(), line.dimmed());
        }

        for option in &item.options {
            if option.visible {
                println!("      {} {}", VISIBLE_MARKER.green(), option.name);
            } else {
                println!("      {} {}", HIDDEN_MARKER.dimmed(), option.name.dimmed());
            }
        }
    }

    let shown = items.iter().filter(|i| i.visible).count();
    if shown < items.len() {
        println!(
            "{}",
            format!("{} of {} items match", shown, items.len()).dimmed()
        );
    }
}
