//! repo-lens - quick-open fuzzy finder for repository files
//!
//! Candidates come from:
//! - a local checkout (default)
//! - a GitHub recursive tree listing saved as JSON
//! - stdin, one path per line

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};
use std::{
    env, fs,
    io::{self, BufRead, Read},
    path::PathBuf,
    str::FromStr,
    time::Duration,
};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use repo_lens::{
    config::Colors,
    highlight,
    history::{default_history_path, SearchHistory},
    picker::{Outcome, Picker},
    repo::parse_github_url,
    search, tree, walk, Config,
};

/// repo-lens - quick-open for repository files
#[derive(Parser, Debug)]
#[command(name = "repo-lens")]
#[command(version)]
#[command(about = "Fuzzy quick-open for files of a repository")]
struct Args {
    /// Where candidate paths come from
    #[arg(short, long, value_enum, default_value = "files")]
    mode: Mode,

    /// Initial query
    #[arg(short, long, default_value = "")]
    query: String,

    /// Directory to search (files mode)
    #[arg(short = 'p', long)]
    path: Option<PathBuf>,

    /// GitHub tree JSON to read (tree mode); stdin when omitted
    #[arg(long)]
    tree_file: Option<PathBuf>,

    /// Maximum number of results (defaults to the configured value)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print ranked matches for --query and exit instead of opening the picker
    #[arg(long)]
    filter: bool,

    /// Print selected item with null terminator
    #[arg(long)]
    print0: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GitHub repository URL being explored; recorded in the history
    #[arg(long)]
    repo: Option<String>,

    /// Print recently explored repositories and exit
    #[arg(long)]
    history: bool,

    /// Forget recently explored repositories and exit
    #[arg(long)]
    clear_history: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Walk a local checkout
    Files,
    /// Read a GitHub tree listing
    Tree,
    /// Read paths from stdin
    Stdin,
}

fn load_candidates(args: &Args, config: &Config) -> Result<Vec<String>> {
    match args.mode {
        Mode::Files => {
            let base = match &args.path {
                Some(path) => path.clone(),
                None => env::current_dir()?,
            };
            Ok(walk::collect_paths(&base, config))
        }
        Mode::Tree => {
            let json = match &args.tree_file {
                Some(file) => fs::read_to_string(file)
                    .with_context(|| format!("failed to read {}", file.display()))?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let nodes = tree::parse_tree_response(&json)?;
            Ok(tree::flatten_paths(&nodes))
        }
        Mode::Stdin => {
            let mut items = Vec::new();
            let mut seen = std::collections::HashSet::new();
            for line in io::stdin().lock().lines() {
                let line = line?;
                if !line.is_empty() && seen.insert(line.clone()) {
                    items.push(line);
                }
            }
            Ok(items)
        }
    }
}

fn parse_color(value: &str, fallback: Color) -> Color {
    Color::from_str(value).unwrap_or(fallback)
}

fn highlighted_line(path: &str, positions: &[usize], colors: &Colors) -> Line<'static> {
    let matched = Style::default()
        .fg(parse_color(&colors.highlight, Color::Cyan))
        .add_modifier(Modifier::BOLD);
    let split = highlight(path, positions);

    let mut spans = Vec::new();
    for (segment, base) in [
        (&split.directory, Style::default().fg(Color::DarkGray)),
        (&split.file_name, Style::default().fg(parse_color(&colors.fg, Color::White))),
    ] {
        for run in segment.runs() {
            let style = if run.matched { matched } else { base };
            spans.push(Span::styled(run.text, style));
        }
    }
    Line::from(spans)
}

fn ui(frame: &mut Frame, picker: &Picker, list_state: &mut ListState, config: &Config, title: &str) {
    let full = frame.area();
    let area = Rect {
        height: config.picker_height(full.height),
        ..full
    };

    let background = Style::default().bg(parse_color(&config.colors.bg, Color::Reset));
    frame.render_widget(Block::default().style(background), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Min(1),    // List
        ])
        .split(area);

    let border_color = parse_color(&config.colors.border, Color::DarkGray);

    // Input box
    let input_block = if config.border {
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(Style::default().fg(Color::Cyan))
    } else {
        Block::default()
    };

    let input = Paragraph::new(format!("> {}", picker.query()))
        .style(Style::default().fg(parse_color(&config.colors.fg, Color::White)))
        .block(input_block);
    frame.render_widget(input, chunks[0]);

    // Results list
    let items: Vec<ListItem> = match picker.empty_message() {
        Some(message) => vec![ListItem::new(Line::styled(
            message,
            Style::default().fg(Color::DarkGray),
        ))],
        None => picker
            .results()
            .iter()
            .map(|m| ListItem::new(highlighted_line(&m.path, &m.positions, &config.colors)))
            .collect(),
    };

    let list_block = if config.border {
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {}/{} ", picker.results().len(), picker.candidate_count()))
            .border_style(Style::default().fg(border_color))
    } else {
        Block::default()
    };

    let list = List::new(items)
        .block(list_block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("  ");

    if picker.results().is_empty() {
        list_state.select(None);
    } else {
        list_state.select(Some(picker.selected()));
    }
    frame.render_stateful_widget(list, chunks[1], list_state);
}

fn run_tui(mut picker: Picker, config: &Config, title: &str) -> Result<Option<String>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let mut list_state = ListState::default();

    let result = (|| -> Result<()> {
        while !picker.should_quit() {
            terminal.draw(|f| ui(f, &picker, &mut list_state, config, title))?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        picker.handle_key(key.code, key.modifiers);
                    }
                }
            }
        }
        Ok(())
    })();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result?;

    Ok(match picker.outcome() {
        Some(Outcome::Selected(path)) => Some(path.clone()),
        _ => None,
    })
}

fn init_logging(verbose: bool) {
    let default = if verbose { "repo_lens=debug,warn" } else { "repo_lens=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_item(item: &str, print0: bool) {
    if print0 {
        print!("{}\0", item);
    } else {
        println!("{}", item);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = Config::load(args.config.as_deref())?;
    let history_path = default_history_path();

    if args.history || args.clear_history {
        let Some(path) = history_path else {
            anyhow::bail!("no data directory available for the repository history");
        };
        let mut history = SearchHistory::load(&path);
        if args.clear_history {
            history.clear();
            history.save(&path)?;
            info!("cleared repository history");
        } else {
            for url in history.items() {
                println!("{}", url);
            }
        }
        return Ok(());
    }

    let mut title = "repo-lens".to_string();
    if let Some(url) = &args.repo {
        let info = parse_github_url(url)?;
        if let Some(path) = &history_path {
            let mut history = SearchHistory::load(path);
            history.add(url);
            history.save(path)?;
        }
        title = info.to_string();
    }

    let candidates = load_candidates(&args, &config)?;
    let limit = args.limit.unwrap_or(config.max_results);
    debug!("{} candidates, limit {}", candidates.len(), limit);

    if args.filter {
        for m in search(&args.query, &candidates, limit) {
            print_item(&m.path, args.print0);
        }
        return Ok(());
    }

    let mut picker = Picker::new(candidates, limit);
    picker.set_query(&args.query);

    if let Some(selected) = run_tui(picker, &config, &title)? {
        print_item(&selected, args.print0);
    }

    Ok(())
}
