mod render;

use anyhow::{Context, Result};
use cardnews_markup_config::{Config, ContentSource};
use cardnews_markup_engine::{DocumentCache, io};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use relative_path::{RelativePath, RelativePathBuf};
use render::RenderOptions;
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

const PAGE: u16 = 10;

struct App {
    content_path: PathBuf,
    articles: Vec<RelativePathBuf>,
    list_state: ListState,
    cache: DocumentCache,
    options: RenderOptions,
    current_content: Vec<Line<'static>>,
    scroll: u16,
}

impl App {
    fn new(content_path: PathBuf, options: RenderOptions) -> Result<Self> {
        let articles = io::scan_articles(&content_path)?
            .iter()
            .filter_map(|path| path.strip_prefix(&content_path).ok())
            .filter_map(|rel| RelativePathBuf::from_path(rel).ok())
            .collect();

        let mut app = Self {
            content_path,
            articles,
            list_state: ListState::default(),
            cache: DocumentCache::new(),
            options,
            current_content: Vec::new(),
            scroll: 0,
        };

        if !app.articles.is_empty() {
            app.list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_article(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.articles.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_article(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.articles.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn scroll_down(&mut self) {
        let max = u16::try_from(self.current_content.len()).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(PAGE).min(max);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(PAGE);
    }

    fn update_content_for_selection(&mut self) {
        self.scroll = 0;
        let Some(article) = self
            .list_state
            .selected()
            .and_then(|index| self.articles.get(index))
        else {
            return;
        };

        self.current_content = match io::read_article(article, &self.content_path) {
            Ok(source) => {
                let doc = self.cache.get_or_parse(&source);
                render::render_document(&doc, self.options)
            }
            Err(e) => {
                log::warn!("failed to read {article}: {e}");
                vec![Line::from(format!("Error reading article: {e}"))]
            }
        };
    }
}

enum Mode {
    Browse(Option<PathBuf>),
    Dump(PathBuf),
}

fn parse_args(args: &[String]) -> Option<Mode> {
    match args {
        [_] => Some(Mode::Browse(None)),
        [_, flag, file] if flag == "--dump" => Some(Mode::Dump(PathBuf::from(file))),
        [_, path] if !path.starts_with("--") => Some(Mode::Browse(Some(PathBuf::from(path)))),
        _ => None,
    }
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("cardnews", String::as_str)
}

fn load_config() -> Option<Config> {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    }
}

fn render_options(config: Option<&Config>) -> RenderOptions {
    config
        .map(|c| RenderOptions {
            show_callout_icons: c.show_callout_icons,
        })
        .unwrap_or_default()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let Some(mode) = parse_args(&args) else {
        let program = program_name(&args);
        eprintln!("Usage: {program} [content-path]");
        eprintln!("       {program} --dump <article.md>");
        process::exit(1);
    };

    match mode {
        Mode::Dump(file) => dump(&file),
        Mode::Browse(path) => browse(path),
    }
}

fn dump(file: &Path) -> Result<()> {
    let config = load_config();
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let doc = cardnews_markup_engine::parse_document(&source);
    println!(
        "{}",
        render::dump_text(&doc, render_options(config.as_ref()))
    );
    Ok(())
}

fn browse(cli_path: Option<PathBuf>) -> Result<()> {
    let config_path = Config::config_path();
    log::debug!("config path: {}", config_path.display());
    let config = load_config();

    let Some(source) = ContentSource::resolve(cli_path, config.as_ref(), &config_path) else {
        eprintln!("Error: No content path provided and no config file found");
        eprintln!("Usage: cardnews <content-path>");
        eprintln!("Or create a config file at {}", config_path.display());
        process::exit(1);
    };

    if let Err(e) = io::validate_content_dir(source.path()) {
        eprintln!("Error: Content path {source} is invalid: {e}");
        process::exit(1);
    }

    let mut app = App::new(source.path().to_path_buf(), render_options(config.as_ref()))?;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_article(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_article(),
                KeyCode::PageDown => app.scroll_down(),
                KeyCode::PageUp => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let items: Vec<ListItem> = app
        .articles
        .iter()
        .map(|article| ListItem::new(Line::from(article_title(article))))
        .collect();

    let articles = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Articles"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(articles, chunks[0], &mut app.list_state);

    let content_text = if app.current_content.is_empty() {
        vec![Line::from("No articles found")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Article"))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("PgUp/PgDn: Scroll"),
    ]));

    f.render_widget(help, rows[1]);
}

fn article_title(article: &RelativePath) -> String {
    article.with_extension("").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(&["cardnews"], Some(None))]
    #[case(&["cardnews", "/tmp/articles"], Some(Some("/tmp/articles")))]
    #[case(&["cardnews", "--bogus"], None)]
    #[case(&["cardnews", "a", "b"], None)]
    fn browse_args(#[case] raw: &[&str], #[case] expected: Option<Option<&str>>) {
        let parsed = parse_args(&args(raw)).map(|mode| match mode {
            Mode::Browse(path) => path,
            Mode::Dump(_) => panic!("unexpected dump mode"),
        });
        assert_eq!(parsed, expected.map(|p| p.map(PathBuf::from)));
    }

    #[test]
    fn dump_args() {
        let Some(Mode::Dump(file)) = parse_args(&args(&["cardnews", "--dump", "a.md"])) else {
            panic!("expected dump mode");
        };
        assert_eq!(file, PathBuf::from("a.md"));
    }

    #[test]
    fn empty_argv_is_a_usage_error_without_panicking() {
        assert!(parse_args(&[]).is_none());
        assert_eq!(program_name(&[]), "cardnews");
        assert_eq!(program_name(&args(&["/usr/bin/cardnews"])), "/usr/bin/cardnews");
    }

    #[test]
    fn article_title_drops_extension() {
        assert_eq!(article_title(RelativePath::new("cards/week-1.md")), "cards/week-1");
    }

    #[test]
    fn render_options_follow_config() {
        let mut config = Config::new("/tmp");
        config.show_callout_icons = false;

        assert!(!render_options(Some(&config)).show_callout_icons);
        assert!(render_options(None).show_callout_icons);
    }
}
