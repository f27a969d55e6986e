use std::io;
use std::path::Path;
use std::process::ExitCode;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};

use folio::app::App;
use folio::catalog::{Catalog, CatalogError};
use folio::cli::{self, Command};
use folio::config::{self, Config, resolve_path};
use folio::{handlers, logging, ui};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match cli::parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}\n\n{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Help => {
            println!("{}", cli::USAGE);
            ExitCode::SUCCESS
        }
        Command::Init => init_config(),
        Command::Check(path) => check_catalog(&resolve_path(&path)),
        Command::Browse(cli_file) => {
            let config = match Config::load() {
                Ok(config) => config,
                Err(e) => {
                    eprintln!(
                        "Ignoring invalid config {}: {e}",
                        config::get_config_path().display()
                    );
                    Config::default()
                }
            };

            if let Err(e) = logging::init_logging(config.validated_log_level(), &config::get_log_dir())
            {
                eprintln!("Logging disabled: {e}");
            }

            let catalog_path = cli_file
                .as_deref()
                .map(resolve_path)
                .or_else(|| config.get_catalog_path());
            let catalog = match load_catalog(catalog_path.as_deref()) {
                Ok(catalog) => catalog,
                Err(e) => {
                    error!("event=catalog_rejected error={e}");
                    logging::flush();
                    eprintln!("Error: {e}");
                    return ExitCode::FAILURE;
                }
            };

            let result = run_tui(App::new(config, catalog));
            logging::flush();
            match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn init_config() -> ExitCode {
    match Config::init() {
        Ok(true) => {
            println!(
                "Created config file at: {}",
                config::get_config_path().display()
            );
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!(
                "Config file already exists at: {}",
                config::get_config_path().display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to create config file: {e}");
            ExitCode::FAILURE
        }
    }
}

fn check_catalog(path: &Path) -> ExitCode {
    match Catalog::load(path) {
        Ok(catalog) => {
            println!("{}", cli::check_report(path, &catalog));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    }
}

fn run_tui(app: App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    info!(
        "event=session_start projects={} tags={}",
        app.catalog().len(),
        app.vocabulary().len()
    );

    loop {
        terminal.draw(|f| ui::render_app(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(16))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handlers::handle_key(&mut app, key);
        }

        if app.should_quit {
            break;
        }
    }

    info!("event=session_end");
    Ok(())
}
