use std::io::stdout;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use qaia::app::App;
use qaia::bridge::InboundMessage;
use qaia::cli::{Cli, Command, load_answers, load_page};
use qaia::config::{Config, load_config, load_config_from_path};
use qaia::content::ContentCore;
use qaia::hover::InstantScheduler;
use qaia::matcher::MatchEngine;
use qaia::qa::QaSet;

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(&cli.command);

    match cli.command {
        Command::View {
            page,
            answers,
            config,
            nested,
        } => {
            let config = resolve_config(config.as_deref())?;
            let doc = load_page(&page, nested)?;
            let mut app = App::new(doc, &config);
            if let Some(path) = answers {
                app.load_answers(load_answers(&path)?);
            }
            view(app)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Extract { page, nested } => {
            let mut doc = load_page(&page, nested)?;
            let mut core = ContentCore::install(&Config::default(), &doc, InstantScheduler::new());
            if let Some(response) = core.handle_message(InboundMessage::Extract, &mut doc) {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Match {
            answers,
            text,
            config,
        } => {
            let config = resolve_config(config.as_deref())?;
            let qa_set = QaSet::from(load_answers(&answers)?);
            let engine = MatchEngine::new(config.matcher);
            match engine.pick_best_answer(&text, &qa_set) {
                Some(qa) => {
                    println!("{}", qa.answer);
                    Ok(ExitCode::SUCCESS)
                }
                None => {
                    eprintln!("No match");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

/// The viewer owns the terminal, so it only logs when RUST_LOG asks for it
fn init_logging(command: &Command) {
    if matches!(command, Command::View { .. }) && std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn resolve_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Ok(load_config_from_path(path)?),
        None => Ok(load_config()),
    }
}

fn view(app: App) -> Result<()> {
    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)?;

    let result = run(terminal, app);

    execute!(stdout(), DisableMouseCapture, DisableFocusChange)?;
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(app.poll_timeout())? {
            app.handle_event(event::read()?);
        }
        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
