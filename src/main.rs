//! Snake terminal runner.

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use snake::constants::FRAME_POLL_MS;
use snake::input::map_key;
use snake::ui::draw_ui;
use snake::{GameConfig, InputResult, Session};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    seed: Option<u64>,
    config_path: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum CliAction {
    Run(CliOptions),
    Help,
    Version,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(CliAction::Run(options)) => options,
        Ok(CliAction::Help) => {
            print_help();
            return Ok(());
        }
        Ok(CliAction::Version) => {
            println!("snake {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'snake --help' for usage.");
            std::process::exit(1);
        }
    };

    // Config problems are reported before the terminal is taken over
    let config = match load_config(&options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    let mut session = match options.seed {
        Some(seed) => Session::with_seed(config, seed),
        None => Session::new(config),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run(&mut terminal, &mut session);

    // Always try to restore terminal state
    let _ = disable_raw_mode();
    let _ = terminal.backend_mut().execute(LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if result.is_ok() && session.games_played() > 0 {
        println!(
            "Games played: {}  Best score: {}",
            session.games_played(),
            session.best_score()
        );
    }
    result
}

fn print_help() {
    println!("Snake - grid snake for the terminal\n");
    println!("Usage: snake [options]\n");
    println!("Options:");
    println!("  --seed N       Use a fixed seed for food placement");
    println!("  --config PATH  Read settings from PATH instead of ~/.snake/config.json");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
}

fn parse_args(args: &[String]) -> Result<CliAction, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliAction::Help),
            "--version" | "-v" => return Ok(CliAction::Version),
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--seed requires a value".to_string())?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--config requires a path".to_string())?;
                options.config_path = Some(PathBuf::from(value));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(CliAction::Run(options))
}

fn load_config(options: &CliOptions) -> io::Result<GameConfig> {
    match &options.config_path {
        Some(path) => GameConfig::load_from(path),
        None => GameConfig::load(),
    }
}

/// Frame loop: draw, wait briefly for a key, then feed elapsed time to the session.
fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, session: &mut Session) -> io::Result<()> {
    let mut last_update = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, session))?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Ignore releases and auto-repeat
                if key.kind == KeyEventKind::Press
                    && session.handle_input(map_key(key)) == InputResult::Quit
                {
                    return Ok(());
                }
            }
        }

        // Carry sub-millisecond remainders over to the next frame
        let elapsed_ms = last_update.elapsed().as_millis() as u64;
        if elapsed_ms > 0 {
            last_update += Duration::from_millis(elapsed_ms);
            session.update(elapsed_ms);
        }
    }
}
