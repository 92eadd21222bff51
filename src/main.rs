mod app;
mod config;
mod error;
mod event;
mod github;
mod logging;
mod notify;
mod persist;
mod policy;
mod scheduler;
mod store;
#[cfg(test)]
mod test_utils;
mod ui;

use app::{App, Command};
use clap::Parser;
use config::{Config, Overrides};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use event::AppEvent;
use futures::StreamExt;
use github::client::{unix_now, UsersClient};
use persist::JsonFileSlot;
use scheduler::{countdown::Countdown, debounce::Debouncer};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use store::{favourites::FavouritesStore, Store};
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(name = "octoscout", about = "Search GitHub users and keep a list of favourites")]
struct Cli {
    #[arg(long, short, help = "Search for this query on startup")]
    query: Option<String>,
    #[arg(long, help = "Path to the favourites file")]
    favourites: Option<PathBuf>,
    #[arg(long, help = "Path to the log file")]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(Overrides {
        favourites_path: cli.favourites,
        log_file: cli.log_file,
    });
    logging::initialize(&config.log_file, config.log_level());
    log::info!("starting against {}", config.api_base_url);

    let client = match UsersClient::new(&config.api_base_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let slot = JsonFileSlot::new(&config.favourites_path);
    log::info!("favourites stored at {}", slot.path().display());
    let favourites = FavouritesStore::load(Box::new(slot));
    let mut app = App::new(Store::new(config.page_size, favourites));

    // Install panic hook before entering raw mode so terminal is restored on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();
    let mut debouncer = Debouncer::new(Duration::from_millis(config.debounce_ms));
    let mut countdown = Countdown::default();

    let input_tx = tx.clone();
    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
                Event::Resize(_, _) => Some(AppEvent::Resize),
                _ => None,
            };
            if let Some(e) = app_event {
                if input_tx.send(e).is_err() {
                    break;
                }
            }
        }
    });

    let initial = app.start(cli.query, unix_now());
    run_commands(initial, &client, &mut debouncer, &tx);

    loop {
        let now = unix_now();
        app.prune_notifications(Instant::now());
        terminal.draw(|f| app.render(f, now))?;
        let commands = app.after_render(now);
        run_commands(commands, &client, &mut debouncer, &tx);
        countdown.sync(app.cooldown_active(now), &tx);

        // Wake up periodically while a toast is showing so it can expire.
        let next = if app.has_notifications() {
            match tokio::time::timeout(Duration::from_secs(1), rx.recv()).await {
                Ok(next) => next,
                Err(_) => continue,
            }
        } else {
            rx.recv().await
        };
        let first = match next {
            Some(e) => e,
            None => break,
        };

        let commands = app.handle_event(first, unix_now());
        run_commands(commands, &client, &mut debouncer, &tx);
        while let Ok(pending) = rx.try_recv() {
            let commands = app.handle_event(pending, unix_now());
            run_commands(commands, &client, &mut debouncer, &tx);
        }

        if app.should_quit {
            break;
        }
    }

    debouncer.cancel();
    countdown.stop();
    input_task.abort();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("bye");
    Ok(())
}

fn run_commands(
    commands: Vec<Command>,
    client: &UsersClient,
    debouncer: &mut Debouncer,
    tx: &mpsc::UnboundedSender<AppEvent>,
) {
    for command in commands {
        match command {
            Command::ScheduleSearch(query) => debouncer.schedule(query, tx),
            Command::CancelScheduledSearch => debouncer.cancel(),
            Command::Search(request) => {
                let client = client.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = client
                        .search_users(&request.query, request.page, request.page_size)
                        .await;
                    let _ = tx.send(AppEvent::SearchFinished { request, result });
                });
            }
            Command::FetchProfile(request) => {
                let client = client.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    let result = client.get_user(&request.handle).await;
                    let _ = tx.send(AppEvent::ProfileFinished { request, result });
                });
            }
        }
    }
}
