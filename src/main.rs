//! tubetui - a video sharing front end for the terminal
//!
//! This is the main entry point for the tubetui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod model;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::model::SampleData;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::Event;
use env_logger::{Builder, Env, Target};
use log::{error, info};
use std::fs::{self, OpenOptions};
use std::path::Path;

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_default();
    init_logging(&config);

    let data = load_sample_data(&config)?;
    info!(
        "loaded {} videos, {} comments",
        data.catalog.videos().len(),
        data.comments.len()
    );

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(config.tick_rate());
    tui.enter()?;

    // Create app state
    let mut app = App::new(&config, data);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        error!("fatal: {:?}", err);
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("exiting");
    Ok(())
}

/// Send log output to `~/.tubetui/tubetui.log`; the terminal belongs to the UI.
/// Without a writable log file logging stays off.
fn init_logging(config: &Config) {
    let Some(path) = Config::log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let _ = Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
}

fn load_sample_data(config: &Config) -> Result<SampleData> {
    match &config.catalog_path {
        Some(path) => SampleData::from_path(Path::new(path))
            .with_context(|| format!("failed to load catalog from {}", path)),
        None => SampleData::builtin(),
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                error!("draw error: {}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Action might produce a follow-up action
            let mut current_action = action;
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        } else {
            // No event - send a tick for time-based updates
            let mut current_action = Some(Action::Tick);
            while let Some(a) = current_action {
                current_action = app.update(a)?;
            }
        }
    }

    Ok(())
}
