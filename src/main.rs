//! A photo feed screen for the terminal: greeting header plus a row of
//! photo-group tabs with a spring-animated indicator.
//!
//! Switch groups with ←/→ (or h/l, Tab), digits, or a mouse click.
//! Run with `--write-config` to save the effective settings and exit.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;
use crate::ui::{feed_header::FeedHeader, layout::AppLayout, photos_tab::PhotosTab, theme::Theme};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Photo feed with animated group tabs")]
struct Cli {
    /// Name shown in the header greeting.
    #[arg(long)]
    name: Option<String>,

    /// Comma-separated photo groups, in tab order.
    #[arg(long, value_delimiter = ',')]
    groups: Vec<String>,

    /// Group selected at startup.
    #[arg(long)]
    selected: Option<String>,

    /// Animation frame interval in milliseconds.
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Save the effective configuration and exit.
    #[arg(long)]
    write_config: bool,
}

impl Cli {
    fn apply(self, config: &mut AppConfig) {
        if let Some(name) = self.name {
            config.user_name = name;
        }
        let groups: Vec<String> = self
            .groups
            .into_iter()
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty())
            .collect();
        if !groups.is_empty() {
            config.groups = groups;
        }
        if let Some(selected) = self.selected {
            config.selected_group = selected;
        }
        if let Some(ms) = self.tick_ms {
            config.tick_ms = ms.clamp(8, 200);
        }
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let write_config = cli.write_config;
    let mut config = AppConfig::load();
    cli.apply(&mut config);

    if write_config {
        let path = config.save()?;
        println!("{}", path.display());
        return Ok(());
    }

    let frame_interval = Duration::from_millis(config.tick_ms);
    let mut state = AppState::new(config);
    tracing::info!(
        groups = ?state.groups,
        selected = %state.selected_group,
        "starting photo feed"
    );

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(frame_interval);
    let mut frames = tokio::time::interval(frame_interval);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last_frame = Instant::now();

    // ── event loop ────────────────────────────────────────────
    loop {
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());

            frame.render_widget(FeedHeader::new(&state.user_name), layout.header_area);
            frame.render_stateful_widget(
                PhotosTab::new(&state.groups, &state.selected_group),
                layout.tabs_area,
                &mut state.tab_state,
            );

            let body = Paragraph::new(format!("Photos in \"{}\"", state.selected_group))
                .block(Block::default().borders(Borders::TOP).border_style(Theme::h6_style()))
                .style(Style::default().bg(Theme::surface()).fg(Theme::on_surface()));
            frame.render_widget(body, layout.body_area);

            let hint = state.config.status_bar_hint();
            let status_text = state.status_message.as_deref().unwrap_or(&hint);
            let status = Paragraph::new(status_text).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);
        })?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                    AppEvent::Resize(_, _) | AppEvent::Tick => {}
                }
            }

            _ = frames.tick() => {
                let now = Instant::now();
                state.tab_state.tick(now - last_frame);
                last_frame = now;
            }
        }

        if !state.tab_state.is_animating() {
            // Keep the first step after an idle period from covering it.
            last_frame = Instant::now();
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    drop(events);
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
