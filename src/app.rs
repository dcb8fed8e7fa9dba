use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tokio::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::events::EventHandler;
use crate::remote::RemoteClient;
use crate::tea::Program;
use crate::theme::Theme;
use crate::ui;

/// Terminal front end: owns the message loop and draws the model each tick
pub struct App {
    program: Program,
    event_handler: EventHandler,
    theme: Theme,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = RemoteClient::from_config(config)?;

        Ok(Self {
            program: Program::new(client, config.debounce()),
            event_handler: EventHandler::new(),
            theme: Theme::from_name(config.theme),
        })
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub async fn run(&mut self) -> Result<()> {
        // Check if we're running in a proper terminal
        if !io::stdout().is_tty() {
            return Err(anyhow::anyhow!(
                "Larder requires a terminal (TTY). Use the list/add/remove subcommands for scripted use."
            ));
        }

        // Setup terminal
        enable_raw_mode().map_err(|e| {
            anyhow::anyhow!("Failed to enable raw mode: {}. Make sure you're running in a proper terminal.", e)
        })?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| anyhow::anyhow!("Failed to setup terminal: {}", e))?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal =
            Terminal::new(backend).map_err(|e| anyhow::anyhow!("Failed to create terminal: {}", e))?;

        // Run the main loop
        let result = self.run_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_millis(50);

        loop {
            // Apply settled requests and fired debounce timers
            self.program.process_pending();

            let model = self.program.model();
            let theme = &self.theme;
            terminal.draw(|f| ui::render(f, model, theme))?;

            if self.program.model().should_quit {
                tracing::info!("Quit requested");
                break;
            }

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(message) =
                        self.event_handler.handle_key_event(key, self.program.model())
                    {
                        self.program.dispatch(message);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
                // Let spawned request tasks make progress between polls
                tokio::task::yield_now().await;
            }
        }

        Ok(())
    }
}
