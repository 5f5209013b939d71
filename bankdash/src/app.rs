use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;

use crate::app_core::AppCore;
use crate::background::{data_loader::DataLoader, BackgroundDispatcher};
use crate::config::Settings;
use crate::input::KeyEvent;
use crate::logging::init_logging;
use bank_api::Client;

type Tui = Terminal<CrosstermBackend<std::io::Stdout>>;

pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub async fn run(&self) -> Result<()> {
        let log_path = init_logging()?;

        tracing::info!(
            "bankdash starting (group {}, {}), logging to {}",
            self.settings.group_id,
            self.settings.base_url,
            log_path.display()
        );

        let mut terminal = self.init()?;
        let result = self.event_loop(&mut terminal).await;

        tracing::info!("Cleaning up application");
        self.exit(terminal)?;

        result
    }

    async fn event_loop(&self, terminal: &mut Tui) -> Result<()> {
        let (data_tx, mut data_rx) = tokio::sync::mpsc::unbounded_channel();

        let api_client = Arc::new(Client::new(&self.settings.base_url));
        let data_loader = DataLoader::new(api_client, data_tx);
        let mut core = AppCore::new(
            self.settings.group_id(),
            BackgroundDispatcher::new(data_loader),
        );

        let mut event_stream = EventStream::new();

        core.start();

        tracing::info!("Entering main event loop");

        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            terminal.draw(|f| {
                crate::ui::render_app(f, core.state());
            })?;

            tokio::select! {
                _ = interval.tick() => {
                    core.tick();
                }
                Some(Ok(event)) = event_stream.next() => {
                    if let Event::Key(key) = event {
                        if matches!(key.kind, KeyEventKind::Press) {
                            tracing::debug!("Key press: {:?}", key);
                            if let Some(key) = KeyEvent::from_crossterm(key) {
                                core.handle_key(key);
                            }
                        }
                    }
                }
                Some(data_event) = data_rx.recv() => {
                    tracing::debug!("Received data event: {:?}", data_event);
                    core.handle_data_event(data_event);
                }
            }

            if core.should_quit() {
                tracing::info!("Quit requested, exiting event loop");
                break;
            }
        }

        // Cancel all in-flight requests
        core.handler_mut().cancel_all();

        Ok(())
    }

    fn init(&self) -> Result<Tui, std::io::Error> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    fn exit(&self, mut terminal: Tui) -> Result<(), std::io::Error> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }
}
