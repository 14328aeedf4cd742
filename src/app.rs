use crate::config::Config;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::inventory::{demo_items, ItemStore};
use crate::state::State;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc;

pub type LogReceiver = mpsc::Receiver<String>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
    log_receiver: LogReceiver,
}

impl App {
    /// Start a new application according to the given configuration, showing
    /// the lines arriving on `log_receiver` in the log panel. Returns the
    /// result of the application execution.
    ///
    pub fn start(config: Config, log_receiver: LogReceiver) -> Result<()> {
        info!("Starting application...");
        let mut app = App {
            state: App::initial_state(&config),
            log_receiver,
        };
        app.start_ui()?;

        info!("Exiting application...");
        Ok(())
    }

    /// Build the starting state: demo items unless disabled, appearance and
    /// hotkeys from the configuration.
    ///
    fn initial_state(config: &Config) -> State {
        let store = if config.seed_demo_items {
            ItemStore::seeded(demo_items())
        } else {
            ItemStore::new()
        };
        debug!("Loaded {} items", store.len());
        State::new(
            store,
            config.low_stock_threshold,
            config.dark_mode,
            config.hotkeys.clone(),
        )
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored whether the
    /// loop ends through an exit request or an error.
    ///
    fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        let entered = execute!(stdout, EnterAlternateScreen);
        let result = match entered {
            Ok(()) => Terminal::new(CrosstermBackend::new(stdout))
                .map_err(anyhow::Error::from)
                .and_then(|mut terminal| self.run(&mut terminal)),
            Err(e) => Err(e.into()),
        };

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        result
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        terminal.hide_cursor()?;
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            self.drain_logs();
            terminal.draw(|frame| crate::ui::render(frame, &mut self.state))?;
            if !terminal_event_handler.handle_next(&mut self.state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        terminal.show_cursor()?;
        Ok(())
    }

    /// Move log lines captured since the last frame into the log panel.
    ///
    fn drain_logs(&mut self) {
        while let Ok(line) = self.log_receiver.try_recv() {
            self.state.add_log_entry(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::View;

    #[test]
    fn initial_state_follows_config() {
        let mut config = Config::new();
        let state = App::initial_state(&config);
        assert_eq!(state.store().len(), 5);
        assert_eq!(state.current_view(), View::AllItems);
        assert!(!state.is_dark_mode());

        config.seed_demo_items = false;
        config.dark_mode = true;
        config.low_stock_threshold = 7.5;
        let state = App::initial_state(&config);
        assert!(state.store().is_empty());
        assert!(state.is_dark_mode());
        assert_eq!(state.low_stock_threshold(), 7.5);
    }

    #[test]
    fn drained_logs_reach_state() {
        let (sender, log_receiver) = mpsc::channel();
        let mut app = App {
            state: State::default(),
            log_receiver,
        };
        sender.send("first".to_string()).unwrap();
        sender.send("second".to_string()).unwrap();
        app.drain_logs();
        assert_eq!(app.state.get_log_entries(), ["first", "second"]);
    }
}
