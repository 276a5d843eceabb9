use super::app::App;
use super::render::{hit_test, ui};
use super::types::{Action, AlertType};
use crate::catalog::RecommendationSource;
use crate::config::{save_settings, Settings};
use crate::pagination::PageSize;
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, poll, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

/// Interactive browser: header, paged listing and detail screen
pub struct Shell {
    app: App,
    source: Box<dyn RecommendationSource>,
    settings: Settings,
}

impl Shell {
    pub fn new(source: Box<dyn RecommendationSource>, page_size: PageSize, settings: Settings) -> Result<Self> {
        let list = source
            .load()
            .with_context(|| format!("Failed to load recommendations from {}", source.describe()))?;
        let app = App::new(list, page_size, settings.theme, source.describe());

        Ok(Self {
            app,
            source,
            settings,
        })
    }

    /// Main entry point - takes over the terminal until the user quits
    pub fn run(mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| ui(f, &self.app))?;

            if !poll(Duration::from_millis(250))? {
                continue;
            }

            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.app.handle_key(key),
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    if let Some(hit) = hit_test(area, &self.app, mouse.column, mouse.row) {
                        self.app.handle_click(hit);
                    }
                    Action::None
                }
                _ => Action::None,
            };

            match action {
                Action::Exit => return Ok(()),
                Action::ThemeChanged => self.persist_theme(),
                Action::Reload => self.reload(),
                Action::None => {}
            }
        }
    }

    fn persist_theme(&mut self) {
        self.settings.theme = self.app.theme;
        if let Err(e) = save_settings(&self.settings) {
            log::warn!("could not save settings: {:#}", e);
            self.app
                .alert
                .show(AlertType::Error, format!("✗ Could not save theme: {}", e));
        } else {
            self.app
                .alert
                .show(AlertType::Info, format!("Theme: {}", self.app.theme.name()));
        }
    }

    fn reload(&mut self) {
        match self.source.load() {
            Ok(list) => self.app.replace_list(list),
            Err(e) => {
                log::warn!("reload from {} failed: {}", self.source.describe(), e);
                self.app.alert.show(AlertType::Error, format!("✗ {}", e));
            }
        }
    }
}
