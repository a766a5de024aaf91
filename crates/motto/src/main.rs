mod logging;

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use motto_config::Config;
use motto_core::{ColorTheme, TARGET_ID, Timing};
use motto_typewriter::{Animator, Page, TextElement};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Page headline shown above the motto.
const HEADLINE: &str = "Cleanify";

/// Cursor drawn after the typed text.
const CURSOR: &str = "▌";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init();

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("failed to load config, using defaults: {e}");
        Config::default()
    });

    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Current color theme.
    color_theme: ColorTheme,
    /// Draw a cursor after the motto.
    show_cursor: bool,
    /// The element the animator writes into, if the page has one.
    moto: Option<TextElement>,
    /// Typewriter driving the motto element.
    animator: Option<Animator>,
}

impl App {
    /// Construct a new instance of [`App`], starting the typewriter.
    pub fn new(config: &Config) -> Self {
        let page = Page::new().with_element(TARGET_ID);
        Self::with_page(&page, config, Timing::default())
    }

    /// Construct an [`App`] around an existing page.
    fn with_page(page: &Page, config: &Config, timing: Timing) -> Self {
        let animator = Animator::attach(page, config.phrase_list(), timing);
        Self {
            running: false,
            color_theme: config.color_theme,
            show_cursor: config.show_cursor,
            moto: page.element(TARGET_ID),
            animator,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Current motto text.
    fn moto_text(&self) -> String {
        self.moto.as_ref().map(TextElement::text).unwrap_or_default()
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let color = self.color_theme.color();
        let area = frame.area();

        // Create vertical layout for centering
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Top padding
            Constraint::Length(1), // Headline
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Motto
            Constraint::Fill(1),   // Bottom padding
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let headline = Paragraph::new(HEADLINE.bold().fg(color)).alignment(Alignment::Center);
        frame.render_widget(headline, chunks[1]);

        let mut spans = vec![Span::styled(self.moto_text(), Style::new().fg(color))];
        if self.show_cursor {
            spans.push(Span::styled(CURSOR, Style::new().fg(color)));
        }
        let motto = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(motto, chunks[3]);

        let help = Line::from(vec![
            "q".bold().fg(color),
            " quit  ".dark_gray(),
            "c".bold().fg(color),
            " cycle color".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[5]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so typed characters appear promptly.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        // Poll at the deleting interval so no step is drawn late
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            _ => {}
        }
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
    }

    /// Stop the typewriter and end the main loop.
    fn quit(&mut self) {
        if let Some(animator) = self.animator.as_mut() {
            animator.stop();
        }
        self.running = false;
    }
}
