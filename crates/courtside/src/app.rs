use std::time::{Duration, Instant};

use courtside_background::{Background, Surface, TerminalSurface};
use courtside_config::Config;
use courtside_core::{Rgb, Scene};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    text::Line,
};

use crate::scheduler::{TerminalResize, TickScheduler};

/// Poll timeout while no frame is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

const PRODUCT_NAME: &str = "COURTSIDE";
const TAGLINE: &str = "The fantasy league built for AI agents";

type TerminalBackground = Background<TickScheduler, TerminalResize>;

/// Landing screen: a banner over the animated background.
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Whether changes may be written back to the config file.
    persist: bool,
    scenes: Vec<Scene>,
    area: Rect,
    /// Last rendered background frame, composited under the banner.
    canvas: Buffer,
    background: Option<TerminalBackground>,
    /// Scene the next mount starts on.
    start_scene: usize,
    /// The screen needs redrawing.
    dirty: bool,
}

impl App {
    pub fn new(config: Config, scenes: Vec<Scene>, persist: bool) -> Self {
        Self {
            running: false,
            config,
            persist,
            scenes,
            area: Rect::default(),
            canvas: Buffer::empty(Rect::default()),
            background: None,
            start_scene: 0,
            dirty: true,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.set_area(Rect::new(0, 0, size.width, size.height));
        self.mount();

        while self.running {
            self.render_due_frame();
            if self.dirty {
                terminal.draw(|frame| self.render(frame))?;
                self.dirty = false;
            }
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Replace the background with a fresh one built from the current
    /// config.
    fn mount(&mut self) {
        // The old background cancels its frame and stops observing on drop.
        self.background = None;

        let mut options = self.config.background_options();
        options.start_scene = self.start_scene;
        let viewport = self.config.cell_metrics().viewport_for(self.area);
        self.background = Some(Background::mount(
            self.scenes.clone(),
            options,
            Some(viewport),
            TickScheduler::new(self.config.terminal.fps),
            TerminalResize::default(),
        ));
        self.clear_canvas();
        self.dirty = true;
    }

    fn set_area(&mut self, area: Rect) {
        self.area = area;
        self.canvas.resize(area);
        self.clear_canvas();
    }

    fn clear_canvas(&mut self) {
        TerminalSurface::new(
            &mut self.canvas,
            self.area,
            self.config.cell_metrics(),
            self.config.terminal.backdrop,
        )
        .clear();
    }

    /// Draw the background into the canvas if its frame is due.
    fn render_due_frame(&mut self) {
        let Some(background) = self.background.as_mut() else {
            return;
        };
        let Some(timestamp_ms) = background.scheduler_mut().take_due(Instant::now()) else {
            return;
        };
        let mut surface = TerminalSurface::new(
            &mut self.canvas,
            self.area,
            self.config.cell_metrics(),
            self.config.terminal.backdrop,
        );
        background.frame(&mut surface, timestamp_ms);
        self.dirty = true;
    }

    /// Index of the scene on screen.
    fn current_scene_index(&self) -> usize {
        self.background
            .as_ref()
            .and_then(|background| background.last_phase())
            .map_or(self.start_scene, |phase| phase.current)
    }

    fn current_scene_name(&self) -> &str {
        self.scenes
            .get(self.current_scene_index())
            .map_or("", |scene| scene.name())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        if self.canvas.area == area {
            frame.buffer_mut().merge(&self.canvas);
        }

        let primary = to_color(self.config.palette.primary());
        let secondary = to_color(self.config.palette.secondary());

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Top padding
            Constraint::Length(1), // Product name
            Constraint::Length(1), // Tagline
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Scene and settings
            Constraint::Fill(1),   // Bottom padding
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let title = Line::from(vec![
            "[ ".fg(secondary),
            PRODUCT_NAME.bold().fg(primary),
            " ]".fg(secondary),
        ])
        .centered();
        frame.render_widget(title, chunks[1]);

        frame.render_widget(Line::from(TAGLINE.gray()).centered(), chunks[2]);

        let motion = if self.config.reduced_motion {
            "still"
        } else {
            self.config.speed.display_name()
        };
        let status = Line::from(vec![
            self.current_scene_name().fg(primary),
            "  ·  ".dark_gray(),
            self.config.palette.display_name().fg(secondary),
            "  ·  ".dark_gray(),
            motion.fg(secondary),
        ])
        .centered();
        frame.render_widget(status, chunks[4]);

        let help = Line::from(vec![
            "q".bold().fg(primary),
            " quit  ".dark_gray(),
            "m".bold().fg(primary),
            " motion  ".dark_gray(),
            "c".bold().fg(primary),
            " palette  ".dark_gray(),
            "s".bold().fg(primary),
            " speed  ".dark_gray(),
            "n".bold().fg(primary),
            " next scene".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[6]);
    }

    /// Waits for input until the next frame is due.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = self
            .background
            .as_ref()
            .and_then(|background| background.scheduler().time_until_due(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(width, height) => self.on_resize(width, height),
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
            (_, KeyCode::Char('m')) => {
                self.config.reduced_motion = !self.config.reduced_motion;
                self.settings_changed();
            }
            (_, KeyCode::Char('c')) => {
                self.config.palette = self.config.palette.next();
                self.settings_changed();
            }
            (_, KeyCode::Char('s')) => {
                self.config.speed = self.config.speed.next();
                self.settings_changed();
            }
            (_, KeyCode::Char('n')) => self.next_scene(),
            _ => {}
        }
    }

    fn on_resize(&mut self, width: u16, height: u16) {
        self.set_area(Rect::new(0, 0, width, height));
        self.dirty = true;

        let observing = self
            .background
            .as_ref()
            .is_some_and(|background| background.resize_source().is_observing());
        if !observing {
            // An inert background never observes; start over at the new size.
            self.mount();
            return;
        }

        let viewport = self.config.cell_metrics().viewport_for(self.area);
        if let Some(background) = self.background.as_mut() {
            background.resize(Some(viewport));
        }
    }

    /// Remount on the scene currently shown and persist the config.
    fn settings_changed(&mut self) {
        self.start_scene = self.current_scene_index();
        self.mount();
        self.save_config();
    }

    fn next_scene(&mut self) {
        if self.scenes.is_empty() {
            return;
        }
        self.start_scene = (self.current_scene_index() + 1) % self.scenes.len();
        self.mount();
    }

    fn save_config(&self) {
        if !self.persist {
            log::debug!("config file was not loaded cleanly; leaving it untouched");
            return;
        }
        match self.config.save() {
            Ok(()) => log::debug!("saved config"),
            Err(err) => log::warn!("failed to save config: {err}"),
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = Config::default();
        let scenes = config.resolve_scenes().unwrap();
        let mut app = App::new(config, scenes, false);
        app.running = true;
        app.set_area(Rect::new(0, 0, 80, 24));
        app.mount();
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app();
            press(&mut app, code);
            assert!(!app.running);
        }
        let mut app = app();
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_mount_observes_terminal() {
        let app = app();
        let background = app.background.as_ref().unwrap();
        assert!(background.resize_source().is_observing());
        assert!(background.is_animating());
        assert_eq!(background.layout().unwrap().cols, 80);
    }

    #[test]
    fn test_first_frame_draws_into_canvas() {
        let mut app = app();
        app.dirty = false;
        app.render_due_frame();
        assert!(app.dirty);
        assert_eq!(app.background.as_ref().unwrap().frames_rendered(), 1);
        let drawn = app
            .canvas
            .content()
            .iter()
            .filter(|cell| cell.symbol() != " ")
            .count();
        assert!(drawn > 0);
    }

    #[test]
    fn test_settings_keys_remount() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.config.palette, courtside_core::Palette::Ice);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.config.speed, courtside_core::AnimationSpeed::Fast);

        press(&mut app, KeyCode::Char('m'));
        assert!(app.config.reduced_motion);
        let background = app.background.as_ref().unwrap();
        assert!(background.options().reduced_motion);
        assert_eq!(background.options().palette, courtside_core::Palette::Ice);
    }

    #[test]
    fn test_next_scene_wraps() {
        let mut app = app();
        for expected in [1, 2, 3, 0] {
            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.start_scene, expected);
        }
        app.render_due_frame();
        assert_eq!(app.current_scene_name(), "basketball");
    }

    #[test]
    fn test_resize_is_forwarded() {
        let mut app = app();
        app.on_resize(40, 12);
        let layout = *app.background.as_ref().unwrap().layout().unwrap();
        assert_eq!(layout.logical, (320.0, 192.0));
        assert_eq!(app.canvas.area, Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn test_inert_background_remounts_on_resize() {
        let mut app = app();
        app.set_area(Rect::default());
        app.mount();
        assert!(!app.background.as_ref().unwrap().is_observing());

        app.on_resize(80, 24);
        assert!(app.background.as_ref().unwrap().is_observing());
    }
}
