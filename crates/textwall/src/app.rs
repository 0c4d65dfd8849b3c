#![forbid(unsafe_code)]

//! The application model: editor, layout, and rain glued together.
//!
//! [`App`] implements [`Model`]: key events feed the editor state
//! machine, ticks advance the rain, and resizes re-clamp the layout.
//! File actions run here so the editor stays a pure state machine.

use std::env;

use textwall_core::event::Event;
use textwall_runtime::{Cmd, Frame, Model};

use crate::chrome;
use crate::cli::SizeClass;
use crate::editor::{Action, EditorState};
use crate::files;
use crate::layout::Layout;
use crate::rain::RainField;

pub struct App {
    editor: EditorState,
    layout: Layout,
    rain: RainField,
    size_class: SizeClass,
    sized: bool,
    cols: u16,
    rows: u16,
    cwd: String,
    home: String,
}

impl App {
    #[must_use]
    pub fn new(size_class: SizeClass) -> Self {
        Self::with_rain(size_class, RainField::from_clock())
    }

    /// Like [`App::new`] but with a caller-controlled rain field, so
    /// tests get reproducible frames.
    #[must_use]
    pub fn with_rain(size_class: SizeClass, rain: RainField) -> Self {
        let cwd = env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let home = env::var("HOME").unwrap_or_default();
        Self {
            editor: EditorState::new(),
            layout: Layout::new(1),
            rain,
            size_class,
            sized: false,
            cols: 0,
            rows: 0,
            cwd,
            home,
        }
    }

    #[must_use]
    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn rain(&self) -> &RainField {
        &self.rain
    }

    fn run_action(&mut self, action: Action) -> Cmd {
        match action {
            Action::None => {}
            Action::Quit => return Cmd::Quit,
            Action::OpenFile(name) => self.open_file(&name),
            Action::WriteFile(name) => self.write_file(&name),
            Action::ShrinkMargin => self.layout.shrink_pad(),
            Action::GrowMargin => self.layout.grow_pad(self.cols),
        }
        Cmd::None
    }

    fn open_file(&mut self, name: &str) {
        match files::open_file(name) {
            Ok(text) => {
                self.editor.set_text(text);
                self.editor.set_status(format!("opened {name}"));
            }
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "open failed");
                // One message for every failure; the cause goes to the log.
                self.editor.set_status(format!("could not open {name}"));
            }
        }
    }

    fn write_file(&mut self, name: &str) {
        match files::write_file(name, self.editor.text()) {
            Ok(()) => self.editor.set_status(format!("wrote {name}")),
            Err(e) => {
                tracing::warn!(file = %name, error = %e, "write failed");
                self.editor.set_status(format!("could not write {name}"));
            }
        }
    }
}

impl Model for App {
    fn update(&mut self, event: Event) -> Cmd {
        match event {
            Event::Resize { width, height } => {
                self.cols = width;
                self.rows = height;
                // The size class resolves against the first known width;
                // later resizes only re-clamp.
                if !self.sized {
                    self.layout = Layout::new(self.size_class.initial_pad(width));
                    self.sized = true;
                }
                self.layout.clamp_to(width);
                Cmd::None
            }
            Event::Tick => {
                let bands = self.layout.margin_bands(self.cols);
                self.rain.advance(self.rows, bands);
                Cmd::None
            }
            Event::Key(key) => {
                let action = self.editor.apply(key);
                self.run_action(action)
            }
        }
    }

    fn view(&self, frame: &mut Frame<'_>) {
        let cursor = chrome::compose(
            frame.buffer(),
            &self.layout,
            &self.editor,
            &self.rain,
            &self.cwd,
            &self.home,
        );
        if let Some((x, y)) = cursor {
            frame.set_cursor(x, y);
        }
    }
}
