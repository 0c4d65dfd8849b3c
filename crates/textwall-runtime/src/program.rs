#![forbid(unsafe_code)]

//! The program loop: update → view → diff → present.
//!
//! # Concurrency model
//!
//! A single render thread (the caller of [`Program::run`]) owns both
//! buffers and the presenter. Two detached producer threads feed it over
//! one `mpsc` channel:
//!
//! - the **input thread** blocks on `crossterm::event::read()` and sends
//!   each decodable event;
//! - the **tick thread** sends [`Event::Tick`] every [`TICK_INTERVAL`].
//!
//! Every clear → compose → present sequence therefore executes serialized
//! on one thread; exclusive access to the terminal surface is guaranteed
//! by ownership rather than a lock. The producer threads carry no
//! cancellation signal: they die with the process when the loop exits and
//! the channel disconnects.

use std::io::{self, Stdout};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use textwall_core::event::Event;
use textwall_core::session::TerminalSession;
use textwall_render::buffer::Buffer;
use textwall_render::diff::BufferDiff;
use textwall_render::presenter::Presenter;

/// Animation cadence: one tick every 50ms (20Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Command returned from [`Model::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cmd {
    /// Keep running.
    #[default]
    None,
    /// Exit the program loop.
    Quit,
}

/// A frame under construction: the back buffer plus a cursor request.
pub struct Frame<'a> {
    buffer: &'a mut Buffer,
    cursor: Option<(u16, u16)>,
}

impl<'a> Frame<'a> {
    fn new(buffer: &'a mut Buffer) -> Self {
        Self {
            buffer,
            cursor: None,
        }
    }

    /// The back buffer to draw into.
    pub fn buffer(&mut self) -> &mut Buffer {
        self.buffer
    }

    /// Frame width in columns.
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Frame height in rows.
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Request a visible cursor at the given position this frame.
    ///
    /// Without a request the cursor stays hidden.
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Some((x, y));
    }
}

/// Application model driven by the program loop.
pub trait Model {
    /// Process one event, returning whether to keep running.
    fn update(&mut self, event: Event) -> Cmd;

    /// Render the current state into the frame.
    ///
    /// Must be a pure function of the model; the loop may call it at any
    /// cadence.
    fn view(&self, frame: &mut Frame<'_>);
}

/// The program: terminal session, buffer pair, presenter, and model.
pub struct Program<M: Model> {
    model: M,
    session: TerminalSession,
    front: Buffer,
    back: Buffer,
    presenter: Presenter<Stdout>,
    cursor_visible: bool,
}

impl<M: Model> Program<M> {
    /// Set up the terminal and size the buffers.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal session cannot be established or
    /// its size cannot be queried.
    pub fn new(model: M) -> io::Result<Self> {
        let session = TerminalSession::new()?;
        let (width, height) = session.size()?;
        tracing::info!(width, height, "program initialized");

        Ok(Self {
            model,
            session,
            front: Buffer::new(width, height),
            back: Buffer::new(width, height),
            presenter: Presenter::new(io::stdout()),
            cursor_visible: false,
        })
    }

    /// Run the program loop until the model returns [`Cmd::Quit`].
    ///
    /// # Errors
    ///
    /// Returns an error if presenting a frame fails.
    pub fn run(&mut self) -> io::Result<()> {
        let (tx, rx) = mpsc::channel::<Event>();

        // Input thread: blocking reads, decoded at the boundary.
        let input_tx = tx.clone();
        thread::spawn(move || {
            loop {
                match crossterm::event::read() {
                    Ok(raw) => {
                        if let Some(event) = Event::from_crossterm(raw)
                            && input_tx.send(event).is_err()
                        {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "input read failed, stopping input thread");
                        break;
                    }
                }
            }
        });

        // Tick thread: animation cadence.
        let tick_tx = tx;
        thread::spawn(move || {
            loop {
                thread::sleep(TICK_INTERVAL);
                if tick_tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        });

        self.presenter.hide_cursor()?;
        self.presenter.clear_screen()?;

        // Seed the model with the current dimensions before the first frame.
        let (width, height) = self.session.size()?;
        let mut pending = Some(Event::Resize { width, height });

        loop {
            let event = match pending.take() {
                Some(event) => event,
                None => match rx.recv() {
                    Ok(event) => event,
                    // Both producers gone; nothing can ever arrive again.
                    Err(mpsc::RecvError) => break,
                },
            };

            if let Event::Resize { width, height } = event {
                tracing::debug!(width, height, "terminal resized");
                self.front.resize(width, height);
                self.back.resize(width, height);
                self.presenter.reset();
                self.presenter.clear_screen()?;
            }

            if self.model.update(event) == Cmd::Quit {
                tracing::info!("quit requested");
                break;
            }

            self.render_frame()?;
        }

        Ok(())
    }

    /// Compose and present one frame.
    fn render_frame(&mut self) -> io::Result<()> {
        self.back.clear();
        let mut frame = Frame::new(&mut self.back);
        self.model.view(&mut frame);
        let cursor = frame.cursor;

        let diff = BufferDiff::compute(&self.front, &self.back);
        self.presenter.present(&self.back, &diff)?;
        std::mem::swap(&mut self.front, &mut self.back);

        match cursor {
            Some((x, y)) => {
                self.presenter.position_cursor(x, y)?;
                if !self.cursor_visible {
                    self.presenter.show_cursor()?;
                    self.cursor_visible = true;
                }
            }
            None => {
                if self.cursor_visible {
                    self.presenter.hide_cursor()?;
                    self.cursor_visible = false;
                }
            }
        }

        Ok(())
    }

    /// The terminal session (for size queries).
    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    /// The model, for inspection after the loop exits.
    pub fn model(&self) -> &M {
        &self.model
    }
}
