//! The window seam: events in, images and circles out.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use gloam_field::Field;
use gloam_math::{Vec2, Vec3};

use crate::Result;

/// Keyboard keys and mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    /// The window's close button.
    Exit,
    Space,
    Shift,
    Return,
    Left,
    Right,
    Up,
    Down,
    Lmb,
    Mmb,
    Rmb,
}

impl Key {
    /// Mouse buttons in `[left, middle, right]` order.
    pub const MOUSE: [Key; 3] = [Key::Lmb, Key::Mmb, Key::Rmb];

    pub fn is_mouse(&self) -> bool {
        matches!(self, Key::Lmb | Key::Mmb | Key::Rmb)
    }
}

/// One window event. Positions are in `[0, 1]^2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Press { key: Key, pos: Vec2 },
    Release { key: Key, pos: Vec2 },
    Motion { pos: Vec2 },
}

impl Event {
    pub fn pos(&self) -> Vec2 {
        match *self {
            Event::Press { pos, .. } | Event::Release { pos, .. } | Event::Motion { pos } => pos,
        }
    }
}

/// A borrowed image to display.
#[derive(Debug, Clone, Copy)]
pub enum ImageRef<'a> {
    Gray(&'a Field<f64>),
    Rgb(&'a Field<Vec3>),
}

impl ImageRef<'_> {
    pub fn shape(&self) -> [usize; 2] {
        match self {
            ImageRef::Gray(f) => f.shape(),
            ImageRef::Rgb(f) => f.shape(),
        }
    }

    pub fn to_image(&self) -> Image {
        match self {
            ImageRef::Gray(f) => Image::Gray((*f).clone()),
            ImageRef::Rgb(f) => Image::Rgb((*f).clone()),
        }
    }
}

impl<'a> From<&'a Field<f64>> for ImageRef<'a> {
    fn from(f: &'a Field<f64>) -> Self {
        ImageRef::Gray(f)
    }
}

impl<'a> From<&'a Field<Vec3>> for ImageRef<'a> {
    fn from(f: &'a Field<Vec3>) -> Self {
        ImageRef::Rgb(f)
    }
}

/// An owned image.
#[derive(Debug, Clone, PartialEq)]
pub enum Image {
    Gray(Field<f64>),
    Rgb(Field<Vec3>),
}

impl Image {
    pub fn shape(&self) -> [usize; 2] {
        match self {
            Image::Gray(f) => f.shape(),
            Image::Rgb(f) => f.shape(),
        }
    }
}

/// A window the animation loop drives.
pub trait Surface {
    /// Events since the last call.
    fn poll_events(&mut self) -> Vec<Event>;

    fn is_pressed(&self, key: Key) -> bool;

    /// Every key and button currently held.
    fn pressed_keys(&self) -> Vec<Key>;

    /// Cursor position in `[0, 1]^2`.
    fn cursor_pos(&self) -> Vec2;

    fn set_title(&mut self, title: &str);

    /// Fill the frame with `0xRRGGBB` before anything is drawn.
    fn clear(&mut self, color: u32);

    fn set_image(&mut self, image: ImageRef<'_>);

    fn circles(&mut self, pos: &[Vec2], color: u32, radius: f64);

    /// Present the frame, optionally saving it to `screenshot`.
    fn show(&mut self, screenshot: Option<&Path>) -> Result<()>;
}

/// What a [`HeadlessSurface`] saw for one shown frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    /// Clear colour, `0xRRGGBB`.
    pub background: u32,
    pub image: Option<Image>,
    pub circles: Vec<Vec2>,
    pub circle_color: u32,
    pub circle_radius: f64,
    pub screenshot: Option<PathBuf>,
}

/// Off-screen surface for tests and batch runs.
///
/// Events are scripted per frame with [`push_frame`](Self::push_frame);
/// each [`poll_events`](Surface::poll_events) call consumes one frame's
/// worth. Press and release events update the held-key state as they are
/// polled. Shown frames are kept in memory.
#[derive(Debug)]
pub struct HeadlessSurface {
    script: VecDeque<Vec<Event>>,
    held: Vec<Key>,
    cursor: Vec2,
    title: String,
    background: u32,
    image: Option<Image>,
    circles: Vec<Vec2>,
    circle_color: u32,
    circle_radius: f64,
    frames: Vec<RecordedFrame>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            held: Vec::new(),
            cursor: Vec2::zeros(),
            title: String::new(),
            background: 0x000000,
            image: None,
            circles: Vec::new(),
            circle_color: 0xffffff,
            circle_radius: 1.0,
            frames: Vec::new(),
        }
    }

    /// Queue the events delivered on the next unscripted frame.
    pub fn push_frame(&mut self, events: impl IntoIterator<Item = Event>) -> &mut Self {
        self.script.push_back(events.into_iter().collect());
        self
    }

    /// Mark `key` as held from the start.
    pub fn hold(&mut self, key: Key) -> &mut Self {
        if !self.held.contains(&key) {
            self.held.push(key);
        }
        self
    }

    pub fn release(&mut self, key: Key) -> &mut Self {
        self.held.retain(|&k| k != key);
        self
    }

    pub fn set_cursor(&mut self, pos: Vec2) -> &mut Self {
        self.cursor = pos;
        self
    }

    /// Window title last set by the loop.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for HeadlessSurface {
    fn poll_events(&mut self) -> Vec<Event> {
        let events = self.script.pop_front().unwrap_or_default();
        for e in &events {
            self.cursor = e.pos();
            match *e {
                Event::Press { key, .. } => {
                    self.hold(key);
                }
                Event::Release { key, .. } => {
                    self.release(key);
                }
                Event::Motion { .. } => {}
            }
        }
        events
    }

    fn is_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn pressed_keys(&self) -> Vec<Key> {
        self.held.clone()
    }

    fn cursor_pos(&self) -> Vec2 {
        self.cursor
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn clear(&mut self, color: u32) {
        self.background = color;
        self.image = None;
        self.circles.clear();
    }

    fn set_image(&mut self, image: ImageRef<'_>) {
        self.image = Some(image.to_image());
    }

    fn circles(&mut self, pos: &[Vec2], color: u32, radius: f64) {
        self.circles = pos.to_vec();
        self.circle_color = color;
        self.circle_radius = radius;
    }

    fn show(&mut self, screenshot: Option<&Path>) -> Result<()> {
        self.frames.push(RecordedFrame {
            background: self.background,
            image: self.image.take(),
            circles: std::mem::take(&mut self.circles),
            circle_color: self.circle_color,
            circle_radius: self.circle_radius,
            screenshot: screenshot.map(Path::to_path_buf),
        });
        Ok(())
    }
}
