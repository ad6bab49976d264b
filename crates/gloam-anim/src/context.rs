//! Loop state handed to every lifecycle hook.

use std::time::Instant;

use gloam_math::Vec2;

use crate::{AnimError, Key, Result, Surface};

/// Shadertoy-style uniforms, refreshed once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    /// Seconds since the context was created.
    pub i_time: f64,
    /// Frame number, starting at 0.
    pub i_frame: u64,
    /// Cursor position in `[0, 1]^2`.
    pub i_mouse: Vec2,
    /// `[left, middle, right]` button state.
    pub i_mouse_button: [bool; 3],
    /// ASWD / arrow-key direction, each axis in `{-1, 0, 1}`.
    pub i_key_direction: Vec2,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            i_time: 0.0,
            i_frame: 0,
            i_mouse: Vec2::zeros(),
            i_mouse_button: [false; 3],
            i_key_direction: Vec2::zeros(),
        }
    }
}

/// `(d | Right) - (a | Left)`, `(w | Up) - (s | Down)`.
pub fn key_direction(pressed: impl Fn(Key) -> bool) -> Vec2 {
    let axis = |pos: [Key; 2], neg: [Key; 2]| {
        let p = pos.iter().any(|&k| pressed(k)) as i32;
        let n = neg.iter().any(|&k| pressed(k)) as i32;
        (p - n) as f64
    };
    Vec2::new(
        axis([Key::Char('d'), Key::Right], [Key::Char('a'), Key::Left]),
        axis([Key::Char('w'), Key::Up], [Key::Char('s'), Key::Down]),
    )
}

/// Running flag, frame counter, clock, cursor and optional [`Inputs`].
#[derive(Debug, Clone)]
pub struct Context {
    running: bool,
    frame: u64,
    start: Instant,
    resolution: [usize; 2],
    mouse: Vec2,
    pressed: Vec<Key>,
    inputs: Option<Inputs>,
}

impl Context {
    pub fn new(resolution: [usize; 2]) -> Self {
        Self {
            running: true,
            frame: 0,
            start: Instant::now(),
            resolution,
            mouse: Vec2::zeros(),
            pressed: Vec::new(),
            inputs: None,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    /// Leave the loop after the current frame.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub(crate) fn next_frame(&mut self) {
        self.frame += 1;
    }

    /// Seconds since the context was created.
    pub fn time(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    pub fn resolution(&self) -> [usize; 2] {
        self.resolution
    }

    pub fn set_resolution(&mut self, resolution: [usize; 2]) {
        self.resolution = resolution;
    }

    /// Cursor position in `[0, 1]^2` as of the last event poll.
    pub fn mouse(&self) -> Vec2 {
        self.mouse
    }

    pub(crate) fn set_mouse(&mut self, pos: Vec2) {
        self.mouse = pos;
    }

    /// Keys and buttons held as of the last event poll.
    pub fn pressed_keys(&self) -> &[Key] {
        &self.pressed
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub(crate) fn set_pressed(&mut self, keys: Vec<Key>) {
        self.pressed = keys;
    }

    /// Enable the shadertoy inputs.
    pub fn define_input(&mut self) {
        if self.inputs.is_none() {
            self.inputs = Some(Inputs::default());
        }
    }

    pub fn has_input(&self) -> bool {
        self.inputs.is_some()
    }

    /// # Errors
    /// [`AnimError::InputsNotDefined`] before [`define_input`](Self::define_input).
    pub fn inputs(&self) -> Result<&Inputs> {
        self.inputs.as_ref().ok_or(AnimError::InputsNotDefined)
    }

    pub fn i_time(&self) -> Result<f64> {
        Ok(self.inputs()?.i_time)
    }

    pub fn i_frame(&self) -> Result<u64> {
        Ok(self.inputs()?.i_frame)
    }

    pub fn i_mouse(&self) -> Result<Vec2> {
        Ok(self.inputs()?.i_mouse)
    }

    pub fn i_mouse_button(&self) -> Result<[bool; 3]> {
        Ok(self.inputs()?.i_mouse_button)
    }

    pub fn i_key_direction(&self) -> Result<Vec2> {
        Ok(self.inputs()?.i_key_direction)
    }

    /// Window resolution; available with or without inputs.
    pub fn i_resolution(&self) -> [usize; 2] {
        self.resolution
    }

    /// Refresh the inputs from `surface`; no-op unless defined.
    pub fn update_inputs(&mut self, surface: &impl Surface) {
        let time = self.time();
        let frame = self.frame;
        let mouse = self.mouse;
        if let Some(inputs) = self.inputs.as_mut() {
            inputs.i_time = time;
            inputs.i_frame = frame;
            inputs.i_mouse = mouse;
            inputs.i_mouse_button = Key::MOUSE.map(|b| surface.is_pressed(b));
            inputs.i_key_direction = key_direction(|k| surface.is_pressed(k));
        }
    }
}
