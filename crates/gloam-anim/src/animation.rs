//! Lifecycle hooks and the main loop that drives them.

use gloam_math::Vec2;
use tracing::{debug, info};

use crate::{AnimationConfig, Context, Event, ImageRef, Key, Result, Surface};

/// A shadertoy-style animation.
///
/// Every hook has a no-op default; implement the ones you need. The
/// computational hooks return [`Result`] so that failures inside a frame
/// end the loop through [`run`]. Positions are in `[0, 1]^2`.
pub trait Animation {
    /// Before the window exists. Allocate state, call
    /// [`Context::define_input`] here.
    fn on_init(&mut self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// Once, right before the first frame.
    fn on_start(&mut self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// Step the simulation.
    fn on_advance(&mut self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// Update whatever [`image`](Self::image) returns.
    fn on_render(&mut self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    fn on_post_render(&mut self, _ctx: &mut Context) {}

    /// After the image and circles are pushed, before the frame is shown.
    fn on_show(&mut self, _ctx: &mut Context) {}

    fn on_press(&mut self, _ctx: &mut Context, _key: Key) {}

    /// Once per frame for every held non-mouse key.
    fn on_pressing(&mut self, _ctx: &mut Context, _key: Key) {}

    fn on_not_pressing(&mut self, _ctx: &mut Context) {}

    fn on_release(&mut self, _ctx: &mut Context, _key: Key) {}

    fn on_click(&mut self, _ctx: &mut Context, _pos: Vec2, _btn: Key) {}

    /// Once per frame for every held mouse button.
    fn on_clicking(&mut self, _ctx: &mut Context, _pos: Vec2, _btn: Key) {}

    fn on_not_clicking(&mut self, _ctx: &mut Context, _pos: Vec2) {}

    fn on_unclick(&mut self, _ctx: &mut Context, _pos: Vec2, _btn: Key) {}

    /// Cursor moved with no button held.
    fn on_hover(&mut self, _ctx: &mut Context, _pos: Vec2) {}

    /// Cursor moved while `btn` is held; called once per held button.
    fn on_drag(&mut self, _ctx: &mut Context, _pos: Vec2, _btn: Key) {}

    /// Window close button. Stops the loop.
    fn on_close(&mut self, ctx: &mut Context) {
        ctx.stop();
    }

    fn on_escape(&mut self, ctx: &mut Context) {
        self.on_close(ctx);
    }

    fn on_pre_exit(&mut self, _ctx: &mut Context) {}

    fn on_exit(&mut self, _ctx: &mut Context) {}

    /// Image shown each frame. Its shape becomes the window resolution.
    fn image(&self) -> Option<ImageRef<'_>> {
        None
    }

    /// Circle centres drawn each frame.
    fn circles(&self) -> Option<&[Vec2]> {
        None
    }
}

fn pre_event<A: Animation + ?Sized>(anim: &mut A, ctx: &mut Context, surface: &impl Surface) {
    let mouse = ctx.mouse();
    let mut clicking = false;
    for btn in Key::MOUSE {
        if surface.is_pressed(btn) {
            anim.on_clicking(ctx, mouse, btn);
            clicking = true;
        }
    }
    if !clicking {
        anim.on_not_clicking(ctx, mouse);
    }

    let mut pressing = false;
    for key in surface.pressed_keys() {
        if !key.is_mouse() {
            anim.on_pressing(ctx, key);
            pressing = true;
        }
    }
    if !pressing {
        anim.on_not_pressing(ctx);
    }
}

fn dispatch<A: Animation + ?Sized>(
    anim: &mut A,
    ctx: &mut Context,
    surface: &impl Surface,
    event: Event,
) {
    match event {
        Event::Press { key, pos } if key.is_mouse() => anim.on_click(ctx, pos, key),
        Event::Press { key, .. } => {
            match key {
                Key::Escape => anim.on_escape(ctx),
                Key::Exit => anim.on_close(ctx),
                _ => {}
            }
            anim.on_press(ctx, key);
        }
        Event::Release { key, pos } if key.is_mouse() => anim.on_unclick(ctx, pos, key),
        Event::Release { key, .. } => anim.on_release(ctx, key),
        Event::Motion { pos } => {
            let mut dragging = false;
            for btn in Key::MOUSE {
                if surface.is_pressed(btn) {
                    anim.on_drag(ctx, pos, btn);
                    dragging = true;
                }
            }
            if !dragging {
                anim.on_hover(ctx, pos);
            }
        }
    }
}

fn sync_surface_state(ctx: &mut Context, surface: &impl Surface) {
    ctx.set_mouse(surface.cursor_pos());
    ctx.set_pressed(surface.pressed_keys());
}

/// Run `anim` on `surface` until it stops or `config.max_frames` is reached.
///
/// Returns the number of frames shown. An error from any hook ends the
/// loop immediately; `on_pre_exit` and `on_exit` are then skipped.
pub fn run<A: Animation + ?Sized>(
    anim: &mut A,
    surface: &mut impl Surface,
    config: &AnimationConfig,
) -> Result<u64> {
    let mut ctx = Context::new(config.resolution);
    anim.on_init(&mut ctx)?;
    if let Some(img) = anim.image() {
        ctx.set_resolution(img.shape());
    }
    anim.on_start(&mut ctx)?;
    surface.set_title(&config.title);
    info!(
        title = %config.title,
        resolution = ?ctx.resolution(),
        inputs = ctx.has_input(),
        "animation started"
    );

    while ctx.running() {
        if config.max_frames.is_some_and(|n| ctx.frame() >= n) {
            break;
        }

        sync_surface_state(&mut ctx, surface);
        pre_event(anim, &mut ctx, surface);
        for event in surface.poll_events() {
            dispatch(anim, &mut ctx, surface, event);
        }
        sync_surface_state(&mut ctx, surface);
        ctx.update_inputs(surface);

        anim.on_advance(&mut ctx)?;
        anim.on_render(&mut ctx)?;
        anim.on_post_render(&mut ctx);

        surface.clear(config.background_color);
        if let Some(img) = anim.image() {
            ctx.set_resolution(img.shape());
            surface.set_image(img);
        }
        if let Some(pos) = anim.circles() {
            surface.circles(pos, config.circle_color, config.circle_radius);
        }
        anim.on_show(&mut ctx);

        let screenshot = config.screenshot_path(ctx.frame());
        surface.show(screenshot.as_deref())?;
        debug!(frame = ctx.frame(), screenshot = ?screenshot, "frame shown");
        ctx.next_frame();
    }

    anim.on_pre_exit(&mut ctx);
    anim.on_exit(&mut ctx);
    info!(frames = ctx.frame(), "animation finished");
    Ok(ctx.frame())
}
