use std::time::Duration;

use crate::animation::clock::ManualClock;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::CrossRotResult;
use crate::render::cpu::CpuCanvas;
use crate::render::frame::FrameRGBA;
use crate::stage::config::StageConfig;
use crate::stage::renderer::{Drained, Renderer, Screen, TickOutcome};

/// [`Screen`] that rasterizes every redraw and hands it to a sink as the next frame.
struct SinkScreen<S> {
    canvas: Canvas,
    sink: S,
    next: u64,
}

impl<S: FrameSink> Screen for SinkScreen<S> {
    fn redraw(&mut self, renderer: &Renderer) -> CrossRotResult<()> {
        let frame = rasterize(self.canvas, renderer)?;
        self.sink.push_frame(FrameIndex(self.next), &frame)?;
        self.next += 1;
        Ok(())
    }
}

fn rasterize(canvas: Canvas, renderer: &Renderer) -> CrossRotResult<FrameRGBA> {
    let mut ctx = CpuCanvas::new(canvas)?;
    renderer.draw(&mut ctx);
    Ok(ctx.finish())
}

/// Headless host surface.
///
/// Owns the renderer, a virtual clock and a frame sink. Pointer-down events and timer ticks are
/// delivered explicitly, so an interaction replays identically every time.
pub struct Stage<S: FrameSink> {
    renderer: Renderer,
    clock: ManualClock,
    screen: SinkScreen<S>,
}

impl<S: FrameSink> Stage<S> {
    /// Build the renderer, start the sink, and present the resting state as frame 0.
    pub fn new(config: StageConfig, mut sink: S) -> CrossRotResult<Self> {
        let renderer = Renderer::new(config)?;
        let cfg = renderer.config();
        sink.begin(SinkConfig {
            width: cfg.canvas.width,
            height: cfg.canvas.height,
            fps: cfg.fps()?,
        })?;
        tracing::info!(
            nodes = cfg.nodes,
            factor = cfg.factor,
            width = cfg.canvas.width,
            height = cfg.canvas.height,
            "stage ready"
        );

        let mut screen = SinkScreen {
            canvas: cfg.canvas,
            sink,
            next: 0,
        };
        screen.redraw(&renderer)?;
        Ok(Self {
            renderer,
            clock: ManualClock::new(),
            screen,
        })
    }

    /// The composition layer.
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// The virtual clock.
    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// Frames pushed to the sink so far.
    pub fn frames_pushed(&self) -> u64 {
        self.screen.next
    }

    /// The sink.
    pub fn sink(&self) -> &S {
        &self.screen.sink
    }

    /// Deliver a pointer-down at the current time. `false` if it was ignored.
    pub fn pointer_down(&mut self) -> bool {
        self.renderer.pointer_down(&mut self.clock)
    }

    /// Deliver ticks until the animator stops. Returns the number of ticks delivered.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run_until_idle(&mut self) -> CrossRotResult<u64> {
        Ok(self.drain(Duration::MAX)?.ticks)
    }

    /// Tap once and run the resulting step to completion.
    ///
    /// Returns the settling outcome, or `None` when the tap was ignored.
    pub fn tap_and_settle(&mut self) -> CrossRotResult<Option<TickOutcome>> {
        if !self.pointer_down() {
            return Ok(None);
        }
        Ok(self.drain(Duration::MAX)?.settled)
    }

    /// Let `d` of virtual time pass, delivering any ticks that fall inside it.
    pub fn wait(&mut self, d: Duration) -> CrossRotResult<u64> {
        let until = self.clock.now().saturating_add(d);
        let ticks = self.drain(until)?.ticks;
        self.clock.advance_to(until);
        Ok(ticks)
    }

    fn drain(&mut self, until: Duration) -> CrossRotResult<Drained> {
        self.renderer.drain(&mut self.clock, &mut self.screen, until)
    }

    /// Rasterize the current state without pushing it to the sink.
    pub fn snapshot(&self) -> CrossRotResult<FrameRGBA> {
        rasterize(self.renderer.config().canvas, &self.renderer)
    }

    /// End the sink and hand it back.
    pub fn finish(mut self) -> CrossRotResult<S> {
        self.screen.sink.end()?;
        Ok(self.screen.sink)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/host.rs"]
mod tests;
