use std::time::Duration;

use crate::animation::animator::Animator;
use crate::animation::clock::{ManualClock, TimerHandle, TimerHost};
use crate::chain::container::{Chain, ChainUpdate};
use crate::chain::node::NodeId;
use crate::foundation::error::CrossRotResult;
use crate::render::context::DrawContext;
use crate::render::geometry::NodeLayout;
use crate::stage::config::{DEFAULT_BACKGROUND, DEFAULT_STROKE, StageConfig};

/// Whatever shows the animation. Called once per tick and once more when a step settles.
pub trait Screen {
    /// Present the renderer's current state.
    fn redraw(&mut self, renderer: &Renderer) -> CrossRotResult<()>;
}

/// Result of delivering one tick to [`Renderer::on_tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The tick did not belong to the live interval and was dropped.
    Ignored,
    /// Redrawn and advanced; the step continues.
    Advanced,
    /// The step finished: the animator stopped and the final state was redrawn.
    Settled {
        /// Node that finished its step.
        from: NodeId,
        /// Node that becomes active for the next tap.
        to: NodeId,
        /// Whether the sweep reversed at a chain end.
        bounced: bool,
    },
}

/// What [`Renderer::drain`] delivered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Drained {
    /// Ticks handed to [`Renderer::on_tick`].
    pub ticks: u64,
    /// The [`TickOutcome::Settled`] outcome, when the step finished.
    pub settled: Option<TickOutcome>,
}

/// Composition layer: one chain, one animator, and the tap/tick wiring between them.
#[derive(Debug)]
pub struct Renderer {
    config: StageConfig,
    layout: NodeLayout,
    chain: Chain,
    animator: Animator,
}

impl Renderer {
    /// Build the chain and a stopped animator from `config`.
    pub fn new(config: StageConfig) -> CrossRotResult<Self> {
        config.validate()?;
        Ok(Self {
            layout: NodeLayout::new(config.canvas, config.nodes),
            chain: Chain::new(config.nodes, config.factor)?,
            animator: Animator::new(config.tick_period()),
            config,
        })
    }

    /// Configuration this renderer was built with.
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Node placement on the surface.
    pub fn layout(&self) -> &NodeLayout {
        &self.layout
    }

    /// The chain.
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// The ticking source.
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Whether a step is being animated.
    pub fn is_animating(&self) -> bool {
        self.animator.is_animated()
    }

    /// Pointer-down: begin a step on the active node and start ticking.
    ///
    /// Returns `false` when a step is already running; the tap is then ignored.
    pub fn pointer_down(&mut self, host: &mut dyn TimerHost) -> bool {
        if !self.chain.start_updating() {
            tracing::debug!(curr = self.chain.curr().0, "tap ignored, step in progress");
            return false;
        }
        self.animator.start(host);
        tracing::debug!(
            curr = self.chain.curr().0,
            dir = self.chain.dir().sign(),
            "step started"
        );
        true
    }

    /// One animator tick: redraw, advance, and on completion stop ticking and redraw again.
    pub fn on_tick(
        &mut self,
        handle: TimerHandle,
        host: &mut dyn TimerHost,
        screen: &mut dyn Screen,
    ) -> CrossRotResult<TickOutcome> {
        if !self.animator.owns(handle) {
            return Ok(TickOutcome::Ignored);
        }

        screen.redraw(self)?;
        match self.chain.update() {
            ChainUpdate::StepCompleted { from, to, bounced } => {
                self.animator.stop(host);
                screen.redraw(self)?;
                Ok(TickOutcome::Settled { from, to, bounced })
            }
            ChainUpdate::Advanced { .. } | ChainUpdate::Idle => Ok(TickOutcome::Advanced),
        }
    }

    /// Deliver due ticks from `clock` up to `until`, stopping as soon as the animator stops.
    pub fn drain(
        &mut self,
        clock: &mut ManualClock,
        screen: &mut dyn Screen,
        until: Duration,
    ) -> CrossRotResult<Drained> {
        let mut drained = Drained::default();
        while self.is_animating() {
            let Some(handle) = clock.pop_due(until) else {
                break;
            };
            let outcome = self.on_tick(handle, clock, screen)?;
            drained.ticks += 1;
            if let TickOutcome::Settled { .. } = outcome {
                drained.settled = Some(outcome);
            }
        }
        Ok(drained)
    }

    /// Clear the surface and draw the chain.
    pub fn draw(&self, ctx: &mut dyn DrawContext) {
        let canvas = self.config.canvas;
        ctx.set_fill_style(DEFAULT_BACKGROUND);
        ctx.fill_rect(0.0, 0.0, canvas.w(), canvas.h());
        self.chain.draw(ctx, &self.layout, DEFAULT_STROKE);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/renderer.rs"]
mod tests;
