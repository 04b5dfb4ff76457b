//! crossrot renders a tap-driven chain of rotating cross/circle nodes.
//!
//! A horizontal chain of circular nodes each holds `factor` radial arms. Every pointer-down
//! advances the animation by one step: the active node's arms turn by half their spacing (a "+"
//! becomes an "×" and back), then activity moves to the neighbouring node, bouncing at
//! either end of the chain.
//!
//! # Layers
//!
//! 1. **Core**: [`State`] (per-node progress), [`Node`] / [`Chain`] (arena-linked traversal with
//!    bounce), [`Animator`] (idempotent periodic ticking on a [`TimerHost`]).
//! 2. **Composition**: [`Renderer`] wires pointer-down to "start a step" and each tick to
//!    "redraw + advance", stopping the animator once the step settles.
//! 3. **Host**: [`Stage`] drives a [`Renderer`] on a [`ManualClock`], rasterizes each redraw with
//!    [`CpuCanvas`] and streams frames to a [`FrameSink`] (memory or PNG sequence).
//!
//! The core never fails: idle updates, taps during a step, traversal past the chain ends and
//! repeated start/stop are defined as no-ops. Errors ([`CrossRotError`]) only come from
//! configuration, rasterization and encoding.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod chain;
mod foundation;
mod render;
mod stage;

/// Frame sinks (in-memory and PNG sequence).
pub mod encode;

pub use animation::animator::Animator;
pub use animation::clock::{ManualClock, TimerHandle, TimerHost};
pub use animation::state::{COMPLETION_THRESHOLD, Direction, STEP_SPEED, State, StepUpdate};
pub use chain::container::{Chain, ChainUpdate};
pub use chain::node::{Hop, Node, NodeId};
pub use encode::png::{PngSequenceSink, write_png};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::color::Color;
pub use foundation::core::{Affine, Canvas, Fps, FrameIndex, Point, Vec2};
pub use foundation::error::{CrossRotError, CrossRotResult};
pub use render::context::{DrawContext, LineCap};
pub use render::cpu::CpuCanvas;
pub use render::frame::FrameRGBA;
pub use render::geometry::{NodeLayout, arm_angle};
pub use render::recorder::{DrawCall, RecordingContext};
pub use stage::config::{
    DEFAULT_BACKGROUND, DEFAULT_CANVAS, DEFAULT_FACTOR, DEFAULT_NODES, DEFAULT_STROKE,
    DEFAULT_TICK_PERIOD_MS, StageConfig,
};
pub use stage::host::Stage;
pub use stage::renderer::{Drained, Renderer, Screen, TickOutcome};
