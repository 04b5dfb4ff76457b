use std::f64::consts::TAU;

use crate::animation::state::{Direction, State, StepUpdate};
use crate::render::context::DrawContext;
use crate::render::geometry::{NodeLayout, arm_angle};

/// Position of a node in its chain's arena. Equal to the node's index.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub usize);

/// Answer of [`Node::get_next`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hop {
    /// The neighbour in the requested direction.
    Moved(NodeId),
    /// No neighbour that way: the node itself, and the sweep must reverse.
    Bounced(NodeId),
}

impl Hop {
    /// Node to activate next.
    pub fn node(self) -> NodeId {
        match self {
            Self::Moved(id) | Self::Bounced(id) => id,
        }
    }

    /// Whether the chain end was hit.
    pub fn is_bounce(self) -> bool {
        matches!(self, Self::Bounced(_))
    }
}

/// One element of the chain: a progress tracker plus links to its neighbours.
#[derive(Clone, Debug)]
pub struct Node {
    index: usize,
    next: Option<NodeId>,
    prev: Option<NodeId>,
    state: State,
}

impl Node {
    pub(crate) fn new(index: usize, node_count: usize, factor: usize) -> Self {
        Self {
            index,
            next: (index + 1 < node_count).then_some(NodeId(index + 1)),
            prev: index.checked_sub(1).map(NodeId),
            state: State::new(factor),
        }
    }

    /// 0-based position in the chain.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Arena id of this node.
    pub fn id(&self) -> NodeId {
        NodeId(self.index)
    }

    /// Neighbour towards the tail.
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// Neighbour towards the head.
    pub fn prev(&self) -> Option<NodeId> {
        self.prev
    }

    /// Owned progress tracker.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Advance this node's step by one tick.
    pub fn update(&mut self) -> StepUpdate {
        self.state.update()
    }

    /// Begin a step on this node; `false` if it is already stepping.
    pub fn start_updating(&mut self) -> bool {
        self.state.start_updating()
    }

    /// Neighbour in `dir`, or this node when the chain ends that way.
    pub fn get_next(&self, dir: Direction) -> Hop {
        let neighbour = match dir {
            Direction::Forward => self.next,
            Direction::Backward => self.prev,
        };
        match neighbour {
            Some(id) => Hop::Moved(id),
            None => Hop::Bounced(self.id()),
        }
    }

    /// Draw the bounding circle and every arm. Styles are set by the caller.
    pub fn draw(&self, ctx: &mut dyn DrawContext, layout: &NodeLayout) {
        let center = layout.center(self.index);
        let r = layout.radius();

        ctx.save();
        ctx.translate(center.x, center.y);
        ctx.begin_path();
        ctx.arc(0.0, 0.0, r, 0.0, TAU);
        ctx.stroke();
        for arm in 0..self.state.factor() {
            ctx.save();
            ctx.rotate(arm_angle(&self.state, arm));
            ctx.begin_path();
            ctx.move_to(0.0, 0.0);
            ctx.line_to(r, 0.0);
            ctx.stroke();
            ctx.restore();
        }
        ctx.restore();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/node.rs"]
mod tests;
