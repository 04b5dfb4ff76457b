use crate::animation::state::{Direction, StepUpdate};
use crate::chain::node::{Node, NodeId};
use crate::foundation::color::Color;
use crate::foundation::error::{CrossRotError, CrossRotResult};
use crate::render::context::{DrawContext, LineCap};
use crate::render::geometry::NodeLayout;

/// Result of one [`Chain::update`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainUpdate {
    /// The active node is idle; nothing changed.
    Idle,
    /// The active node advanced and is still stepping.
    Advanced {
        /// Node that advanced.
        node: NodeId,
    },
    /// The active node finished its step and activity moved on.
    StepCompleted {
        /// Node that finished.
        from: NodeId,
        /// New active node (`from` itself after a bounce).
        to: NodeId,
        /// Whether the sweep hit a chain end and reversed.
        bounced: bool,
    },
}

/// Fixed-length chain of nodes with exactly one active node.
///
/// Nodes live in an arena indexed by [`NodeId`]; node 0 is the head. Activity sweeps along the
/// chain one node per completed step and reverses at either end.
#[derive(Clone, Debug)]
pub struct Chain {
    nodes: Vec<Node>,
    curr: NodeId,
    dir: Direction,
}

impl Chain {
    /// Build a chain of `node_count` idle nodes with `factor` arms each. The head is active and
    /// the sweep points towards the tail.
    pub fn new(node_count: usize, factor: usize) -> CrossRotResult<Self> {
        if node_count == 0 {
            return Err(CrossRotError::validation("chain needs at least one node"));
        }
        if factor == 0 {
            return Err(CrossRotError::validation("nodes need at least one arm"));
        }
        let nodes = (0..node_count)
            .map(|i| Node::new(i, node_count, factor))
            .collect();
        Ok(Self {
            nodes,
            curr: NodeId(0),
            dir: Direction::Forward,
        })
    }

    /// Active node.
    pub fn curr(&self) -> NodeId {
        self.curr
    }

    /// Sweep direction.
    pub fn dir(&self) -> Direction {
        self.dir
    }

    /// Node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// All nodes in index order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; construction rejects empty chains.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the active node is mid-step.
    pub fn is_stepping(&self) -> bool {
        self.active().state().is_stepping()
    }

    /// Set the shared stroke style, then draw every node in index order.
    pub fn draw(&self, ctx: &mut dyn DrawContext, layout: &NodeLayout, stroke: Color) {
        ctx.set_stroke_style(stroke);
        ctx.set_line_width(layout.line_width());
        ctx.set_line_cap(LineCap::Round);
        for node in &self.nodes {
            node.draw(ctx, layout);
        }
    }

    /// Advance the active node by one tick; on completion hand activity to the next node.
    pub fn update(&mut self) -> ChainUpdate {
        let from = self.curr;
        match self.active_mut().update() {
            StepUpdate::Idle => ChainUpdate::Idle,
            StepUpdate::Advanced => ChainUpdate::Advanced { node: from },
            StepUpdate::Completed => {
                let hop = self.active().get_next(self.dir);
                if hop.is_bounce() {
                    self.dir = self.dir.reversed();
                }
                self.curr = hop.node();
                tracing::debug!(
                    from = from.0,
                    to = self.curr.0,
                    bounced = hop.is_bounce(),
                    "step completed"
                );
                ChainUpdate::StepCompleted {
                    from,
                    to: self.curr,
                    bounced: hop.is_bounce(),
                }
            }
        }
    }

    /// Begin a step on the active node; `false` while one is already running.
    pub fn start_updating(&mut self) -> bool {
        self.active_mut().start_updating()
    }

    fn active(&self) -> &Node {
        &self.nodes[self.curr.0]
    }

    fn active_mut(&mut self) -> &mut Node {
        &mut self.nodes[self.curr.0]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/container.rs"]
mod tests;
