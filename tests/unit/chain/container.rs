use super::*;
use crate::foundation::core::Canvas;
use crate::render::recorder::{DrawCall, RecordingContext};

fn complete_step(chain: &mut Chain) -> ChainUpdate {
    assert!(chain.start_updating());
    for _ in 0..1_000 {
        let u = chain.update();
        if let ChainUpdate::StepCompleted { .. } = u {
            return u;
        }
        assert!(matches!(u, ChainUpdate::Advanced { .. }));
    }
    panic!("step never completed");
}

#[test]
fn rejects_empty_shapes() {
    assert!(Chain::new(0, 4).is_err());
    assert!(Chain::new(5, 0).is_err());
}

#[test]
fn starts_at_head_sweeping_forward() {
    let chain = Chain::new(5, 4).unwrap();
    assert_eq!(chain.len(), 5);
    assert!(!chain.is_empty());
    assert_eq!(chain.curr(), NodeId(0));
    assert_eq!(chain.dir(), Direction::Forward);
    assert!(!chain.is_stepping());
}

#[test]
fn idle_chain_update_changes_nothing() {
    let mut chain = Chain::new(5, 4).unwrap();
    assert_eq!(chain.update(), ChainUpdate::Idle);
    assert_eq!(chain.curr(), NodeId(0));
}

#[test]
fn interior_completion_hands_off_forward() {
    let mut chain = Chain::new(5, 4).unwrap();
    let u = complete_step(&mut chain);
    assert_eq!(
        u,
        ChainUpdate::StepCompleted {
            from: NodeId(0),
            to: NodeId(1),
            bounced: false
        }
    );
    assert_eq!(chain.dir(), Direction::Forward);
    let head = chain.node(NodeId(0)).unwrap().state();
    assert_eq!(head.prev_scale(), 1.0);
    assert_eq!(head.dir(), 0);
}

#[test]
fn bounces_at_the_tail() {
    let mut chain = Chain::new(5, 4).unwrap();
    for _ in 0..4 {
        complete_step(&mut chain);
    }
    assert_eq!(chain.curr(), NodeId(4));
    assert_eq!(chain.dir(), Direction::Forward);

    let u = complete_step(&mut chain);
    assert_eq!(
        u,
        ChainUpdate::StepCompleted {
            from: NodeId(4),
            to: NodeId(4),
            bounced: true
        }
    );
    assert_eq!(chain.curr(), NodeId(4));
    assert_eq!(chain.dir(), Direction::Backward);
}

#[test]
fn bounces_at_the_head_after_full_sweep() {
    let mut chain = Chain::new(5, 4).unwrap();
    for _ in 0..9 {
        complete_step(&mut chain);
    }
    assert_eq!(chain.curr(), NodeId(0));
    assert_eq!(chain.dir(), Direction::Backward);

    let u = complete_step(&mut chain);
    assert_eq!(
        u,
        ChainUpdate::StepCompleted {
            from: NodeId(0),
            to: NodeId(0),
            bounced: true
        }
    );
    assert_eq!(chain.dir(), Direction::Forward);
    for node in chain.nodes() {
        assert_eq!(node.state().prev_scale(), 0.0);
        assert_eq!(node.state().scale(), 0.0);
    }
}

#[test]
fn single_node_chain_bounces_every_step() {
    let mut chain = Chain::new(1, 4).unwrap();
    for i in 0..4 {
        let u = complete_step(&mut chain);
        assert_eq!(
            u,
            ChainUpdate::StepCompleted {
                from: NodeId(0),
                to: NodeId(0),
                bounced: true
            }
        );
        let expected = if i % 2 == 0 {
            Direction::Backward
        } else {
            Direction::Forward
        };
        assert_eq!(chain.dir(), expected);
    }
}

#[test]
fn only_the_active_node_moves() {
    let mut chain = Chain::new(5, 4).unwrap();
    complete_step(&mut chain);
    chain.start_updating();
    chain.update();
    let stepping: Vec<usize> = chain
        .nodes()
        .iter()
        .filter(|n| n.state().is_stepping())
        .map(|n| n.index())
        .collect();
    assert_eq!(stepping, vec![1]);
    assert!(!chain.start_updating());
}

#[test]
fn draw_sets_style_once_then_visits_every_node() {
    let chain = Chain::new(3, 4).unwrap();
    let layout = NodeLayout::new(
        Canvas {
            width: 300,
            height: 120,
        },
        3,
    );
    let mut ctx = RecordingContext::new();
    let stroke = Color::rgb(1, 2, 3);
    chain.draw(&mut ctx, &layout, stroke);

    let calls = ctx.calls();
    assert_eq!(calls[0], DrawCall::SetStrokeStyle { color: stroke });
    assert_eq!(
        calls[1],
        DrawCall::SetLineWidth {
            width: layout.line_width()
        }
    );
    assert_eq!(
        calls[2],
        DrawCall::SetLineCap {
            cap: LineCap::Round
        }
    );

    let translates: Vec<f64> = calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::Translate { x, .. } => Some(*x),
            _ => None,
        })
        .collect();
    assert_eq!(translates, vec![50.0, 150.0, 250.0]);

    let strokes = calls.iter().filter(|c| **c == DrawCall::Stroke).count();
    assert_eq!(strokes, 3 * (1 + 4));
}
