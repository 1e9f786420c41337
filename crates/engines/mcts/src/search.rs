//! UCT search over an index-based tree arena.

use draughts_core::{evaluate, legal_moves, Move, Position, Side, TimeControl};
use rand::seq::SliceRandom;
use rand::Rng;

pub struct MctsOutcome {
    pub best_move: Option<Move>,
    /// Mean value of the chosen move in [-1, 1] from the mover's perspective.
    pub score: f32,
    pub nodes: u64,
    pub stopped: bool,
}

struct Node {
    parent: Option<usize>,
    /// The move that led here (None at the root).
    mv: Option<Move>,
    pos: Position,
    /// The side that made `mv`. Not derivable from depth: a capture chain
    /// keeps the same side moving across consecutive tree levels.
    mover: Option<Side>,
    untried: Vec<Move>,
    children: Vec<usize>,
    visits: u32,
    /// Cumulative value from `mover`'s perspective.
    value: f32,
}

/// Tree applies and rollouts run with draw tracking enabled on private
/// clones so the 40-ply clock terminates quiet playouts; the caller's
/// position is never modified.
pub fn mcts_search<R: Rng>(
    pos: &Position,
    iterations: u32,
    rollout_depth: u32,
    exploration: f32,
    rng: &mut R,
    tc: &TimeControl,
) -> MctsOutcome {
    let mut nodes = 0u64;
    let mut tree = vec![Node {
        parent: None,
        mv: None,
        pos: pos.clone(),
        mover: None,
        untried: legal_moves(pos),
        children: Vec::new(),
        visits: 0,
        value: 0.0,
    }];

    let mut stopped = false;
    for _ in 0..iterations {
        if tc.expired() {
            stopped = true;
            break;
        }

        // Selection: descend while fully expanded and not a leaf.
        let mut node = 0;
        while tree[node].untried.is_empty() && !tree[node].children.is_empty() {
            node = best_ucb_child(&tree, node, exploration);
        }

        // Expansion: try one new move, if any remain.
        if !tree[node].untried.is_empty() {
            let mv = {
                let n = &mut tree[node];
                let i = rng.gen_range(0..n.untried.len());
                n.untried.swap_remove(i)
            };
            let next = tree[node].pos.apply(mv, true);
            let mover = tree[node].pos.side_to_move;
            nodes += 1;
            tree.push(Node {
                parent: Some(node),
                mv: Some(mv),
                untried: legal_moves(&next),
                pos: next,
                mover: Some(mover),
                children: Vec::new(),
                visits: 0,
                value: 0.0,
            });
            let child = tree.len() - 1;
            tree[node].children.push(child);
            node = child;
        }

        // Rollout, scored for Dark; backprop flips per node.
        let z = rollout(&tree[node].pos, rollout_depth, rng, &mut nodes);

        let mut cur = Some(node);
        while let Some(i) = cur {
            let n = &mut tree[i];
            n.visits += 1;
            if let Some(mover) = n.mover {
                n.value += if mover == Side::Dark { z } else { -z };
            }
            cur = n.parent;
        }
    }

    // Final pick: the most-visited root move.
    let best = tree[0]
        .children
        .iter()
        .copied()
        .max_by_key(|&c| tree[c].visits);
    match best {
        Some(c) => MctsOutcome {
            best_move: tree[c].mv,
            score: tree[c].value / tree[c].visits as f32,
            nodes,
            stopped,
        },
        None => MctsOutcome {
            best_move: None,
            score: 0.0,
            nodes,
            stopped,
        },
    }
}

fn best_ucb_child(tree: &[Node], parent: usize, exploration: f32) -> usize {
    let ln_n = (tree[parent].visits.max(1) as f32).ln();
    let mut best = tree[parent].children[0];
    let mut best_score = f32::NEG_INFINITY;
    for &child in &tree[parent].children {
        let n = &tree[child];
        let mean = n.value / n.visits as f32;
        let ucb = mean + exploration * (ln_n / n.visits as f32).sqrt();
        if ucb > best_score {
            best_score = ucb;
            best = child;
        }
    }
    best
}

/// Random playout with a ply cutoff. Terminal positions score by game
/// utility, cut-off positions by the heuristic, both for Dark.
fn rollout<R: Rng>(start: &Position, max_plies: u32, rng: &mut R, nodes: &mut u64) -> f32 {
    let mut pos = start.clone();
    for _ in 0..max_plies {
        if pos.is_terminal() {
            break;
        }
        let moves = legal_moves(&pos);
        let mv = match moves.choose(rng) {
            Some(&mv) => mv,
            None => break,
        };
        pos = pos.apply(mv, true);
        *nodes += 1;
    }

    if pos.is_terminal() {
        pos.utility(Side::Dark) as f32
    } else {
        evaluate(&pos, Side::Dark)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
