//! Bed bolt placement policies
//!
//! A policy decides how many fingers a joint may use and which
//! inter-finger positions receive a bolt. Policies are stateless: the
//! finger count is passed into every query, so one policy value can
//! serve any number of edges.

use serde::{Deserialize, Serialize};

/// Strategy for placing bed bolts along a finger joint
pub trait BoltPolicy {
    /// Adjust the computed finger count to fit the bolt pattern.
    fn num_fingers(&self, fingers: usize) -> usize {
        fingers
    }

    /// Whether the space before finger `pos` receives a bolt.
    fn draw_bolt(&self, fingers: usize, pos: usize) -> bool {
        let _ = (fingers, pos);
        false
    }

    /// Total number of bolts the policy distributes.
    fn bolt_count(&self) -> usize {
        0
    }
}

/// Fixed number of bolts, distributed evenly and mirrored around the
/// joint center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bolts {
    /// Number of bolts along the edge.
    pub bolts: usize,
}

impl Bolts {
    /// Policy placing `bolts` bolts.
    pub fn new(bolts: usize) -> Self {
        Self { bolts }
    }
}

impl BoltPolicy for Bolts {
    /// An odd bolt count needs a space at the exact middle of the
    /// joint, so the finger count is rounded down to even.
    fn num_fingers(&self, fingers: usize) -> usize {
        if self.bolts % 2 == 1 {
            (fingers / 2) * 2
        } else {
            fingers
        }
    }

    fn draw_bolt(&self, fingers: usize, pos: usize) -> bool {
        if fingers == 0 {
            return false;
        }
        let mut pos = pos;
        if pos > fingers / 2 {
            // mirror onto the first half
            pos = fingers - pos;
        }
        if pos == 0 {
            return false;
        }
        if pos == fingers / 2 && self.bolts % 2 == 0 {
            // even patterns leave the center space empty
            return false;
        }
        let step = (self.bolts as f64 + 1.0) / fingers as f64;
        let before = (pos as f64 * step - 0.01).floor();
        let after = ((pos as f64 + 1.0) * step - 0.01).floor();
        before != after
    }

    fn bolt_count(&self) -> usize {
        self.bolts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_bolt_count_rounds_fingers_down_to_even() {
        assert_eq!(Bolts::new(1).num_fingers(5), 4);
        assert_eq!(Bolts::new(3).num_fingers(7), 6);
        assert_eq!(Bolts::new(1).num_fingers(4), 4);
    }

    #[test]
    fn test_even_bolt_count_keeps_finger_count() {
        assert_eq!(Bolts::new(2).num_fingers(5), 5);
        assert_eq!(Bolts::new(4).num_fingers(7), 7);
    }

    #[test]
    fn test_no_bolt_at_the_edge_ends() {
        let b = Bolts::new(3);
        assert!(!b.draw_bolt(8, 0));
        assert!(!b.draw_bolt(8, 8));
    }

    #[test]
    fn test_single_bolt_lands_in_the_middle() {
        let b = Bolts::new(1);
        let hits: Vec<usize> = (1..4).filter(|&p| b.draw_bolt(4, p)).collect();
        assert_eq!(hits, vec![2]);
    }

    #[test]
    fn test_two_bolts_avoid_the_center() {
        let b = Bolts::new(2);
        let hits: Vec<usize> = (1..5).filter(|&p| b.draw_bolt(5, p)).collect();
        assert_eq!(hits, vec![1, 4]);
    }

    #[test]
    fn test_pattern_is_mirrored() {
        for bolts in 1..5 {
            let b = Bolts::new(bolts);
            let fingers = b.num_fingers(9);
            for pos in 0..=fingers {
                assert_eq!(
                    b.draw_bolt(fingers, pos),
                    b.draw_bolt(fingers, fingers - pos),
                    "bolts={} pos={}",
                    bolts,
                    pos
                );
            }
        }
    }
}
