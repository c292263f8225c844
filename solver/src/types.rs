//! Core data types: grid coordinates, the action set, and policy decisions.

use serde::Serialize;

/// A grid cell (row, col), 0-indexed from the top-left corner. A state has
/// no identity beyond its coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct State {
    pub row: usize,
    pub col: usize,
}

impl State {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell — the minimum number of
    /// four-direction moves between the two.
    pub fn manhattan_distance(self, other: State) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// The four axis-aligned moves. There is no "stay" action: a move that
/// would leave the grid is clipped to a no-op by the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// All actions, in enumeration order. The engine's max over candidate
    /// values is order-independent; the policy extractor's tie-break is by
    /// [`Action::name`], not by position in this array.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// Canonical lowercase name. The policy tie-break compares these
    /// strings, giving the preference order up > right > left > down.
    pub fn name(self) -> &'static str {
        match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }

    /// Display glyph for renderers.
    pub fn glyph(self) -> char {
        match self {
            Action::Up => '↑',
            Action::Down => '↓',
            Action::Left => '←',
            Action::Right => '→',
        }
    }
}

/// One cell of the extracted policy: a movement action, or the goal marker
/// for the absorbing cell. The goal cell never carries a movement action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyDecision {
    Move(Action),
    Goal,
}

impl PolicyDecision {
    /// Display glyph: the action's arrow, or `G` for the goal cell.
    pub fn glyph(self) -> char {
        match self {
            PolicyDecision::Move(action) => action.glyph(),
            PolicyDecision::Goal => 'G',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(State::new(0, 0).manhattan_distance(State::new(3, 3)), 6);
        assert_eq!(State::new(3, 3).manhattan_distance(State::new(0, 0)), 6);
        assert_eq!(State::new(2, 1).manhattan_distance(State::new(2, 1)), 0);
        assert_eq!(State::new(0, 5).manhattan_distance(State::new(0, 4)), 1);
    }

    #[test]
    fn test_action_names_order() {
        // The tie-break relies on "up" > "right" > "left" > "down".
        assert!(Action::Up.name() > Action::Right.name());
        assert!(Action::Right.name() > Action::Left.name());
        assert!(Action::Left.name() > Action::Down.name());
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Action::Up.glyph(), '↑');
        assert_eq!(Action::Right.glyph(), '→');
        assert_eq!(PolicyDecision::Goal.glyph(), 'G');
        assert_eq!(PolicyDecision::Move(Action::Left).glyph(), '←');
    }
}
