//! Grid cells and their feedback colour

use std::fmt;

/// Feedback colour of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    #[default]
    Empty,
    Green,
    Yellow,
    Gray,
}

impl TileState {
    /// The state a tap moves to: Empty → Green → Yellow → Gray → Empty
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Empty => Self::Green,
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Gray,
            Self::Gray => Self::Empty,
        }
    }

    /// Parse one feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/'X'/'x'/⬜/⬛ for gray
    #[must_use]
    pub const fn from_feedback(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | '.' | 'X' | 'x' | '⬜' | '⬛' => Some(Self::Gray),
            _ => None,
        }
    }

    /// Feedback character used when printing a row
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Gray => '-',
        }
    }
}

/// One grid cell: an optional letter and its colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    letter: Option<u8>,
    state: TileState,
}

impl Cell {
    /// A filled cell; the letter is upper-cased
    #[must_use]
    pub const fn new(letter: u8, state: TileState) -> Self {
        Self {
            letter: Some(letter.to_ascii_uppercase()),
            state,
        }
    }

    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        self.letter
    }

    #[must_use]
    pub const fn state(self) -> TileState {
        self.state
    }

    #[must_use]
    pub const fn is_filled(self) -> bool {
        self.letter.is_some()
    }

    /// Write a letter; an uncoloured cell turns green, a coloured one keeps its colour
    pub const fn set_letter(&mut self, letter: u8) {
        self.letter = Some(letter.to_ascii_uppercase());
        if matches!(self.state, TileState::Empty) {
            self.state = TileState::Green;
        }
    }

    /// Advance the colour, but only when the cell holds a letter
    pub const fn cycle(&mut self) {
        if self.letter.is_some() {
            self.state = self.state.next();
        }
    }

    pub const fn clear(&mut self) {
        *self = Self {
            letter: None,
            state: TileState::Empty,
        };
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter {
            Some(letter) => write!(f, "{}", letter as char),
            None => write!(f, "_"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_cycle_wraps() {
        let mut state = TileState::Empty;
        let mut seen = Vec::new();
        for _ in 0..4 {
            state = state.next();
            seen.push(state);
        }
        assert_eq!(
            seen,
            vec![
                TileState::Green,
                TileState::Yellow,
                TileState::Gray,
                TileState::Empty
            ]
        );
    }

    #[test]
    fn feedback_characters() {
        assert_eq!(TileState::from_feedback('g'), Some(TileState::Green));
        assert_eq!(TileState::from_feedback('🟨'), Some(TileState::Yellow));
        assert_eq!(TileState::from_feedback('-'), Some(TileState::Gray));
        assert_eq!(TileState::from_feedback('⬛'), Some(TileState::Gray));
        assert_eq!(TileState::from_feedback('Q'), None);
    }

    #[test]
    fn typing_into_empty_cell_turns_green() {
        let mut cell = Cell::default();
        cell.set_letter(b'a');
        assert_eq!(cell.letter(), Some(b'A'));
        assert_eq!(cell.state(), TileState::Green);
    }

    #[test]
    fn retyping_keeps_colour() {
        let mut cell = Cell::new(b'A', TileState::Yellow);
        cell.set_letter(b'B');
        assert_eq!(cell.letter(), Some(b'B'));
        assert_eq!(cell.state(), TileState::Yellow);
    }

    #[test]
    fn empty_cell_does_not_cycle() {
        let mut cell = Cell::default();
        cell.cycle();
        assert_eq!(cell.state(), TileState::Empty);

        let mut filled = Cell::new(b'A', TileState::Gray);
        filled.cycle();
        assert_eq!(filled.state(), TileState::Empty);
        assert!(filled.is_filled());
    }

    #[test]
    fn clear_resets() {
        let mut cell = Cell::new(b'A', TileState::Yellow);
        cell.clear();
        assert_eq!(cell, Cell::default());
        assert_eq!(cell.to_string(), "_");
    }
}
