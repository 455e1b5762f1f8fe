//! Grid to constraint derivation

use super::cell::{Cell, TileState};
use crate::matcher::WordleConstraints;

/// Turn rows of feedback cells into matcher constraints
///
/// Every filled cell contributes by colour: green fixes its column, yellow marks
/// its column as misplaced, gray excludes the letter. Letters that end up both
/// required and gray stay required. A filled cell still in the `Empty` state adds
/// no constraint but still makes the result searchable. Cells without a letter
/// contribute nothing.
pub fn derive_constraints<'a, I>(rows: I) -> WordleConstraints
where
    I: IntoIterator<Item = &'a [Cell]>,
{
    let mut constraints = WordleConstraints::new();
    for row in rows {
        for (position, cell) in row.iter().enumerate() {
            let Some(letter) = cell.letter() else {
                continue;
            };
            match cell.state() {
                TileState::Green => constraints.add_green(position, letter),
                TileState::Yellow => constraints.add_yellow(position, letter),
                TileState::Gray => constraints.add_gray(letter),
                TileState::Empty => constraints.add_uncoloured(letter),
            }
        }
    }
    constraints
}
