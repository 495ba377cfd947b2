//! Text rendering of the board for the presentation layer.
//!
//! Rendering only reads the public board snapshot; it never mutates the
//! puzzle.

use crate::puzzle::Puzzle;

/// Formats the board as a fixed-width text grid.
///
/// One column per peg with the peg name as the header, rows from the top
/// level down to the base. Empty slots show as '.'.
pub fn format_board(puzzle: &Puzzle) -> String {
    let columns = puzzle.snapshot();
    let levels = puzzle.total_disks() as usize;
    // column width fits both the peg name and the widest disk number
    let digits = puzzle.total_disks().to_string().len();
    let widths: Vec<usize> = columns
        .iter()
        .map(|(id, _)| id.to_string().len().max(digits))
        .collect();

    let mut output = String::new();
    for (column, (id, _)) in columns.iter().enumerate() {
        if column > 0 {
            output.push_str("  ");
        }
        output.push_str(&format!("{:>width$}", id, width = widths[column]));
    }
    output.push('\n');

    for level in (0..levels).rev() {
        for (column, (_, sizes)) in columns.iter().enumerate() {
            if column > 0 {
                output.push_str("  ");
            }
            match sizes.get(level) {
                Some(size) => {
                    output.push_str(&format!("{:>width$}", size, width = widths[column]));
                }
                None => {
                    output.push_str(&format!("{:>width$}", ".", width = widths[column]));
                }
            }
        }
        output.push('\n');
    }

    output
}
