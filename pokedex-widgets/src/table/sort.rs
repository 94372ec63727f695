//! Client-side row ordering.

use std::cmp::Ordering;

use pokedex_lib::model::Row;

use super::query::{Column, Direction};

/// Sorts rows in place by the given column and direction.
///
/// Comparison is numeric for numeric columns and lexicographic for string
/// columns; there is no secondary key, so ties stay in arbitrary order.
/// Only the rows currently in hand are ordered; nothing is re-fetched.
pub fn sort_rows(rows: &mut [Row], column: Column, direction: Direction) {
    rows.sort_unstable_by(|a, b| {
        let ordering = compare(a, b, column);
        match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });
}

fn compare(a: &Row, b: &Row, column: Column) -> Ordering {
    match column {
        Column::Name => a.name.cmp(&b.name),
        Column::Height => a.height.cmp(&b.height),
        Column::Weight => a.weight.cmp(&b.weight),
        Column::Types => a.types.cmp(&b.types),
    }
}
