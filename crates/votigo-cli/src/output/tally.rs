//! Ranking table for `votigo results --format table`.

use votigo_core::responses::Tally;

use super::table::{Column, TableOptions, render_columns};

const SIMPLE_COLUMNS: [Column<'static>; 3] = [
    Column::number("place"),
    Column::text("option"),
    Column::number("votes"),
];

const RANKED_COLUMNS: [Column<'static>; 4] = [
    Column::number("place"),
    Column::text("option"),
    Column::number("points"),
    Column::number("first"),
];

/// Competition ranking over already-sorted scores: equal scores share a
/// place and the next distinct score skips ahead, giving "1, 1, 3".
fn competition_places<K: PartialEq>(scores: &[K]) -> Vec<usize> {
    let mut places: Vec<usize> = Vec::with_capacity(scores.len());
    for (index, score) in scores.iter().enumerate() {
        let place = match index.checked_sub(1) {
            Some(prev) if scores[prev] == *score => places[prev],
            _ => index + 1,
        };
        places.push(place);
    }
    places
}

/// One line per option, best first, in a fixed column order.
#[must_use]
pub fn render_tally(tally: &Tally, options: TableOptions) -> String {
    match tally {
        Tally::Simple { rows } => {
            let scores: Vec<i64> = rows.iter().map(|row| row.votes).collect();
            let cells: Vec<Vec<String>> = competition_places(&scores)
                .into_iter()
                .zip(rows)
                .map(|(place, row)| {
                    vec![place.to_string(), row.name.clone(), row.votes.to_string()]
                })
                .collect();
            render_columns(&SIMPLE_COLUMNS, &cells, options)
        }
        Tally::Ranked { rows, .. } => {
            // Ties on points are broken by first-place count, as in the ordering.
            let scores: Vec<(i64, i64)> =
                rows.iter().map(|row| (row.points, row.first_place)).collect();
            let cells: Vec<Vec<String>> = competition_places(&scores)
                .into_iter()
                .zip(rows)
                .map(|(place, row)| {
                    vec![
                        place.to_string(),
                        row.name.clone(),
                        row.points.to_string(),
                        row.first_place.to_string(),
                    ]
                })
                .collect();
            render_columns(&RANKED_COLUMNS, &cells, options)
        }
    }
}
