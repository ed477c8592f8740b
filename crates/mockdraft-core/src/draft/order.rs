// Snake turn order.

/// Team indices in pick order for the given 1-based round.
///
/// Odd rounds run `0..num_teams` ascending, even rounds run it in reverse, so
/// the team that picks last in one round picks first in the next.
pub fn snake_order(round: u32, num_teams: usize) -> Vec<usize> {
    let ascending = 0..num_teams;
    if round % 2 == 1 {
        ascending.collect()
    } else {
        ascending.rev().collect()
    }
}
