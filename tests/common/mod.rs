//! Shared helpers for the integration tests: splitting an XSB-style
//! level string into the two character layers the solver consumes, and
//! an independent replayer that applies a move string to the level.

use std::collections::HashSet;

/// Accepts the usual XSB characters: `#` wall, `.` target, `@` player,
/// `$` crate, `*` crate on target, `+` player on target.
pub fn layers(level: &str) -> (usize, usize, Vec<Vec<char>>, Vec<Vec<char>>) {
    let lines: Vec<&str> = level.trim_matches('\n').lines().collect();
    let height = lines.len();
    let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);

    let mut grid = vec![vec![' '; width]; height];
    let mut items = vec![vec![' '; width]; height];
    for (r, line) in lines.iter().enumerate() {
        for (c, cell) in line.chars().enumerate() {
            match cell {
                '#' => grid[r][c] = '#',
                '.' => grid[r][c] = '.',
                '@' => items[r][c] = '@',
                '$' => items[r][c] = '$',
                '*' => {
                    grid[r][c] = '.';
                    items[r][c] = '$';
                }
                '+' => {
                    grid[r][c] = '.';
                    items[r][c] = '@';
                }
                _ => {}
            }
        }
    }

    (width, height, grid, items)
}

/// Applies `moves` to the level step by step, pushing crates along,
/// and reports whether every crate ends up on a target. Panics on an
/// illegal move - a solver output must never contain one.
pub fn replay_solves(level: &str, moves: &str) -> bool {
    let (width, height, grid, items) = layers(level);
    let in_bounds =
        |(r, c): (i32, i32)| r >= 0 && (r as usize) < height && c >= 0 && (c as usize) < width;
    let is_wall = |(r, c): (i32, i32)| grid[r as usize][c as usize] == '#';

    let mut player = None;
    let mut crates = HashSet::new();
    let mut targets = HashSet::new();
    for r in 0..height {
        for c in 0..width {
            let pos = (r as i32, c as i32);
            match items[r][c] {
                '@' => player = Some(pos),
                '$' => {
                    crates.insert(pos);
                }
                _ => {}
            }
            if grid[r][c] == '.' {
                targets.insert(pos);
            }
        }
    }
    let mut player = player.expect("level has no player");

    for mov in moves.chars() {
        let (dr, dc) = match mov {
            'u' => (-1, 0),
            'd' => (1, 0),
            'l' => (0, -1),
            'r' => (0, 1),
            _ => panic!("unknown move {:?}", mov),
        };

        let stepped = (player.0 + dr, player.1 + dc);
        assert!(in_bounds(stepped) && !is_wall(stepped), "walked into a wall");

        if crates.contains(&stepped) {
            let pushed = (stepped.0 + dr, stepped.1 + dc);
            assert!(
                in_bounds(pushed) && !is_wall(pushed) && !crates.contains(&pushed),
                "illegal push"
            );
            crates.remove(&stepped);
            crates.insert(pushed);
        }
        player = stepped;
    }

    crates.iter().all(|pos| targets.contains(pos))
}
