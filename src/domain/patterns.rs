/// A named starting pattern, stored as live-cell offsets from its
/// top-left corner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    /// (row, col) offsets of live cells
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Build a pattern from plaintext rows where `O` is live and any other
    /// character is dead.
    pub fn from_plaintext(name: &'static str, description: &'static str, lines: &[&str]) -> Self {
        let cells: Vec<(usize, usize)> = lines
            .iter()
            .copied()
            .enumerate()
            .flat_map(|(r, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == 'O')
                    .map(move |(c, _)| (r, c))
            })
            .collect();
        let rows = lines.len();
        let cols = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        Self { name, description, rows, cols, cells }
    }

    /// Top-left corner that centres the pattern on (row, col), clamped at 0.
    pub fn anchor_centered_on(&self, row: usize, col: usize) -> (usize, usize) {
        (row.saturating_sub(self.rows / 2), col.saturating_sub(self.cols / 2))
    }
}

/// Classic patterns small enough for the default board
pub mod presets {
    use super::Pattern;

    pub fn block() -> Pattern {
        Pattern::from_plaintext("Block", "Still life", &["OO", "OO"])
    }

    pub fn blinker() -> Pattern {
        Pattern::from_plaintext("Blinker", "Oscillator (period 2)", &["OOO"])
    }

    pub fn toad() -> Pattern {
        Pattern::from_plaintext("Toad", "Oscillator (period 2)", &[".OOO", "OOO."])
    }

    pub fn beacon() -> Pattern {
        Pattern::from_plaintext(
            "Beacon",
            "Oscillator (period 2)",
            &["OO..", "O...", "...O", "..OO"],
        )
    }

    pub fn glider() -> Pattern {
        Pattern::from_plaintext("Glider", "Moves diagonally (period 4)", &[".O.", "..O", "OOO"])
    }

    pub fn lwss() -> Pattern {
        Pattern::from_plaintext(
            "LWSS",
            "Lightweight spaceship (period 4)",
            &[".O..O", "O....", "O...O", "OOOO."],
        )
    }

    pub fn pulsar() -> Pattern {
        Pattern::from_plaintext(
            "Pulsar",
            "Oscillator (period 3)",
            &[
                "..OOO...OOO..",
                ".............",
                "O....O.O....O",
                "O....O.O....O",
                "O....O.O....O",
                "..OOO...OOO..",
                ".............",
                "..OOO...OOO..",
                "O....O.O....O",
                "O....O.O....O",
                "O....O.O....O",
                ".............",
                "..OOO...OOO..",
            ],
        )
    }

    pub fn r_pentomino() -> Pattern {
        Pattern::from_plaintext("R-pentomino", "Methuselah", &[".OO", "OO.", ".O."])
    }

    pub fn acorn() -> Pattern {
        Pattern::from_plaintext("Acorn", "Methuselah", &[".O.....", "...O...", "OO..OOO"])
    }

    /// Presets in the order the shell binds them to number keys
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            pulsar(),
            r_pentomino(),
            acorn(),
        ]
    }
}
