//! Named starting configurations

/// A set of live cells given as `(x, y)` offsets from the pattern's top-left corner
pub struct Pattern {
    pub name: &'static str,
    pub kind: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "block",
        kind: "still life",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "blinker",
        kind: "oscillator, period 2",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "toad",
        kind: "oscillator, period 2",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "beacon",
        kind: "oscillator, period 2",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "pulsar",
        kind: "oscillator, period 3",
        cells: &[
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "glider",
        kind: "spaceship",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "r-pentomino",
        kind: "methuselah",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "gosper-gun",
        kind: "glider gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

/// Look up a pattern by name, ignoring case and `-`/`_` differences
pub fn find(name: &str) -> Option<&'static Pattern> {
    let wanted = name.trim().to_ascii_lowercase().replace('_', "-");
    PATTERNS.iter().find(|p| p.name == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn find_is_lenient() {
        assert_eq!(find("Blinker").map(|p| p.name), Some("blinker"));
        assert_eq!(find("R_PENTOMINO").map(|p| p.name), Some("r-pentomino"));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn bounding_boxes() {
        let blinker = find("blinker").unwrap();
        assert_eq!((blinker.width(), blinker.height()), (3, 1));
        let pulsar = find("pulsar").unwrap();
        assert_eq!((pulsar.width(), pulsar.height()), (13, 13));
        let gun = find("gosper-gun").unwrap();
        assert_eq!((gun.width(), gun.height()), (36, 9));
    }

    #[test]
    fn cells_are_unique() {
        for pattern in PATTERNS {
            let unique: HashSet<_> = pattern.cells.iter().collect();
            assert_eq!(unique.len(), pattern.cells.len(), "{} repeats a cell", pattern.name);
        }
    }

    #[test]
    fn cell_counts() {
        assert_eq!(find("pulsar").unwrap().cells.len(), 48);
        assert_eq!(find("gosper-gun").unwrap().cells.len(), 36);
    }
}
