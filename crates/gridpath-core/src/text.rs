//! Text maps: build a [`Grid`] from ASCII art and print it back.
//!
//! One character per cell, one line per row, using the glyphs of
//! [`CellState::glyph`]:
//!
//! ```text
//! S.#.
//! ..#.
//! ..#E
//! ....
//! ```
//!
//! Leading and trailing whitespace around the whole map is ignored, but not
//! inside lines. All lines must have the same width and the map must be
//! square.

use std::fmt;
use std::str::FromStr;

use crate::error::MapError;
use crate::geom::Pos;
use crate::grid::Grid;
use crate::state::CellState;

impl Grid {
    /// Parse a text map. See the [module docs](self) for the format.
    pub fn from_text(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }
        let lines: Vec<&str> = s.lines().collect();
        let width = lines[0].chars().count();
        for (i, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(MapError::InconsistentSize {
                    line: i,
                    expected: width,
                    found,
                });
            }
        }
        if width != lines.len() {
            return Err(MapError::NotSquare {
                width,
                height: lines.len(),
            });
        }

        let mut grid = Grid::new(width as i32)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row as i32, col as i32);
                let state =
                    CellState::from_glyph(ch).ok_or(MapError::InvalidGlyph { ch, pos })?;
                grid.load(pos, state)?;
            }
        }
        Ok(grid)
    }

    /// Render the grid as a text map, rows separated by `'\n'`.
    pub fn to_text(&self) -> String {
        let n = self.size() as usize;
        let mut out = String::with_capacity(n * (n + 1));
        for (p, s) in self.iter() {
            if p.col == 0 && p.row > 0 {
                out.push('\n');
            }
            out.push(s.glyph());
        }
        out
    }

    fn load(&mut self, pos: Pos, state: CellState) -> Result<(), MapError> {
        let duplicate = |first: Option<Pos>| match first {
            Some(first) => Err(MapError::DuplicateRole {
                role: state,
                first,
                second: pos,
            }),
            None => Ok(()),
        };
        match state {
            CellState::Empty => {}
            CellState::Barrier => self.set_barrier(pos)?,
            CellState::Start => {
                duplicate(self.start())?;
                self.set_start(pos)?;
            }
            CellState::End => {
                duplicate(self.end())?;
                self.set_end(pos)?;
            }
            mark => {
                self.mark(pos, mark);
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::from_text(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALL: &str = "\
S#E
.#.
.#.";

    #[test]
    fn parse_roles_and_barriers() {
        let g = Grid::from_text(WALL).unwrap();
        assert_eq!(g.size(), 3);
        assert_eq!(g.start(), Some(Pos::new(0, 0)));
        assert_eq!(g.end(), Some(Pos::new(0, 2)));
        assert_eq!(g.count(CellState::Barrier), 3);
        assert_eq!(g.to_text(), WALL);
    }

    #[test]
    fn marks_are_loaded() {
        let g: Grid = "vo\n*.".parse().unwrap();
        assert_eq!(g.state(Pos::new(0, 0)), Some(CellState::Visited));
        assert_eq!(g.state(Pos::new(0, 1)), Some(CellState::Frontier));
        assert_eq!(g.state(Pos::new(1, 0)), Some(CellState::Path));
        assert_eq!(g.to_string(), "vo\n*.");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let g = Grid::from_text("\n  \n..\n.#\n\n").unwrap();
        assert_eq!(g.size(), 2);
        assert_eq!(g.state(Pos::new(1, 1)), Some(CellState::Barrier));
    }

    #[test]
    fn rejects_bad_maps() {
        assert_eq!(Grid::from_text("   "), Err(MapError::Empty));
        assert_eq!(
            Grid::from_text("..\n..."),
            Err(MapError::InconsistentSize {
                line: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Grid::from_text("...\n..."),
            Err(MapError::NotSquare {
                width: 3,
                height: 2
            })
        );
        assert_eq!(
            Grid::from_text(".x\n.."),
            Err(MapError::InvalidGlyph {
                ch: 'x',
                pos: Pos::new(0, 1)
            })
        );
        assert_eq!(
            Grid::from_text("S.\n.S"),
            Err(MapError::DuplicateRole {
                role: CellState::Start,
                first: Pos::new(0, 0),
                second: Pos::new(1, 1)
            })
        );
    }
}
