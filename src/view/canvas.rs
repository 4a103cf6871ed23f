use std::fmt;

use crate::{pos, Pos};

/// a fixed size grid of characters, row 0 printed first.
pub struct Canvas {
    lines: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        let lines = (0..height).map(|_| vec![' '; width]).collect();
        Self {
            height,
            lines,
            width,
        }
    }

    /// paints every cell for which `f` returns a character.
    pub fn layer(&mut self, f: impl Fn(Pos) -> Option<char>) {
        for y in 0..self.height {
            for x in 0..self.width {
                if let Some(char) = f(pos!(x as i64, y as i64)) {
                    self.lines[y][x] = char;
                }
            }
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            let line: String = line.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[test]
fn test_layer() {
    let mut canvas = Canvas::new(3, 2);
    canvas.layer(|p| (p.x == p.y).then_some('#'));
    canvas.layer(|p| (p == pos!(2, 1)).then_some('+'));
    assert_eq!(canvas.to_string(), "#  \n #+\n");
}
