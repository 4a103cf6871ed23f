use std::{
    io::{stdout, Write},
    thread,
    time::Duration,
};

use crate::{bounding_box, pos, CellSet, Error, Result};

pub use canvas::Canvas;
mod canvas;

pub const HUMAN_WAIT: Duration = Duration::from_millis(1000 / 30);
pub const MAX_CANVAS_CELLS: u64 = 1 << 24;

/// draws the bounding box of `live`, highest row first, `@` for live cells.
pub fn render<S>(live: &S) -> Result<String>
where
    S: CellSet,
{
    let bounds = bounding_box(live);
    let (width, height) = (bounds.width(), bounds.height());
    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CANVAS_CELLS => (),
        _ => return Err(Error::BoardTooLarge { width, height }),
    }
    let mut canvas = Canvas::new(width as usize, height as usize);
    let top_left = pos!(bounds.min.x, bounds.max.y);
    canvas.layer(|p| live.contains(top_left + pos!(p.x, -p.y)).then_some('@'));
    Ok(canvas.to_string())
}

/// clears the terminal, draws the board and waits long enough for a human to follow.
pub fn show<S>(live: &S) -> Result<()>
where
    S: CellSet,
{
    let clear = termion::clear::All;
    let home = termion::cursor::Goto(1, 1);
    let mut out = stdout().lock();
    let frame = render(live)?;
    write!(out, "{clear}{home}{frame}")?;
    out.flush()?;
    drop(out);
    thread::sleep(HUMAN_WAIT);
    Ok(())
}
