use crate::controllers::ports::text_presenter::TextPresenterPort;
use crate::core::data::text_grid::TextGrid;
use std::io::{self, Write};

/// Writes each row followed by a newline to any byte sink.
pub struct WriterPresenter<W: Write> {
    writer: W,
}

impl<W: Write> TextPresenterPort for WriterPresenter<W> {
    fn present(&mut self, grid: &TextGrid) -> io::Result<()> {
        for row in grid.rows() {
            writeln!(self.writer, "{}", row)?;
        }

        self.writer.flush()
    }
}

impl<W: Write> WriterPresenter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterPresenter<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}
