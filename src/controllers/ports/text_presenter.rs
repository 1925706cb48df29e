use crate::core::data::text_grid::TextGrid;

pub trait TextPresenterPort {
    fn present(&mut self, grid: &TextGrid) -> std::io::Result<()>;
}
