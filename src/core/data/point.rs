/// A grid cell: `x` is the column, `y` the row, both counted from the
/// top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
