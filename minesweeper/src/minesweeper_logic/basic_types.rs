pub type SizeType = usize;

/// `(row, column)` pair addressing a single cell.
pub type Coordinates = (SizeType, SizeType);
