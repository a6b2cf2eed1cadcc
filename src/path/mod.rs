mod generic_path;
pub use generic_path::*;

/// a Type to represent the Cost of travelling along a Path
pub type Cost = f64;
