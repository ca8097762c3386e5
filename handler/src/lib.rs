mod readme;
mod svg;
pub use readme::*;
pub use svg::*;
