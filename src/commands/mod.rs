mod fit;
mod pack;

pub use fit::*;
pub use pack::*;
