mod submit;

pub use submit::*;
