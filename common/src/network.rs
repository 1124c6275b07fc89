pub mod codec;
pub mod range;
