mod codec;
mod crypted;
mod factory;

pub use codec::*;
pub use crypted::*;
pub use factory::*;
