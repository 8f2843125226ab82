/// Extensions for Rust standard library IO traits.
mod read;
mod seek;

pub use read::*;
pub use seek::*;
