pub mod record;
pub mod ruc;

pub use record::*;
pub use ruc::*;
