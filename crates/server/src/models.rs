mod category;
mod common;
mod question;
mod quiz;
mod responses;

pub use category::*;
pub use common::*;
pub use question::*;
pub use quiz::*;
pub use responses::*;
