pub mod company;
pub mod news;
pub mod response;

pub use company::*;
pub use news::*;
pub use response::*;
