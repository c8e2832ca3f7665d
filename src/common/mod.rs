pub mod response;

pub use response::Reply;
