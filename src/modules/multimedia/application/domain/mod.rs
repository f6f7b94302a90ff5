pub mod entities;
pub mod object_name;
pub mod policies;

pub use entities::{Bucket, UnknownBucket, UploadFile};
