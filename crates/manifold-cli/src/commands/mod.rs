pub mod batch;
pub mod certify;
pub mod manifest;
pub mod probe;
