pub mod response;
pub mod storage;
pub mod validation;
