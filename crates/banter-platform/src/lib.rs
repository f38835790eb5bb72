pub mod delay;
pub mod storage;
pub mod transfer;
