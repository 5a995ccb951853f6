pub mod memory;
pub mod storage_traits;
