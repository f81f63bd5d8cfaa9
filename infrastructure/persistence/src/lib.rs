pub mod db;
pub mod kv {
    pub mod file_store;
    pub mod memory_store;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod scan_event {
    pub mod entity;
    pub mod repository;
}
