pub mod db;
pub mod item {
    pub mod entity;
    pub mod memory;
    pub mod repository;
}
