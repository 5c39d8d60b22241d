pub mod entries;
pub mod export;
