pub mod dataset;
pub mod export;
pub mod fixtures;
pub mod match_stats;
pub mod scrape;
pub mod summary;
