pub mod chunks;
pub mod keywords;
pub mod search;
pub mod subjects;
pub mod version;
