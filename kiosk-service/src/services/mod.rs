pub mod recommend;
pub mod search;
