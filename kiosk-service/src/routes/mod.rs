pub mod categories;
pub mod health;
pub mod recommendations;
pub mod search;
