pub mod catalog;
pub mod engine;
pub mod price_plan;
pub mod ranking;
pub mod reading;
pub mod source;
