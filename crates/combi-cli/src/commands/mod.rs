pub mod classify;
pub mod count;
pub mod enumerate;
