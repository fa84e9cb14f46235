pub mod context;
pub mod highlight;
pub mod position;
