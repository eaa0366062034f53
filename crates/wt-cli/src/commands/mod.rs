pub mod dispatch;
pub mod generate;
pub mod scan;
pub mod schema;
