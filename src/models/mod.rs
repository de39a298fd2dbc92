pub mod record;
pub mod table;

pub use record::Record;
pub use table::Table;
