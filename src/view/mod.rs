pub mod page;
pub mod table;

pub use page::Page;
pub use table::{render_history_table, render_table, Row};
