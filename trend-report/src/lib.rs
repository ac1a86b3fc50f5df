pub mod csv_writer;
pub mod summary;

pub use csv_writer::{report_path, write_report};
pub use summary::{format_count, print_top_summary, rank_by_views, summary_title};
