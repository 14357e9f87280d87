pub mod csv;
pub mod html;
pub mod json;

pub use self::csv::write_csv;
pub use self::html::write_html;
pub use self::json::write_json;
