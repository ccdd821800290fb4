//! Use-Cases für strukturelle Netz-Änderungen.

pub mod add_element;
pub mod add_segment;
pub mod delete;
pub mod snap;
pub mod toggle_switch;

pub use add_element::add_element;
pub use add_segment::add_pipeline;
pub use delete::delete_at;
pub use snap::resnap_segments;
pub use toggle_switch::toggle_switch;
