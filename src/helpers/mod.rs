pub mod hex_view;
pub mod report_view;
