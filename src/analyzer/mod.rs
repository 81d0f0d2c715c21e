pub mod analyzer_methods;
pub mod report_struct;
pub mod sizes;
