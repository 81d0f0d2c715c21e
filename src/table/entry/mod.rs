pub mod entry_methods;
pub mod entry_struct;
