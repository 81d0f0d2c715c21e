pub mod builder_methods;
pub mod config_struct;

#[cfg(test)]
mod tests;
