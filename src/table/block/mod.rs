pub mod block_methods;
pub mod block_struct;

#[cfg(test)]
mod tests;
