pub mod interleave_methods;

#[cfg(test)]
mod tests;
