pub mod analyze;
pub mod conf;
#[cfg(test)]
mod tests;
