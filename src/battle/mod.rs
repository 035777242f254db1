pub mod ai;
pub mod catch;
pub mod damage;
pub mod encounter;
pub mod state;

#[cfg(test)]
pub(crate) mod tests;
