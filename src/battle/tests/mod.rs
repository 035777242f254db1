pub mod common;





#[cfg(test)]
mod test_progression_flow;
