// GenMon Schema - Shared type definitions
// This crate contains the static vocabulary shared between the battle engine
// and the external creature generator: elements, the type chart, moves, and the
// raw creature records the generator hands over.

// Re-export the main types
pub use creature_data::*;
pub use element_types::*;
pub use move_types::*;

pub mod creature_data;
pub mod element_types;
pub mod move_types;
