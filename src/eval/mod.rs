pub mod evaluate;

pub use evaluate::{evaluate, EvalReport};
