mod flow;
pub use flow::*;
