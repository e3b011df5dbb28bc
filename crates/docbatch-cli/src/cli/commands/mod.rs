mod classify;
mod completions;
mod name;
mod resolve;
mod simulate;

pub use classify::run_classify;
pub use completions::run_completions;
pub use name::run_name;
pub use resolve::run_resolve;
pub use simulate::{run_simulate, SimulateArgs};
