/*!
## Rust Machine Module

This Rust module evaluates expressions, executes statements, and
runs BASIC programs held in line number order.

*/

mod eval;
mod exec;
mod listing;
mod operation;
mod runtime;
mod state;
mod var;

pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::Io;
pub use runtime::Mode;
pub use runtime::Runtime;
pub use state::State;
pub use state::Transfer;
pub use var::Var;
