pub mod generate;
pub mod list;
pub mod serve;

pub use generate::{GenerateCommandArgs, execute_generate};
pub use list::execute_list;
pub use serve::execute_serve;
