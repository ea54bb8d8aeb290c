mod category;
mod option;

pub use category::CategoryCommands;
pub use option::OptionCommands;
