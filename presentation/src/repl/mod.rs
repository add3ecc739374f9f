//! Interactive game REPL

mod command;
mod game_repl;

pub use command::ReplCommand;
pub use game_repl::GameRepl;
