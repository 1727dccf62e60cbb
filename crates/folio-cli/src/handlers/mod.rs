pub mod init;
pub mod show;
pub mod terminal_commands;
pub mod terminal_exec;
pub mod view;
