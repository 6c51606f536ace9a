pub mod accounts;
pub mod balance;
pub mod init;
pub mod new_account;
pub mod send;
pub mod status;
pub mod util;
pub mod watch;
