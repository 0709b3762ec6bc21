pub mod poll_hook;
