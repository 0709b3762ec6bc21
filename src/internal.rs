pub mod entrance;
pub mod page;
pub mod poller;
pub mod states;
pub mod transport;
