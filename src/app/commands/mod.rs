pub mod bootstrap;
pub mod commit;
pub mod debug;
pub mod dev_server;
pub mod directory;
pub mod materialize;
pub mod packages;
