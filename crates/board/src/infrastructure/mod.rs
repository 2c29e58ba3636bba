pub mod http_client;
pub mod platform;

pub mod testing;
