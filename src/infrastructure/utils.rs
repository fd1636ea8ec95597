pub mod clock;
pub mod get_client_ip;
