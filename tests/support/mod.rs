pub mod fixtures;
pub mod socket_guard;
pub mod truncated_body;
