pub mod bank_client;
pub mod in_memory;
