pub mod fake_connection_service;
