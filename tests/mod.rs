mod common;
mod config_test;
mod opentdb_client_test;
