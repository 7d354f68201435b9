pub mod user_keys;
