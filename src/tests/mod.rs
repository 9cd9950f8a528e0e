pub mod common;

mod api;
