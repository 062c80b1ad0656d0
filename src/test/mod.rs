pub mod utils;

mod services;
