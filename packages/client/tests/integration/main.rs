mod banner;
mod blog;
mod common;
mod errors;
mod service;
