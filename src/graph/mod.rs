pub mod builder;
pub mod classify;
pub mod controller;
