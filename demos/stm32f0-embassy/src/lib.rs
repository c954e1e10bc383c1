#![no_std]

pub mod hardware;
pub mod time_wrapper;
