#![no_std]

pub mod exti;
pub mod led;
pub mod time_source;
