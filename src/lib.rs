#![no_std]

mod error;

pub mod config;
pub mod device;
pub mod interface;
mod log;
pub mod params;
pub mod registers;
pub mod sample;

pub use crate::device::Lis3dsh;
pub use crate::error::{Error, Result};
