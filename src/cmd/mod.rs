//! Command module structure for regform CLI

pub mod check;
pub mod form;
pub mod sample;
pub mod util;
