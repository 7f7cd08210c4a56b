pub mod solve;
pub mod trace;
