pub mod help;
pub mod toolchain;
