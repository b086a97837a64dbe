/// Kernel initialization and bootstrap module
pub mod display;
pub mod init;
pub mod serial;

pub use init::init_kernel;
pub use serial::init_logger;
