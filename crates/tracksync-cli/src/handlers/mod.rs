pub mod docs;
pub mod init;
pub mod scan;
pub mod sync;
pub mod validate;
