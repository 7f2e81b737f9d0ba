pub mod child;
pub mod fd;
pub mod status;
