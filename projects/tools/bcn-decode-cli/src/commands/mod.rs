pub mod decode;
pub mod size;
