pub mod demo;
pub mod export;
pub mod io;
pub mod preview;
