pub mod dom;
pub mod logging;
