pub use compiler_plugin::*;
pub use generator_plugin::*;
pub use resolver_plugin::*;

mod compiler_plugin;
mod generator_plugin;
mod resolver_plugin;
