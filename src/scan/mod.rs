//! Discovery of loadable YAML files under the supplied paths

pub mod scanner;

pub use scanner::collect_inputs;
