pub mod debounce;
pub mod dom;
pub mod settings;
pub mod styles;
