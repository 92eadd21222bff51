pub mod countdown;
pub mod debounce;
