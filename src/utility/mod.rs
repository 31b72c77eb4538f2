mod inlines;
pub use self::inlines::format_float;
pub use self::inlines::is_close;
pub use self::inlines::round_to;

#[cfg(test)]
mod tests;
