/// Largest input the default solver accepts; each extra number multiplies the work by roughly 80
pub const DEFAULT_MAX_SOURCES: usize = 6;
