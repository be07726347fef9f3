use console::Style;
use once_cell::sync::Lazy;

pub static TABLE_HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static ACCENT: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
