//! Default values for font loading settings.

pub fn default_font() -> Option<String> {
    None
}

pub fn kerning_strategy() -> crate::types::KerningStrategy {
    crate::types::KerningStrategy::RangeTable
}

pub fn parser_extensions() -> Vec<String> {
    vec![".svg".to_string()]
}
