//! Default values for layout and text-rendering settings.

pub fn font_size() -> f64 {
    24.0 // px
}

pub fn line_height() -> f64 {
    1.0 // Multiplier of the font's em size
}

pub fn letter_spacing() -> f64 {
    0.0 // px
}
