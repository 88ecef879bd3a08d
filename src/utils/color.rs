use eframe::egui::Color32;

pub trait ColorExt {
    fn from_hex(hex: &str) -> Option<Self>
    where
        Self: Sized;
}

impl ColorExt for Color32 {
    fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Color32::from_rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(Color32::from_hex("#F59E0B"), Some(Color32::from_rgb(245, 158, 11)));
        assert_eq!(Color32::from_hex("10B981"), Some(Color32::from_rgb(16, 185, 129)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Color32::from_hex("#FFF"), None);
        assert_eq!(Color32::from_hex("#GGGGGG"), None);
        assert_eq!(Color32::from_hex(""), None);
    }
}
