use crate::models::card::{CardColor, PriceCard};
use crate::models::price::PricePoint;

/// Turns price points into price cards. Pure; never fails.
pub struct CardService;

impl CardService {
    pub fn new() -> Self {
        Self
    }

    /// Render one card.
    pub fn render_card(&self, point: &PricePoint) -> PriceCard {
        let color = change_color(point.change_24h);
        PriceCard {
            coin: point.coin,
            title: point.coin.display_name().to_string(),
            price_text: format_usd(point.price),
            change_text: format_change(point.change_24h),
            color,
            css_color: color.css().to_string(),
        }
    }

    /// Render a card per point, keeping input order.
    pub fn render_cards(&self, points: &[PricePoint]) -> Vec<PriceCard> {
        points.iter().map(|p| self.render_card(p)).collect()
    }
}

impl Default for CardService {
    fn default() -> Self {
        Self::new()
    }
}

/// Affirmative for change ≥ 0, Warning otherwise.
pub fn change_color(change_24h: f64) -> CardColor {
    if change_24h >= 0.0 {
        CardColor::Affirmative
    } else {
        CardColor::Warning
    }
}

/// "$" + two decimals + thousands separators: 43123.4 → "$43,123.40".
pub fn format_usd(price: f64) -> String {
    format!("${}", group_thousands(&format!("{price:.2}")))
}

/// Two decimals + "% (24h)": -2.345 → "-2.35% (24h)".
pub fn format_change(change_24h: f64) -> String {
    format!("{change_24h:.2}% (24h)")
}

/// Insert `,` every three digits of the integer part of an already
/// formatted number ("-1234567.50" → "-1,234,567.50").
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*ch);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands_integers() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567890"), "1,234,567,890");
    }

    #[test]
    fn test_group_thousands_keeps_fraction() {
        assert_eq!(group_thousands("43123.40"), "43,123.40");
        assert_eq!(group_thousands("0.07"), "0.07");
        assert_eq!(group_thousands("100000.00"), "100,000.00");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands("-1234.56"), "-1,234.56");
        assert_eq!(group_thousands("-123.00"), "-123.00");
    }
}
