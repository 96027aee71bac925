//! Decimal ↔ script numeral conversion.
//!
//! Digit `d` maps to the glyph at index `d`. Numbers convert digit by digit,
//! left to right, with no positional reformatting.

/// A ten-glyph numeral alphabet. Construction fails unless exactly ten
/// distinct, non-empty glyphs are supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralAlphabet {
    glyphs: Vec<String>,
}

impl NumeralAlphabet {
    pub fn new(glyphs: &[String]) -> Option<Self> {
        if glyphs.len() != 10 || glyphs.iter().any(String::is_empty) {
            return None;
        }
        for (i, glyph) in glyphs.iter().enumerate() {
            if glyphs[..i].contains(glyph) {
                return None;
            }
        }
        Some(Self {
            glyphs: glyphs.to_vec(),
        })
    }

    /// `"23"` → `"೨೩"`. `None` if the input has a non-digit character.
    pub fn to_script(&self, decimal: &str) -> Option<String> {
        if decimal.is_empty() {
            return None;
        }
        decimal
            .chars()
            .map(|c| c.to_digit(10).map(|d| self.glyphs[d as usize].as_str()))
            .collect()
    }

    /// `"೨೩"` → `"23"`. `None` if any part of the input is not a glyph.
    pub fn to_decimal(&self, script: &str) -> Option<String> {
        if script.is_empty() {
            return None;
        }
        let mut rest = script;
        let mut decimal = String::new();
        while !rest.is_empty() {
            // Longest match first, in case a glyph is a prefix of another.
            let (digit, glyph) = self
                .glyphs
                .iter()
                .enumerate()
                .filter(|(_, glyph)| rest.starts_with(glyph.as_str()))
                .max_by_key(|(_, glyph)| glyph.len())?;
            decimal.push(char::from_digit(digit as u32, 10)?);
            rest = &rest[glyph.len()..];
        }
        Some(decimal)
    }

    pub fn number_to_script(&self, n: u32) -> String {
        // Decimal formatting of a u32 only yields ASCII digits.
        self.to_script(&n.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kannada() -> NumeralAlphabet {
        let glyphs: Vec<String> = ["೦", "೧", "೨", "೩", "೪", "೫", "೬", "೭", "೮", "೯"]
            .map(String::from)
            .to_vec();
        NumeralAlphabet::new(&glyphs).unwrap()
    }

    #[test]
    fn test_twenty_three_round_trip() {
        let alphabet = kannada();
        let script = alphabet.to_script("23").unwrap();
        assert_eq!(script, "೨೩");
        assert_eq!(alphabet.to_decimal(&script).unwrap(), "23");
    }

    #[test]
    fn test_round_trip_one_to_fifty() {
        let alphabet = kannada();
        for n in 1..=50u32 {
            let script = alphabet.number_to_script(n);
            let back: u32 = alphabet.to_decimal(&script).unwrap().parse().unwrap();
            assert_eq!(back, n);
        }
    }

    #[test]
    fn test_digit_by_digit_no_reformatting() {
        let alphabet = kannada();
        assert_eq!(alphabet.to_script("007").unwrap(), "೦೦೭");
        assert_eq!(alphabet.to_script("10").unwrap(), "೧೦");
    }

    #[test]
    fn test_rejects_foreign_characters() {
        let alphabet = kannada();
        assert_eq!(alphabet.to_script("2x"), None);
        assert_eq!(alphabet.to_decimal("೨a"), None);
        assert_eq!(alphabet.to_decimal(""), None);
    }

    #[test]
    fn test_alphabet_requires_ten_distinct_glyphs() {
        let nine: Vec<String> = (0..9).map(|d| d.to_string()).collect();
        assert!(NumeralAlphabet::new(&nine).is_none());

        let mut dup: Vec<String> = (0..10).map(|d| d.to_string()).collect();
        dup[9] = "0".into();
        assert!(NumeralAlphabet::new(&dup).is_none());
    }

    #[test]
    fn test_multi_character_glyphs() {
        let glyphs: Vec<String> = ["zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine"]
            .map(String::from)
            .to_vec();
        let alphabet = NumeralAlphabet::new(&glyphs).unwrap();
        assert_eq!(alphabet.to_script("42").unwrap(), "fourtwo");
        assert_eq!(alphabet.to_decimal("fourtwo").unwrap(), "42");
    }
}
