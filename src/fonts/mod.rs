//! Font metrics for the standard PDF fonts used by the report.
//!
//! The report only uses the base-14 Helvetica faces, which every PDF viewer ships with, so no
//! font files are embedded. Text placement still needs advance widths to center the title and to
//! size table columns; these come from the Adobe font metrics for every printable WinAnsi character.

use printpdf::BuiltinFont;

/// Width used for characters the WinAnsi encoding cannot represent, in 1/1000 em.
const FALLBACK_GLYPH_WIDTH: u16 = 556;

/// First character covered by the printable ASCII tables.
const FIRST_CHAR: u32 = 0x20;
/// First character covered by the Latin-1 tables.
const FIRST_LATIN1_CHAR: u32 = 0xA0;

// Advance widths for U+0020..=U+007E in 1/1000 em.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 'p'..'~'
];

// Advance widths for U+00A0..=U+00FF, where WinAnsi and Latin-1 coincide.
const HELVETICA_LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333, // nbsp..macron
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611, // degree..questiondown
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // Agrave..Idieresis
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // Eth..germandbls
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278, // agrave..idieresis
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500, // eth..ydieresis
];

const HELVETICA_BOLD_LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333, // nbsp..macron
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611, // degree..questiondown
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // Agrave..Idieresis
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // Eth..germandbls
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278, // agrave..idieresis
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556, // eth..ydieresis
];

// WinAnsi code points 0x80..=0x9F, keyed by the Unicode scalar they encode, as
// (Helvetica, Helvetica-Bold) widths.
fn winansi_special_widths(ch: char) -> Option<(u16, u16)> {
    let widths = match ch {
        '\u{20ac}' => (556, 556),   // Euro
        '\u{201a}' => (222, 278),   // quotesinglbase
        '\u{0192}' => (556, 556),   // florin
        '\u{201e}' => (333, 500),   // quotedblbase
        '\u{2026}' => (1000, 1000), // ellipsis
        '\u{2020}' => (556, 556),   // dagger
        '\u{2021}' => (556, 556),   // daggerdbl
        '\u{02c6}' => (333, 333),   // circumflex
        '\u{2030}' => (1000, 1000), // perthousand
        '\u{0160}' => (667, 667),   // Scaron
        '\u{2039}' => (333, 333),   // guilsinglleft
        '\u{0152}' => (1000, 1000), // OE
        '\u{017d}' => (611, 611),   // Zcaron
        '\u{2018}' => (222, 278),   // quoteleft
        '\u{2019}' => (222, 278),   // quoteright
        '\u{201c}' => (333, 500),   // quotedblleft
        '\u{201d}' => (333, 500),   // quotedblright
        '\u{2022}' => (350, 350),   // bullet
        '\u{2013}' => (556, 556),   // endash
        '\u{2014}' => (1000, 1000), // emdash
        '\u{02dc}' => (333, 333),   // tilde
        '\u{2122}' => (1000, 1000), // trademark
        '\u{0161}' => (500, 556),   // scaron
        '\u{203a}' => (333, 333),   // guilsinglright
        '\u{0153}' => (944, 944),   // oe
        '\u{017e}' => (500, 500),   // zcaron
        '\u{0178}' => (667, 667),   // Ydieresis
        _ => return None,
    };
    Some(widths)
}

/// The standard faces the report draws with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StandardFont {
    /// Regular Helvetica, used for info lines and table data.
    #[default]
    Helvetica,
    /// Helvetica-Bold, used for the title and the table header.
    HelveticaBold,
}

impl StandardFont {
    /// Every face the report may reference, in registration order.
    pub const ALL: [StandardFont; 2] = [StandardFont::Helvetica, StandardFont::HelveticaBold];

    /// PostScript name of the face.
    pub fn postscript_name(self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// The matching `printpdf` built-in font.
    pub fn builtin(self) -> BuiltinFont {
        match self {
            Self::Helvetica => BuiltinFont::Helvetica,
            Self::HelveticaBold => BuiltinFont::HelveticaBold,
        }
    }

    fn ascii_widths(self) -> &'static [u16; 95] {
        match self {
            Self::Helvetica => &HELVETICA_WIDTHS,
            Self::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    fn latin1_widths(self) -> &'static [u16; 96] {
        match self {
            Self::Helvetica => &HELVETICA_LATIN1_WIDTHS,
            Self::HelveticaBold => &HELVETICA_BOLD_LATIN1_WIDTHS,
        }
    }

    /// Advance width of a single character in 1/1000 em.
    ///
    /// Covers every printable character of the WinAnsi encoding; anything else is measured with
    /// a fixed fallback width.
    pub fn glyph_width(self, ch: char) -> u16 {
        let code = ch as u32;
        let tabulated = if code >= FIRST_LATIN1_CHAR {
            self.latin1_widths()
                .get((code - FIRST_LATIN1_CHAR) as usize)
                .copied()
        } else {
            self.ascii_widths()
                .get(code.wrapping_sub(FIRST_CHAR) as usize)
                .copied()
        };

        tabulated
            .or_else(|| {
                winansi_special_widths(ch).map(|(regular, bold)| match self {
                    Self::Helvetica => regular,
                    Self::HelveticaBold => bold,
                })
            })
            .unwrap_or(FALLBACK_GLYPH_WIDTH)
    }

    /// Rendered width of `text` in points at the given font size.
    pub fn string_width(self, text: &str, font_size: f64) -> f64 {
        let units: u32 = text.chars().map(|ch| u32::from(self.glyph_width(ch))).sum();
        f64::from(units) * font_size / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::StandardFont;

    #[test]
    fn empty_string_has_no_width() {
        assert_eq!(StandardFont::Helvetica.string_width("", 12.0), 0.0);
    }

    #[test]
    fn digits_share_a_common_width() {
        for font in StandardFont::ALL {
            assert_eq!(font.string_width("0123456789", 10.0), 55.6);
        }
    }

    #[test]
    fn bold_title_width_matches_afm_metrics() {
        // S P E C H T L A B
        let expected_units = [667, 667, 667, 722, 722, 611, 611, 722, 722]
            .iter()
            .sum::<u32>();
        let width = StandardFont::HelveticaBold.string_width("SPECHTLAB", 28.0);
        assert!((width - f64::from(expected_units) * 0.028).abs() < 1e-9);
    }

    #[test]
    fn characters_outside_winansi_use_fallback() {
        assert_eq!(StandardFont::Helvetica.glyph_width('\u{0100}'), 556);
        assert_eq!(StandardFont::Helvetica.glyph_width('\u{2211}'), 556);
        assert_eq!(StandardFont::Helvetica.glyph_width('\n'), 556);
        assert_eq!(StandardFont::HelveticaBold.glyph_width('\u{7f}'), 556);
    }

    #[test]
    fn latin1_units_and_umlauts_use_afm_widths() {
        assert_eq!(StandardFont::Helvetica.glyph_width('°'), 400);
        assert_eq!(StandardFont::Helvetica.glyph_width('²'), 333);
        assert_eq!(StandardFont::Helvetica.glyph_width('³'), 333);
        assert_eq!(StandardFont::Helvetica.glyph_width('µ'), 556);
        assert_eq!(StandardFont::Helvetica.glyph_width('Ö'), 778);
        assert_eq!(StandardFont::Helvetica.glyph_width('ß'), 611);
        assert_eq!(StandardFont::Helvetica.glyph_width('ÿ'), 500);
        assert_eq!(StandardFont::HelveticaBold.glyph_width('Ä'), 722);
        assert_eq!(StandardFont::HelveticaBold.glyph_width('µ'), 611);
        assert_eq!(StandardFont::HelveticaBold.glyph_width('ä'), 556);
    }

    #[test]
    fn winansi_specials_are_mapped_by_unicode_scalar() {
        assert_eq!(StandardFont::Helvetica.glyph_width('€'), 556);
        assert_eq!(StandardFont::Helvetica.glyph_width('–'), 556);
        assert_eq!(StandardFont::Helvetica.glyph_width('‰'), 1000);
        assert_eq!(StandardFont::Helvetica.glyph_width('’'), 222);
        assert_eq!(StandardFont::HelveticaBold.glyph_width('’'), 278);
        assert_eq!(StandardFont::HelveticaBold.glyph_width('š'), 556);
    }

    #[test]
    fn unit_labels_are_measured_per_glyph() {
        // T e m p ' ' ° C
        let expected = [611, 556, 833, 556, 278, 400, 722].iter().sum::<u32>();
        let width = StandardFont::Helvetica.string_width("Temp °C", 12.0);
        assert!((width - f64::from(expected) * 0.012).abs() < 1e-9);
    }

    #[test]
    fn tables_cover_the_printable_range() {
        assert_eq!(StandardFont::Helvetica.glyph_width(' '), 278);
        assert_eq!(StandardFont::Helvetica.glyph_width('~'), 584);
        assert_eq!(StandardFont::HelveticaBold.glyph_width('~'), 584);
        assert_eq!(StandardFont::HelveticaBold.glyph_width('W'), 944);
    }
}
