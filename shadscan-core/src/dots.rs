//! "With dots" view: the punctuation skeleton of a volume
//!
//! Punctuation is kept verbatim. A paragraph of `n` syllables becomes
//! `n / 2` hyphens, the number `n`, then `n / 2` hyphens again, so the
//! width of the glyph tracks the length of the paragraph.

use crate::collection::Collection;
use crate::token::Token;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Glyph for a paragraph of `count` syllables
pub fn dot_glyph(count: usize) -> String {
    let dashes = "-".repeat(count / 2);
    format!("{dashes}{count}{dashes}")
}

/// Dot view of one token sequence
pub fn dot_view(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|token| match token {
            Token::Punct { text } if text.is_empty() => None,
            Token::Punct { text } => Some(text.clone()),
            Token::Paragraph(digest) => Some(dot_glyph(digest.count)),
        })
        .collect()
}

/// Space-joined line written to a `_with_dots` file
pub fn render_line(view: &[String]) -> String {
    view.join(" ")
}

/// Dot views of every volume, keyed by volume name, in collection order
pub fn collection_dots(collection: &Collection) -> Vec<(String, Vec<String>)> {
    #[cfg(feature = "parallel")]
    let iter = collection.volumes.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = collection.volumes.iter();

    iter.map(|volume| (volume.name.clone(), dot_view(&volume.tokens)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Volume;

    #[test]
    fn test_glyph_shapes() {
        assert_eq!(dot_glyph(1), "1");
        assert_eq!(dot_glyph(2), "-2-");
        assert_eq!(dot_glyph(3), "-3-");
        assert_eq!(dot_glyph(7), "---7---");
        assert_eq!(dot_glyph(12), "------12------");
    }

    #[test]
    fn test_view_keeps_punctuation_order() {
        let tokens = vec![
            Token::punct("༄༅།"),
            Token::punct("།"),
            Token::paragraph("བཅོམ", 5, "ལོ"),
            Token::punct("།"),
        ];
        assert_eq!(dot_view(&tokens), vec!["༄༅།", "།", "--5--", "།"]);
    }

    #[test]
    fn test_empty_punctuation_skipped() {
        let tokens = vec![Token::punct(""), Token::punct("།")];
        assert_eq!(dot_view(&tokens), vec!["།"]);
    }

    #[test]
    fn test_render_line() {
        let view = vec!["1".to_string(), "།".to_string(), "-2-".to_string()];
        assert_eq!(render_line(&view), "1 ། -2-");
        assert_eq!(render_line(&[]), "");
    }

    #[test]
    fn test_collection_dots_in_volume_order() {
        let collection = Collection::new(vec![
            Volume::new("b", "b.txt", vec![Token::punct("།")]),
            Volume::new("a", "a.txt", vec![Token::paragraph("ཀ", 4, "ཁ")]),
        ]);
        let dots = collection_dots(&collection);
        assert_eq!(
            dots,
            vec![
                ("a".to_string(), vec!["--4--".to_string()]),
                ("b".to_string(), vec!["།".to_string()]),
            ]
        );
    }
}
