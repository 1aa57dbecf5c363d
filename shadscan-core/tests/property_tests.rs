//! Property tests over generated volume text

use proptest::prelude::*;
use shadscan_core::*;

fn volume_text() -> impl Strategy<Value = String> {
    let chars = prop::sample::select(vec![
        'ཀ', 'ཁ', 'ག', 'ང', 'ས', 'ོ', '་', '་', '།', '།', '༎', '༄', '༅', '༔', '_', ' ', '\n',
        '\n', '-', 'a',
    ]);
    prop::collection::vec(chars, 0..200).prop_map(|cs| cs.into_iter().collect())
}

fn segmenter() -> ParagraphSegmenter<TibetanSegmenter> {
    AnalysisConfig::default().segmenter()
}

proptest! {
    #[test]
    fn segmentation_is_deterministic(text in volume_text()) {
        let seg = segmenter();
        prop_assert_eq!(seg.segment(&text), seg.segment(&text));
    }

    #[test]
    fn every_token_is_exactly_one_kind(text in volume_text()) {
        let tokens = segmenter().tokens(&text);
        let puncts = tokens.iter().filter(|t| t.as_punct().is_some()).count();
        let digests = tokens.iter().filter(|t| t.as_paragraph().is_some()).count();
        prop_assert_eq!(puncts + digests, tokens.len());
    }

    #[test]
    fn punctuation_tokens_are_pure(text in volume_text()) {
        let set = PunctuationSet::tibetan();
        for token in segmenter().tokens(&text) {
            if let Token::Punct { text } = &token {
                prop_assert!(set.is_punct(text));
            }
        }
    }

    #[test]
    fn digests_are_well_formed(text in volume_text()) {
        for token in segmenter().tokens(&text) {
            if let Token::Paragraph(d) = token {
                prop_assert!(d.count >= 1);
                if d.count == 1 {
                    prop_assert_eq!(&d.first, &d.last);
                }
                prop_assert!(!d.first.is_empty());
            }
        }
    }

    #[test]
    fn dot_view_matches_sequence(text in volume_text()) {
        let tokens = segmenter().tokens(&text);
        let view = dots::dot_view(&tokens);
        prop_assert_eq!(view.len(), tokens.len());

        for (glyph, token) in view.iter().zip(&tokens) {
            match token {
                Token::Punct { text } => prop_assert_eq!(glyph, text),
                Token::Paragraph(d) => {
                    let hyphens = glyph.chars().filter(|&c| c == '-').count();
                    prop_assert_eq!(hyphens, 2 * (d.count / 2));
                    prop_assert_eq!(glyph.trim_matches('-'), d.count.to_string());
                }
            }
        }

        let set = PunctuationSet::tibetan();
        let view_puncts: Vec<&String> = view.iter().filter(|g| set.is_punct(g)).collect();
        let seq_puncts: Vec<&String> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Punct { text } => Some(text),
                Token::Paragraph(_) => None,
            })
            .collect();
        prop_assert_eq!(view_puncts, seq_puncts);
    }

    #[test]
    fn frequency_totals_and_order(texts in prop::collection::vec(volume_text(), 0..6)) {
        let seg = segmenter();
        let volumes = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Volume::new(format!("v{i}"), format!("v{i}.txt"), seg.tokens(t)))
            .collect();
        let collection = Collection::new(volumes);
        let table = FrequencyTable::from_collection(&collection);

        prop_assert_eq!(table.total(), collection.punct_token_count());

        let sorted = table.sorted();
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn concordance_counts_every_rare_occurrence(
        texts in prop::collection::vec(volume_text(), 1..5),
        threshold in 1usize..4,
    ) {
        let seg = segmenter();
        let mut raw = std::collections::HashMap::new();
        let volumes = texts
            .iter()
            .enumerate()
            .map(|(i, t)| {
                raw.insert(format!("v{i}"), t.clone());
                Volume::new(format!("v{i}"), format!("v{i}.txt"), seg.tokens(t))
            })
            .collect();
        let collection = Collection::new(volumes);
        let table = FrequencyTable::from_collection(&collection);

        let concs = ConcordanceBuilder::new(raw)
            .concord_rare(&collection, &table, threshold)
            .unwrap();
        for conc in concs {
            let scanned: usize = collection.volumes.iter().map(|v| v.occurrences(&conc.punct)).sum();
            prop_assert_eq!(conc.entries.len(), scanned);
            prop_assert_eq!(conc.frequency, scanned);
            // punctuation tokens come straight from the raw text
            prop_assert!(conc.entries.iter().all(|e| e.locator.is_some()));
        }
    }
}
