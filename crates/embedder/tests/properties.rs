//! Layout properties of generated declarations over arbitrary resources.

use bytembed_embedder::{embed_reader, EmbedConfig, LengthStyle};
use proptest::prelude::*;

fn generate(data: &[u8], config: &EmbedConfig) -> String {
    let mut out = Vec::new();
    let n = embed_reader("res", data, &mut out, config).unwrap();
    assert_eq!(n, data.len() as u64);
    String::from_utf8(out).unwrap()
}

/// Lines between the opening `{` line and the closing `};`.
fn body_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().collect();
    let close = lines.iter().position(|l| *l == "};").unwrap();
    lines[1..close].to_vec()
}

proptest! {
    #[test]
    fn entry_count_matches_input(data in proptest::collection::vec(any::<u8>(), 0..600)) {
        let text = generate(&data, &EmbedConfig::default());
        let entries: Vec<&str> = body_lines(&text)
            .into_iter()
            .flat_map(|line| line.split_terminator(", "))
            .collect();

        prop_assert_eq!(entries.len(), data.len());
        for (entry, byte) in entries.iter().zip(&data) {
            prop_assert_eq!(*entry, format!("0x{byte:02x}"));
        }
    }

    #[test]
    fn lines_hold_at_most_one_group(
        data in proptest::collection::vec(any::<u8>(), 0..600),
        per_line in 1usize..32,
    ) {
        let config = EmbedConfig { entries_per_line: per_line, ..EmbedConfig::default() };
        let text = generate(&data, &config);
        let lines = body_lines(&text);

        prop_assert_eq!(lines.len(), data.len().div_ceil(per_line));
        for (i, line) in lines.iter().enumerate() {
            let expected = if i + 1 == lines.len() && data.len() % per_line != 0 {
                data.len() % per_line
            } else {
                per_line
            };
            prop_assert_eq!(line.matches("0x").count(), expected);
            prop_assert!(line.ends_with(", "));
        }
    }

    #[test]
    fn literal_length_equals_input_size(
        data in proptest::collection::vec(any::<u8>(), 0..2048),
        chunk_size in 1usize..512,
    ) {
        let config = EmbedConfig { chunk_size, length: LengthStyle::Literal, ..EmbedConfig::default() };
        let text = generate(&data, &config);
        let expected = format!("}};\nstatic const size_t res_len = {};\n\n", data.len());
        prop_assert!(text.ends_with(&expected));
    }
}
