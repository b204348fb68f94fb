use sics::{compress, compress_symbols, decompress, decompress_symbols, Code, SicsDecoder};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_text_roundtrip(input in any::<String>()) {
        let (stream, index) = compress(&input).unwrap();
        prop_assert_eq!(decompress(&stream, &index).unwrap(), input);
    }

    #[test]
    fn test_symbol_roundtrip(input in prop::collection::vec(any::<u8>(), 0..2000)) {
        let (stream, index) = compress_symbols(&input).unwrap();
        prop_assert_eq!(decompress_symbols(&stream, &index).unwrap(), input);
    }

    #[test]
    fn test_codes_are_gapless_from_zero(input in "[a-z0-9 .,]{0,400}") {
        let (_, index) = compress(&input).unwrap();
        let ranks: Vec<usize> = index.entries().iter().map(|(code, _)| code.rank()).collect();
        prop_assert_eq!(ranks, (0..index.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_most_frequent_gets_zero(input in "[a-e]{1,200}") {
        let (_, index) = compress(&input).unwrap();
        let count = |c: char| input.chars().filter(|&x| x == c).count();
        let top = *index.symbol_of("0").unwrap();
        prop_assert!(input.chars().all(|c| count(c) <= count(top)));
    }

    #[test]
    fn test_stream_length_matches_code_lengths(input in any::<String>()) {
        let (stream, index) = compress(&input).unwrap();
        let expected: usize = input.chars().map(|c| index.code_of(&c).unwrap().nibbles()).sum();
        prop_assert_eq!(stream.len(), expected);
    }

    #[test]
    fn test_decode_garbage_never_panics(input in prop::collection::vec(any::<u8>(), 0..64), garbage in ".{0,64}") {
        let (_, index) = compress_symbols(&input).unwrap();
        let _ = SicsDecoder::new(&index).decode(&garbage);
    }

    #[test]
    fn test_stepping_agrees_with_rank(steps in 0usize..500) {
        let mut code = Code::zero();
        for _ in 0..steps {
            code = sics::increment(&code);
        }
        prop_assert_eq!(code, Code::from_rank(steps));
    }
}
