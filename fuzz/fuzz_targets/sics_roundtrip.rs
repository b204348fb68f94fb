#![no_main]
use libfuzzer_sys::fuzz_target;
use sics::{compress, compress_symbols, decompress, SicsDecoder};

fuzz_target!(|data: (String, Vec<u8>, String)| {
    let (text, bytes, garbage) = data;

    let (stream, index) = compress(&text).unwrap();
    assert_eq!(decompress(&stream, &index).unwrap(), text);

    // Arbitrary streams against a real index may fail, but must not panic.
    let (_, byte_index) = compress_symbols(&bytes).unwrap();
    let _ = SicsDecoder::new(&byte_index).decode(&garbage);
    let _ = decompress(&garbage, &index);
});
