#![no_main]

use libfuzzer_sys::fuzz_target;
use randpool::Alphabet;

fuzz_target!(|input: (String, Vec<u8>)| {
    let (symbols, bytes) = input;

    let Ok(alphabet) = Alphabet::new(&symbols) else {
        return;
    };

    // Verify: accepted alphabets are 2..=256 distinct symbols
    assert!((2..=256).contains(&alphabet.len()));

    let encoded = alphabet.encode(&bytes);

    // Verify: one symbol per byte
    assert_eq!(encoded.chars().count(), bytes.len());

    // Verify: every symbol is the byte modulo the alphabet size
    for (b, c) in bytes.iter().zip(encoded.chars()) {
        assert_eq!(alphabet.symbols()[*b as usize % alphabet.len()], c);
    }

    // Verify: mask covers every index
    assert!(alphabet.mask() as usize >= alphabet.len() - 1);
});
