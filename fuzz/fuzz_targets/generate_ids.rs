#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand::rngs::StdRng;
use randpool::{Alphabet, IdConfig, IdGenerator, PoolConfig, RandomSupplier, RngEntropy};

fuzz_target!(|input: (String, u8, u16, u64)| {
    let (symbols, size, threshold, seed) = input;

    let Ok(alphabet) = Alphabet::new(&symbols) else {
        return;
    };
    let Ok(config) = IdConfig::new(size as usize) else {
        return;
    };
    let Ok(pool) = PoolConfig::new(threshold as usize) else {
        return;
    };

    let generator = IdGenerator::new(config.with_alphabet(alphabet.clone())).unwrap();
    let mut supplier =
        RandomSupplier::with_config(pool, RngEntropy::new(StdRng::seed_from_u64(seed)));

    for _ in 0..4 {
        let id = generator.generate(&mut supplier).unwrap();

        // Verify: exact size, symbols from the alphabet only
        assert_eq!(id.chars().count(), size as usize);
        assert!(id.chars().all(|c| alphabet.symbols().contains(&c)));
    }

    // Verify: at most the per-round length is cached
    assert!(supplier.pool().len() <= 1);
});
