//! Symbol distribution of different id strategies.
//!
//! Generates many identifiers per strategy and prints how far each symbol's
//! frequency strays from the mean. An even spread means every symbol is
//! equally likely.
//!
//! Run with:
//!     cargo run --release --example distribution

use std::collections::BTreeMap;
use std::time::Instant;

use randpool::{Alphabet, IdConfig, IdGenerator, RandomSupplier, RandomError, generate_id};

const COUNT: usize = 50_000;

fn report<F>(title: &str, mut make_id: F) -> Result<(), RandomError>
where
    F: FnMut() -> Result<String, RandomError>,
{
    let start = Instant::now();
    let ids = (0..COUNT).map(|_| make_id()).collect::<Result<Vec<_>, _>>()?;
    let elapsed = start.elapsed();

    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for id in &ids {
        for c in id.chars() {
            *counts.entry(c).or_default() += 1;
        }
    }

    let average = counts.values().sum::<usize>() as f64 / counts.len() as f64;
    let (min, max) = counts
        .values()
        .map(|&c| c as f64 / average)
        .fold((f64::MAX, f64::MIN), |(lo, hi), r| (lo.min(r), hi.max(r)));

    println!(
        "{title:<20} {:>12.0} ids/sec   symbols={:<3} min={min:.3} max={max:.3}",
        COUNT as f64 / elapsed.as_secs_f64(),
        counts.len(),
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut supplier = RandomSupplier::new();

    let hex = Alphabet::new("0123456789abcdef")?;
    let base62 = Alphabet::new("0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz")?;
    let base62_generator = IdGenerator::new(IdConfig::new(21)?.with_alphabet(base62.clone()))?;

    report("url", || generate_id(&mut supplier, 21))?;
    report("hex % 16", || Ok(hex.encode(&supplier.random(16)?)))?;
    report("base62 % 62", || Ok(base62.encode(&supplier.random(21)?)))?;
    report("base62 masked", || base62_generator.generate(&mut supplier))?;

    Ok(())
}
