//! Basic usage: random bytes and identifiers.
//!
//! Run with:
//!     cargo run --example basic

use randpool::{Alphabet, IdConfig, IdGenerator, RandomSupplier, generate_id};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut supplier = RandomSupplier::new();

    // Same length twice: same buffer, new content
    for _ in 0..2 {
        let bytes = supplier.random(16)?;
        println!("random(16) at {:p}: {:02x?}", bytes.as_ptr(), &bytes[..]);
    }

    // Above the threshold: allocated per call
    let large = supplier.random(1024)?;
    println!("random(1024): {} bytes, cached={}", large.len(), large.is_cached());
    drop(large);

    println!("\nURL-safe ids:");
    for _ in 0..5 {
        println!("  {}", generate_id(&mut supplier, 21)?);
    }

    let hex = Alphabet::new("0123456789abcdef")?;
    println!("\nhex via modulus: {}", hex.encode(&supplier.random(16)?));

    let generator = IdGenerator::new(IdConfig::new(12)?.with_alphabet(Alphabet::new("0123456789")?))?;
    println!("numeric id:      {}", generator.generate(&mut supplier)?);

    println!("\ncached lengths: {:?}", supplier.pool().cached_lengths());

    Ok(())
}
