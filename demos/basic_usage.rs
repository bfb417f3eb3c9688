//! Basic usage examples for bloom64

use bloom64::{BloomFilter, Fnv1aHash, XxHash};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== bloom64 Examples ===\n");

    // Example 1: insert and query
    println!("1. Membership queries:");
    let mut filter = BloomFilter::new(Box::new(Fnv1aHash), 1000, 8)?;

    let fruit = ["apple", "banana", "cherry", "durian", "elderberry"];
    for item in &fruit {
        filter.insert(item);
    }

    for item in &fruit {
        println!("  {:12} in filter: {}", item, filter.contains(item));
    }
    for item in &["fig", "grape", "honeydew"] {
        println!("  {:12} in filter: {}", item, filter.contains(item));
    }

    println!("  {}", filter.stats());
    println!();

    // Example 2: swapping the hash function
    println!("2. Pluggable hash function:");
    let mut filter = BloomFilter::new(Box::new(XxHash::with_seed(42)), 1000, 8)?;

    for item in &fruit {
        filter.insert(item);
    }
    println!("  hash: {}", filter.hash_name());
    println!("  apple in filter: {}", filter.contains("apple"));
    println!();

    // Example 3: observed false-positive rate
    println!("3. False-positive rate at budget:");
    let n = 10_000;
    let mut filter = BloomFilter::new(Box::new(Fnv1aHash), n, 8)?;
    for i in 0..n {
        filter.insert(format!("member_{}", i));
    }

    let probes = 10_000;
    let false_positives = (0..probes)
        .filter(|i| filter.contains(format!("outsider_{}", i)))
        .count();
    println!(
        "  {} of {} never-inserted keys reported present ({:.3}%)",
        false_positives,
        probes,
        100.0 * false_positives as f64 / probes as f64
    );
    println!("  estimated FPR from load factor: {:.5}", filter.estimated_fpr());

    Ok(())
}
