//! Walks through puts, reads and one eviction, printing the rank order.

use lfucache::config::LfuCacheConfig;
use lfucache::{CacheMetrics, LfuCache};

fn main() {
    println!("LFU Cache Walkthrough");
    println!("=====================");
    println!("Capacity 3. We add four fruits, read 'apple' a few times,");
    println!("then add 'elderberry' to see which entry is evicted.\n");

    let mut cache = LfuCache::init(LfuCacheConfig { capacity: 3 }, None);

    let data = vec![("apple", 1), ("banana", 2), ("cherry", 3), ("date", 4)];
    for (key, value) in &data {
        cache.put(*key, *value);
        println!("put {key:<10} -> {}", render(&cache));
    }

    for _ in 0..3 {
        let _ = cache.get(&"apple");
    }
    let _ = cache.get(&"date");
    println!("\nafter reads   -> {}", render(&cache));

    cache.put("elderberry", 5);
    println!("put elderberry -> {}", render(&cache));

    match cache.get(&"cherry") {
        Ok(value) => println!("\ncherry is still cached: {value}"),
        Err(err) => println!("\ncherry: {err}"),
    }

    println!("\nMetrics:");
    for (name, value) in cache.metrics() {
        println!("  {name:<28} {value}");
    }
}

fn render(cache: &LfuCache<&'static str, i32>) -> String {
    cache
        .iter()
        .map(|(k, v)| format!("{k}={v}(f{})", cache.frequency(k).unwrap_or(0)))
        .collect::<Vec<_>>()
        .join(" ")
}
