//! Cross-thread behaviour of shared generators and the table cache.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use lds_gen::batch::{par_halton, par_pop_batch};
use lds_gen::config::TableConfig;
use lds_gen::math::TableCache;
use lds_gen::sequence::{Halton, VdCorput};
use lds_gen::sphere_n::SphereN;
use lds_gen::sync::Shared;
use lds_gen::LowDiscrepancySequence;
use rayon::prelude::*;

const THREADS: usize = 8;
const ITERATIONS: usize = 1000;

#[test]
fn test_shared_vdcorput_yields_distinct_values() {
    let shared = Shared::new(VdCorput::new(2).unwrap());
    shared.reseed(0);

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                (0..ITERATIONS)
                    .map(|_| shared.pop())
                    .collect::<Vec<f64>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for v in handle.join().unwrap() {
            assert!((0.0..1.0).contains(&v), "value {} out of range", v);
            assert!(seen.insert(v.to_bits()), "duplicate value {}", v);
        }
    }
    assert_eq!(seen.len(), THREADS * ITERATIONS);

    // the union is exactly the first THREADS * ITERATIONS points
    let mut reference = VdCorput::new(2).unwrap();
    for v in reference.pop_batch(THREADS * ITERATIONS) {
        assert!(seen.contains(&v.to_bits()));
    }
}

#[test]
fn test_shared_halton_from_rayon_pool() {
    let shared = Shared::new(Halton::new([2, 3]).unwrap());
    let points: Vec<[f64; 2]> = (0..THREADS * ITERATIONS)
        .into_par_iter()
        .map(|_| shared.pop())
        .collect();

    let distinct: HashSet<_> = points
        .iter()
        .map(|[x, y]| (x.to_bits(), y.to_bits()))
        .collect();
    assert_eq!(distinct.len(), THREADS * ITERATIONS);
}

#[test]
fn test_reseed_during_pops_keeps_values_valid() {
    let shared = Shared::new(SphereN::new(&[2, 3, 5, 7]).unwrap());
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    if i % 50 == 0 {
                        shared.reseed(t as u64);
                    }
                    let p = shared.pop();
                    let norm: f64 = p.iter().map(|x| x * x).sum();
                    assert!((norm - 1.0).abs() < 1e-9);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_pop_batch_is_contiguous_under_contention() {
    let shared = Shared::new(VdCorput::new(2).unwrap());
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || shared.with(|g| (g.count(), g.pop_batch(64))))
        })
        .collect();

    for handle in handles {
        let (start, batch) = handle.join().unwrap();
        let mut reference = VdCorput::new(2).unwrap();
        reference.reseed(start);
        assert_eq!(batch, reference.pop_batch(64));
    }
}

#[test]
fn test_concurrent_table_builds_agree() {
    let cache = Arc::new(TableCache::new(TableConfig::default()));
    let tables: Vec<Arc<[f64]>> = (0..THREADS * 4)
        .into_par_iter()
        .map(|i| cache.get(8 + i % 4))
        .collect();

    for (i, table) in tables.iter().enumerate() {
        assert!(Arc::ptr_eq(table, &cache.get(8 + i % 4)));
    }

    let fresh = TableCache::new(TableConfig::default());
    for n in 8..12 {
        assert_eq!(&cache.get(n)[..], &fresh.get(n)[..]);
    }
}

#[test]
fn test_samplers_share_one_cache() {
    let cache = Arc::new(TableCache::new(TableConfig::default()));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let mut sgen = SphereN::with_cache(&[2, 3, 5, 7, 11, 13], cache).unwrap();
                sgen.reseed(0);
                sgen.pop_batch(10)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for r in &results[1..] {
        assert_eq!(r, &results[0]);
    }
}

#[test]
fn test_parallel_bulk_equals_sequential() {
    let bases = [2, 3, 5];
    let n = 20_000;
    let mut hgen = lds_gen::sequence::HaltonN::new(&bases).unwrap();
    assert_eq!(par_halton(&bases, 0, n).unwrap(), hgen.pop_batch(n));

    let mut a = SphereN::new(&[3, 5, 7, 11]).unwrap();
    let mut b = a.clone();
    a.reseed(42);
    b.reseed(42);
    assert_eq!(par_pop_batch(&mut a, n), b.pop_batch(n));
}
