extern crate bitcrypto;
extern crate chain;
extern crate criterion;

use bitcrypto::{FromStr, SHA256D};
use chain::merkle_root;
use criterion::{criterion_group, criterion_main, Criterion};

fn prepare_hashes(num: u32) -> Vec<SHA256D> {
	let mut vec = Vec::new();
	let h1 = SHA256D::from_str("1da63abbc8cc611334a753c4c31de14d19839c65b2b284202eaf3165861fb58d").unwrap();
	let h2 = SHA256D::from_str("26c6a6f18d13d2f0787c1c0f3c5e23cf5bc8b3de685dd1923ae99f44c5341c0c").unwrap();
	let h3 = SHA256D::from_str("513507fa209db823541caf7b9742bb9999b4a399cf604ba8da7037f3acced649").unwrap();
	for v in 0..num {
		match v % 3 {
			0 => vec.push(h1),
			1 => vec.push(h2),
			2 => vec.push(h3),
			_ => (),
		}
	}
	vec
}

fn bench_merkle_root_with_5_hashes(c: &mut Criterion) {
	let vec = prepare_hashes(5);
	c.bench_function("bench_merkle_root_with_5_hashes", |b| b.iter(|| merkle_root(&vec)));
}

fn bench_merkle_root_with_1000_hashes(c: &mut Criterion) {
	let vec = prepare_hashes(1000);
	c.bench_function("bench_merkle_root_with_1000_hashes", |b| b.iter(|| merkle_root(&vec)));
}

criterion_group!(benches, bench_merkle_root_with_5_hashes, bench_merkle_root_with_1000_hashes);
criterion_main!(benches);
