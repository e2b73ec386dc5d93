// Copyright (c) 2023 Bastiaan Marinus van de Weerd


/// Applies `step` `n` times, skipping ahead once a `fingerprint` repeats.
pub(crate) fn project<S: Clone, K: std::hash::Hash + Eq>(
	mut state: S,
	n: usize,
	mut step: impl FnMut(&mut S),
	fingerprint: impl Fn(&S) -> K,
) -> S {
	use std::collections::{HashMap, hash_map::Entry};

	// Index `i` holds the state after `i + 1` steps
	let mut seen = HashMap::new();
	let mut history = vec![];

	for i in 0..n {
		step(&mut state);
		match seen.entry(fingerprint(&state)) {
			Entry::Occupied(entry) => {
				let prev = *entry.get();
				let len = i - prev;
				#[cfg(LOGGING)]
				println!("cycle of {len} after {prev} steps");
				return history.swap_remove(prev + (n - 1 - prev) % len)
			}
			Entry::Vacant(entry) => {
				entry.insert(i);
				history.push(state.clone());
			}
		}
	}

	state
}


#[cfg(test)]
mod tests {
	use super::project;

	fn step(x: &mut u32) {
		*x = (*x * *x + 7) % 1009;
	}

	#[test]
	fn matches_naive() {
		let mut naive = 2;
		for n in 0..=3000 {
			assert_eq!(project(2, n, step, |x| *x), naive, "n = {n}");
			step(&mut naive);
		}
	}

	#[test]
	fn immediate_fixed_point() {
		assert_eq!(project(5u8, 1_000_000_000, |x| *x = 0, |x| *x), 0);
	}

	#[test]
	fn counts_steps() {
		let mut steps = 0;
		project(0u8, 1_000_000_000, |x| { *x = (*x + 1) % 10; steps += 1 }, |x| *x);
		assert_eq!(steps, 11);
	}
}
