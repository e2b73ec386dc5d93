// Copyright (c) 2023 Bastiaan Marinus van de Weerd


pub(crate) fn gcd(mut a: u64, mut b: u64) -> u64 {
	while b != 0 { (a, b) = (b, a % b) }
	a
}

/// Returns `None` on overflow.
pub(crate) fn lcm(a: u64, b: u64) -> Option<u64> {
	if a == 0 || b == 0 { return Some(0) }
	(a / gcd(a, b)).checked_mul(b)
}

pub(crate) fn lcm_all(numbers: impl IntoIterator<Item = u64>) -> Option<u64> {
	numbers.into_iter().try_fold(1, lcm)
}


#[cfg(test)]
mod tests {
	use {test_case::test_case, super::{gcd, lcm, lcm_all}};

	#[test_case(12, 18 => 6)]
	#[test_case(17, 5 => 1)]
	#[test_case(0, 9 => 9)]
	#[test_case(3907, 3907 => 3907)]
	fn gcd_of(a: u64, b: u64) -> u64 {
		gcd(a, b)
	}

	#[test_case(4, 6 => Some(12))]
	#[test_case(3767, 4019 => Some(3767 * 4019))]
	#[test_case(u64::MAX, 2 => None ; "overflow")]
	fn lcm_of(a: u64, b: u64) -> Option<u64> {
		lcm(a, b)
	}

	#[test]
	fn lcm_times_gcd() {
		for a in 1..60 {
			for b in 1..60 {
				assert_eq!(lcm(a, b).unwrap() * gcd(a, b), a * b, "{a}, {b}");
			}
		}
	}

	#[test]
	fn lcm_all_is_order_independent() {
		use itertools::Itertools as _;
		let numbers = [4, 6, 10, 21, 9];
		for permutation in numbers.into_iter().permutations(numbers.len()) {
			assert_eq!(lcm_all(permutation), Some(1260));
		}
		assert_eq!(lcm_all([]), Some(1));
		assert_eq!(lcm_all([u64::MAX, u64::MAX - 1]), None);
	}
}
