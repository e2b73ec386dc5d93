// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use crate::grid::Dir;


#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub(crate) struct Vec2 { pub(crate) x: f64, pub(crate) y: f64 }

impl Vec2 {
	pub(crate) fn new(x: f64, y: f64) -> Self {
		Vec2 { x, y }
	}
}

impl std::ops::Add for Vec2 {
	type Output = Vec2;
	fn add(self, other: Vec2) -> Vec2 { Vec2::new(self.x + other.x, self.y + other.y) }
}

impl std::ops::Sub for Vec2 {
	type Output = Vec2;
	fn sub(self, other: Vec2) -> Vec2 { Vec2::new(self.x - other.x, self.y - other.y) }
}

impl std::ops::Neg for Vec2 {
	type Output = Vec2;
	fn neg(self) -> Vec2 { Vec2::new(-self.x, -self.y) }
}

impl std::ops::Mul<f64> for Vec2 {
	type Output = Vec2;
	fn mul(self, scalar: f64) -> Vec2 { Vec2::new(scalar * self.x, scalar * self.y) }
}

impl std::ops::Mul<Vec2> for f64 {
	type Output = Vec2;
	fn mul(self, vector: Vec2) -> Vec2 { vector * self }
}

impl From<Dir> for Vec2 {
	fn from(dir: Dir) -> Self {
		let [dx, dy] = dir.offset();
		Vec2::new(dx as f64, dy as f64)
	}
}


pub(crate) struct Polygon(pub(crate) Vec<Vec2>);

impl Polygon {
	/// Signed area per the shoelace formula; positive when the points run
	/// clockwise on a Y-down plane.
	pub(crate) fn area(&self) -> f64 {
		let points = &self.0;
		let n = points.len();
		if n < 3 { return 0.0 }
		(0..n)
			.map(|i| points[i].x * (points[(i + 1) % n].y - points[(i + n - 1) % n].y))
			.sum::<f64>() / 2.0
	}

	pub(crate) fn is_clockwise(&self) -> bool {
		self.area() >= 0.0
	}
}


#[cfg(test)]
mod tests {
	use {test_case::test_case, super::{Polygon, Vec2}};

	fn polygon(points: &[[f64; 2]]) -> Polygon {
		Polygon(points.iter().map(|&[x, y]| Vec2::new(x, y)).collect())
	}

	#[test_case(&[[0.0, 0.0], [2.0, 0.0], [2.0, 3.0], [0.0, 3.0]] => 6.0 ; "clockwise rectangle")]
	#[test_case(&[[0.0, 0.0], [0.0, 3.0], [2.0, 3.0], [2.0, 0.0]] => -6.0 ; "counterclockwise rectangle")]
	#[test_case(&[[0.5, 0.5], [4.5, 0.5], [0.5, 2.5]] => 4.0 ; "triangle")]
	#[test_case(&[[1.0, 1.0], [2.0, 2.0]] => 0.0 ; "degenerate")]
	fn area(points: &[[f64; 2]]) -> f64 {
		polygon(points).area()
	}

	#[test]
	fn orientation() {
		let square = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
		assert!(polygon(&square).is_clockwise());
		let mut reversed = square;
		reversed.reverse();
		assert!(!polygon(&reversed).is_clockwise());
	}

	#[test]
	fn arithmetic() {
		let [a, b] = [Vec2::new(1.0, 2.0), Vec2::new(0.5, -1.0)];
		assert_eq!(a + b, Vec2::new(1.5, 1.0));
		assert_eq!(a - b, Vec2::new(0.5, 3.0));
		assert_eq!(2.0 * a, a * 2.0);
		assert_eq!(-b, Vec2::new(-0.5, 1.0));
		assert_eq!(Vec2::from(crate::grid::Dir::North), Vec2::new(0.0, -1.0));
	}
}
