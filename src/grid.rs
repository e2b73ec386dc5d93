// Copyright (c) 2023 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub(crate) enum Dir { North, East, South, West }

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Axis { NorthSouth, EastWest }

impl Dir {
	pub(crate) const ALL: [Dir; 4] = {
		use Dir::*;
		[North, East, South, West]
	};

	pub(crate) fn index(self) -> usize {
		self as usize
	}

	pub(crate) fn axis(self) -> Axis {
		match self {
			Dir::North | Dir::South => Axis::NorthSouth,
			Dir::East | Dir::West => Axis::EastWest,
		}
	}

	pub(crate) fn opposite(self) -> Dir {
		Dir::ALL[(self.index() + 2) % 4]
	}

	/// Y grows southward.
	pub(crate) fn offset(self) -> [isize; 2] {
		match self {
			Dir::North => [0, -1],
			Dir::East => [1, 0],
			Dir::South => [0, 1],
			Dir::West => [-1, 0],
		}
	}
}


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub(crate) struct Pos { pub(crate) x: isize, pub(crate) y: isize }

impl Pos {
	pub(crate) fn new(x: isize, y: isize) -> Self {
		Pos { x, y }
	}

	pub(crate) fn step(self, dir: Dir) -> Self {
		let [dx, dy] = dir.offset();
		Pos { x: self.x + dx, y: self.y + dy }
	}
}


#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) struct Grid<T> {
	cells: Vec<T>,
	width: usize,
	height: usize,
}

#[allow(dead_code)]
#[derive(Debug)]
pub(crate) enum AxesError { Pair([Dir; 2]), SameAxis(Axis) }

impl<T> Grid<T> {
	pub(crate) fn from_fn(width: usize, height: usize, mut f: impl FnMut(Pos) -> T) -> Self {
		use itertools::iproduct;
		assert!(width > 0 && height > 0, "empty {width}x{height} grid");
		let cells = iproduct!(0..height, 0..width)
			.map(|(y, x)| f(Pos::new(x as isize, y as isize)))
			.collect();
		Grid { cells, width, height }
	}

	pub(crate) fn width(&self) -> usize { self.width }
	pub(crate) fn height(&self) -> usize { self.height }

	pub(crate) fn contains(&self, pos: Pos) -> bool {
		(0..self.width as isize).contains(&pos.x) && (0..self.height as isize).contains(&pos.y)
	}

	fn offset(&self, pos: Pos) -> usize {
		assert!(self.contains(pos), "{pos:?} out of bounds of {}x{} grid", self.width, self.height);
		pos.y as usize * self.width + pos.x as usize
	}

	pub(crate) fn get(&self, pos: Pos) -> &T {
		&self.cells[self.offset(pos)]
	}

	pub(crate) fn set(&mut self, pos: Pos, value: T) {
		let i = self.offset(pos);
		self.cells[i] = value;
	}

	pub(crate) fn swap(&mut self, a: Pos, b: Pos) {
		let [a, b] = [self.offset(a), self.offset(b)];
		self.cells.swap(a, b);
	}

	pub(crate) fn positions(&self) -> impl Iterator<Item = Pos> {
		use itertools::iproduct;
		iproduct!(0..self.height as isize, 0..self.width as isize).map(|(y, x)| Pos::new(x, y))
	}

	pub(crate) fn values(&self) -> impl Iterator<Item = &T> + '_ {
		self.cells.iter()
	}

	pub(crate) fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
		self.cells.chunks(self.width)
	}

	pub(crate) fn columns(&self) -> impl Iterator<Item = impl Iterator<Item = &T> + '_> + '_ {
		(0..self.width).map(move |x| self.cells[x..].iter().step_by(self.width))
	}

	pub(crate) fn transpose(&self) -> Self where T: Clone {
		Grid::from_fn(self.height, self.width, |pos| self[Pos::new(pos.y, pos.x)].clone())
	}

	pub(crate) fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
		Dir::ALL.into_iter().map(move |dir| pos.step(dir)).filter(move |p| self.contains(*p))
	}

	/// Each pair is a start & end direction, `inner` being the fast-varying
	/// one; e.g. `[South, North]` goes from the bottom up.
	pub(crate) fn positions_in_order(&self, inner: [Dir; 2], outer: [Dir; 2])
	-> Result<impl Iterator<Item = Pos>, AxesError> {
		use {either::Either, Dir::*};

		let range = |pair: [Dir; 2]| {
			let len = match pair[0].axis() {
				Axis::NorthSouth => self.height as isize,
				Axis::EastWest => self.width as isize,
			};
			match pair {
				[North, South] | [West, East] => Ok(Either::Left(0..len)),
				[South, North] | [East, West] => Ok(Either::Right((0..len).rev())),
				_ => Err(AxesError::Pair(pair)),
			}
		};

		let axis = inner[0].axis();
		if axis == outer[0].axis() { return Err(AxesError::SameAxis(axis)) }
		let [inner_range, outer_range] = [range(inner)?, range(outer)?];

		Ok(outer_range.flat_map(move |o| inner_range.clone().map(move |i| match axis {
			Axis::NorthSouth => Pos::new(o, i),
			Axis::EastWest => Pos::new(i, o),
		})))
	}

	/// Returns the number of cells written.
	pub(crate) fn flood_fill(&mut self, start: Pos, fill: T, should_fill: impl Fn(&T) -> bool) -> usize
	where T: Clone {
		use std::collections::VecDeque;
		assert!(!should_fill(&fill), "fill value would be filled again");

		let mut queue = VecDeque::from([start]);
		let mut filled = 0;
		while let Some(pos) = queue.pop_front() {
			if !self.contains(pos) || !should_fill(&self[pos]) { continue }
			self[pos] = fill.clone();
			filled += 1;
			queue.extend(self.neighbors(pos));
		}
		filled
	}

	pub(crate) fn copy_with(&self, copy_cell: impl FnMut(&T) -> T) -> Self {
		Grid { cells: self.cells.iter().map(copy_cell).collect(), width: self.width, height: self.height }
	}
}

impl<T> std::ops::Index<Pos> for Grid<T> {
	type Output = T;
	fn index(&self, pos: Pos) -> &T {
		self.get(pos)
	}
}

impl<T> std::ops::IndexMut<Pos> for Grid<T> {
	fn index_mut(&mut self, pos: Pos) -> &mut T {
		let i = self.offset(pos);
		&mut self.cells[i]
	}
}

impl<T: std::fmt::Display> std::fmt::Display for Grid<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (y, row) in self.rows().enumerate() {
			if y > 0 { writeln!(f)? }
			for cell in row { write!(f, "{cell}")? }
		}
		Ok(())
	}
}


pub(crate) mod parsing {
	use super::Grid;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum GridError<E> {
		Cell { line: usize, column: usize, source: E },
		LineLen { line: usize, len: usize, found: usize },
		Empty,
	}

	impl<T> Grid<T> {
		/// Cells are single characters if there is no `separator`.
		pub(crate) fn parse<E>(
			s: &str,
			separator: Option<&str>,
			mut cell: impl FnMut(&str) -> Result<T, E>,
		) -> Result<Self, GridError<E>> {
			use either::Either;

			let mut cells = vec![];
			let mut width = None;
			let mut height = 0;
			for (l, line) in s.lines().enumerate() {
				let tokens = match separator {
					Some(separator) => Either::Left(line.split(separator)),
					None => Either::Right(line.char_indices()
						.map(|(i, c)| &line[i..i + c.len_utf8()])),
				};

				let mut len = 0;
				for (c, token) in tokens.enumerate() {
					cells.push(cell(token)
						.map_err(|source| GridError::Cell { line: l + 1, column: c + 1, source })?);
					len += 1;
				}

				match width {
					None => width = Some(len),
					Some(width) if width != len =>
						return Err(GridError::LineLen { line: l + 1, len: width, found: len }),
					_ => (),
				}
				height += 1;
			}

			match width {
				Some(width) if width > 0 => Ok(Grid { cells, width, height }),
				_ => Err(GridError::Empty),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct SymbolError { pub(crate) found: String }

	impl SymbolError {
		pub(crate) fn new(found: &str) -> Self {
			SymbolError { found: found.to_owned() }
		}
	}
}


#[cfg(test)]
mod tests {
	use {test_case::test_case, super::{Dir::{self, *}, Grid, Pos, parsing::GridError}};

	fn chars(s: &str) -> Grid<char> {
		Grid::parse(s, None, |c| c.parse::<char>()).unwrap()
	}

	#[test_case("#" ; "single")]
	#[test_case(".#.\n#.#\n..." ; "square")]
	#[test_case("ab\ncd\nef" ; "tall")]
	#[test_case("O....#\\|/-" ; "wide")]
	fn round_trip(s: &str) {
		assert_eq!(chars(s).to_string(), s);
	}

	#[test]
	fn parse_separated() {
		let grid = Grid::parse("1,2,3\n4,5,6", Some(","), |c| c.parse::<u8>()).unwrap();
		assert_eq!([grid.width(), grid.height()], [3, 2]);
		assert_eq!(grid[Pos::new(2, 1)], 6);
		assert_eq!(grid.rows().map(|r| r.iter().sum::<u8>()).collect::<Vec<_>>(), [6, 15]);
	}

	#[test]
	fn parse_errors() {
		assert!(matches!(
			Grid::parse("ab\nabc", None, |c| c.parse::<char>()),
			Err(GridError::LineLen { line: 2, len: 2, found: 3 })));
		assert!(matches!(
			Grid::parse("1,x", Some(","), |c| c.parse::<u8>()),
			Err(GridError::Cell { line: 1, column: 2, .. })));
		assert!(matches!(Grid::parse("", None, |c| c.parse::<char>()), Err(GridError::Empty)));
	}

	#[test]
	fn contains_and_neighbors() {
		let grid = chars("abc\ndef");
		assert!(grid.contains(Pos::new(2, 1)));
		assert!(!grid.contains(Pos::new(3, 0)));
		assert!(!grid.contains(Pos::new(0, -1)));
		assert_eq!(grid.neighbors(Pos::new(0, 0)).collect::<Vec<_>>(),
			[Pos::new(1, 0), Pos::new(0, 1)]);
		assert_eq!(grid.neighbors(Pos::new(1, 1)).count(), 3);
	}

	#[test]
	#[should_panic]
	fn get_out_of_bounds() {
		let _ = chars("ab").get(Pos::new(2, 0));
	}

	#[test_case([North, South], [West, East] => "adbecf" ; "columns top down")]
	#[test_case([South, North], [West, East] => "daebfc" ; "columns bottom up")]
	#[test_case([West, East], [North, South] => "abcdef" ; "rows left to right")]
	#[test_case([East, West], [South, North] => "fedcba" ; "rows reversed")]
	fn positions_in_order(inner: [Dir; 2], outer: [Dir; 2]) -> String {
		let grid = chars("abc\ndef");
		grid.positions_in_order(inner, outer).unwrap().map(|p| grid[p]).collect()
	}

	#[test]
	fn positions_in_order_errors() {
		let grid = chars("ab");
		assert!(grid.positions_in_order([North, South], [South, North]).is_err());
		assert!(grid.positions_in_order([North, East], [West, East]).is_err());
		assert!(grid.positions_in_order([North, North], [West, East]).is_err());
	}

	#[test_case("abc\ndef" => vec!["ad", "be", "cf"] ; "wide")]
	#[test_case("ab\ncd\nef" => vec!["ace", "bdf"] ; "tall")]
	#[test_case("x" => vec!["x"] ; "single")]
	fn columns(s: &str) -> Vec<String> {
		chars(s).columns().map(|column| column.collect()).collect()
	}

	#[test_case("abc\ndef" => "ad\nbe\ncf" ; "wide")]
	#[test_case("ab\ncd\nef" => "ace\nbdf" ; "tall")]
	#[test_case("x" => "x" ; "single")]
	fn transpose(s: &str) -> String {
		let transposed = chars(s).transpose();
		assert!(transposed.transpose() == chars(s));
		transposed.to_string()
	}

	#[test]
	#[should_panic]
	fn from_fn_empty() {
		Grid::from_fn(0, 3, |_| ());
	}

	#[test]
	fn swap() {
		let mut grid = chars("ab\ncd");
		grid.swap(Pos::new(0, 0), Pos::new(1, 1));
		assert_eq!(grid.to_string(), "db\nca");
	}

	#[test]
	fn flood_fill() {
		let mut grid = chars(indoc::indoc! { "
			..#..
			.#...
			#..#.
			...#.
		" });
		assert_eq!(grid.flood_fill(Pos::new(0, 0), 'O', |c| *c == '.'), 3);
		let once = grid.clone();
		assert_eq!(grid.flood_fill(Pos::new(0, 0), 'O', |c| *c == '.'), 0);
		assert!(grid == once);
		assert_eq!(grid.flood_fill(Pos::new(4, 3), 'O', |c| *c == '.'), 12);
		assert_eq!(grid.to_string(), "OO#OO\nO#OOO\n#OO#O\nOOO#O");
	}

	#[test]
	fn copy_with_is_independent() {
		let grid = Grid::from_fn(2, 2, |p| vec![p.x + p.y]);
		let mut copy = grid.copy_with(Clone::clone);
		copy[Pos::new(1, 1)].push(7);
		assert_eq!(grid[Pos::new(1, 1)], [2]);
		assert_eq!(copy[Pos::new(1, 1)], [2, 7]);
	}
}
