// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use crate::grid::{Dir, Grid, Pos, parsing::GridError};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Tile {
	Pipe([Dir; 2]),
	Ground,
	Start,
}

impl Tile {
	fn connections(&self) -> &[Dir] {
		match self {
			Tile::Pipe(dirs) => dirs,
			Tile::Ground => &[],
			Tile::Start => &Dir::ALL,
		}
	}
}

struct PipeMap {
	tiles: Grid<Tile>,
	start: Pos,
}

impl PipeMap {
	fn connected_neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
		self.tiles[pos].connections().iter()
			.map(move |dir| (pos.step(*dir), dir.opposite()))
			.filter(move |(n, back)| self.tiles.contains(*n) && self.tiles[*n].connections().contains(back))
			.map(|(n, _)| n)
	}

	/// Starts & ends with the start position.
	fn find_loop(&self) -> Option<Vec<Pos>> {
		use std::collections::{HashMap, HashSet, VecDeque};

		// Depth-first (pushing to the front), so the first path back to the start is a loop
		let mut visit_next = VecDeque::from([self.start]);
		let mut visited = HashSet::new();
		let mut prev = HashMap::new();

		while let Some(current) = visit_next.pop_front() {
			if !visited.insert(current) { continue }

			let neighbors = self.connected_neighbors(current).collect::<Vec<_>>();
			if neighbors.contains(&self.start) && prev.get(&current) != Some(&self.start) {
				let mut path = std::iter::successors(Some(current), |p| prev.get(p).copied())
					.collect::<Vec<_>>();
				path.reverse();
				path.push(self.start);
				return Some(path)
			}

			for next in neighbors {
				if visited.contains(&next) { continue }
				visit_next.push_front(next);
				prev.insert(next, current);
			}
		}

		None
	}
}


#[allow(dead_code)]
#[derive(Debug)]
pub(crate) enum Error {
	Parse(GridError<parsing::TileError>),
	NoStart,
	DuplicateStart { first: Pos, second: Pos },
	NoLoop,
}

fn input_pipe_map_from_str(s: &str) -> Result<PipeMap, Error> {
	let tiles = Grid::parse(s, None, parsing::tile_from_str).map_err(Error::Parse)?;
	let mut starts = tiles.positions().filter(|p| tiles[*p] == Tile::Start);
	let start = starts.next().ok_or(Error::NoStart)?;
	if let Some(second) = starts.next() { return Err(Error::DuplicateStart { first: start, second }) }
	Ok(PipeMap { tiles, start })
}


fn part1_impl(input_pipe_map: PipeMap) -> Result<usize, Error> {
	let path = input_pipe_map.find_loop().ok_or(Error::NoLoop)?;
	#[cfg(LOGGING)]
	println!("loop of {} tiles", path.len() - 1);
	Ok(path.len() / 2)
}

pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	part1_impl(input_pipe_map_from_str(input)?)
}


// Each tile becomes 3x3 blocks, so the outside can pass between unconnected pipes
#[derive(Clone, Copy, PartialEq, Eq)]
enum Block { Open, Pipe, Outside }

fn part2_impl(mut input_pipe_map: PipeMap) -> Result<usize, Error> {
	use std::collections::HashSet;

	let path = input_pipe_map.find_loop().ok_or(Error::NoLoop)?;
	let start = input_pipe_map.start;
	let start_neighbors = [path[1], path[path.len() - 2]];
	let start_dirs = Dir::ALL.into_iter()
		.filter(|d| start_neighbors.contains(&start.step(*d)))
		.collect::<Vec<_>>();
	let tiles = &mut input_pipe_map.tiles;
	match start_dirs[..] {
		[d0, d1] => tiles.set(start, Tile::Pipe([d0, d1])),
		_ => return Err(Error::NoLoop),
	}

	let on_loop = path.into_iter().collect::<HashSet<_>>();
	for pos in tiles.positions() {
		if !on_loop.contains(&pos) { tiles.set(pos, Tile::Ground) }
	}

	let mut blocks = Grid::from_fn(tiles.width() * 3, tiles.height() * 3, |big| {
		let pos = Pos::new(big.x / 3, big.y / 3);
		let [dx, dy] = [big.x % 3 - 1, big.y % 3 - 1];
		let tile = tiles[pos];
		let is_pipe = match tile {
			Tile::Ground => false,
			_ if [dx, dy] == [0, 0] => true,
			_ => tile.connections().iter().any(|d| d.offset() == [dx, dy]),
		};
		if is_pipe { Block::Pipe } else { Block::Open }
	});
	blocks.flood_fill(Pos::new(0, 0), Block::Outside, |b| *b == Block::Open);

	Ok(tiles.positions()
		.filter(|pos| itertools::iproduct!(0..3, 0..3)
			.all(|(dy, dx)| blocks[Pos::new(pos.x * 3 + dx, pos.y * 3 + dy)] == Block::Open))
		.count())
}

pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	part2_impl(input_pipe_map_from_str(input)?)
}


mod parsing {
	use crate::grid::Dir::*;
	use super::Tile;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct TileError { found: String }

	pub(super) fn tile_from_str(s: &str) -> Result<Tile, TileError> {
		Ok(match s {
			"|" => Tile::Pipe([North, South]),
			"-" => Tile::Pipe([West, East]),
			"L" => Tile::Pipe([North, East]),
			"J" => Tile::Pipe([North, West]),
			"7" => Tile::Pipe([West, South]),
			"F" => Tile::Pipe([East, South]),
			"." => Tile::Ground,
			"S" => Tile::Start,
			found => return Err(TileError { found: found.to_owned() }),
		})
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 5] = [
		indoc::indoc! { "
			.....
			.S-7.
			.|.|.
			.L-J.
			.....
		" },
		indoc::indoc! { "
			7-F7-
			.FJ|7
			SJLL7
			|F--J
			LJ.LJ
		" },
		indoc::indoc! { "
			..........
			.S------7.
			.|F----7|.
			.||....||.
			.||....||.
			.|L-7F-J|.
			.|..||..|.
			.L--JL--J.
			..........
		" },
		indoc::indoc! { "
			.F----7F7F7F7F-7....
			.|F--7||||||||FJ....
			.||.FJ||||||||L7....
			FJL7L7LJLJ||LJ.L-7..
			L--J.L7...LJS7F-7L7.
			....F-J..F7FJ|L7L7L7
			....L7.F7||L7|.L7L7|
			.....|FJLJ|FJ|F7|.LJ
			....FJL-7.||.||||...
			....L---J.LJ.LJLJ...
		" },
		indoc::indoc! { "
			FF7FSF7F7F7F7F7F---7
			L|LJ||||||||||||F--J
			FL-7LJLJ||||||LJL-77
			F--JF--7||LJLJ7F7FJ-
			L---JF-JLJ.||-FJLJJ7
			|F|F-JF---7F7-L7L|7|
			|FFJF7L7F-JF7|JL---7
			7-L-JL7||F7|L7F-7F7|
			L.L7LFJ|||||FJL7||LJ
			L7JLJL-JLJLJL--JLJ.L
		" },
	];

	let pipe_map = input_pipe_map_from_str(INPUTS[0]).unwrap();
	assert_eq!(pipe_map.start, Pos::new(1, 1));
	let path = pipe_map.find_loop().unwrap();
	assert_eq!([path[0], path[path.len() - 1]], [pipe_map.start; 2]);
	assert_eq!(path.len(), 9);
	assert_eq!(path.iter().collect::<std::collections::HashSet<_>>().len(), 8);

	assert_eq!(part1(INPUTS[0]).unwrap(), 4);
	assert_eq!(part1(INPUTS[1]).unwrap(), 8);
	assert_eq!(part2(INPUTS[0]).unwrap(), 1);
	assert_eq!(part2(INPUTS[2]).unwrap(), 4);
	assert_eq!(part2(INPUTS[3]).unwrap(), 8);
	assert_eq!(part2(INPUTS[4]).unwrap(), 10);

	assert!(matches!(part1("..\n.."), Err(Error::NoStart)));
	assert!(matches!(part1("S.\n.S"), Err(Error::DuplicateStart { .. })));
	assert!(matches!(part1("S-\n.."), Err(Error::NoLoop)));
	assert!(matches!(part1("S-\n.X"), Err(Error::Parse(GridError::Cell { line: 2, column: 2, .. }))));
}
