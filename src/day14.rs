// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use crate::grid::{Dir, Grid, parsing::{GridError, SymbolError}};


const SPIN_CYCLES: usize = 1_000_000_000;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
enum Space { Empty, Cube, Round }

impl std::fmt::Display for Space {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write as _;
		f.write_char(match self { Space::Empty => '.', Space::Cube => '#', Space::Round => 'O' })
	}
}

type Platform = Grid<Space>;

fn tilt(platform: &mut Platform, dir: Dir) {
	use Dir::*;
	// Rocks nearest to the edge being tilted towards go first
	let [inner, outer] = match dir {
		North => [[North, South], [West, East]],
		East => [[East, West], [North, South]],
		South => [[South, North], [West, East]],
		West => [[West, East], [North, South]],
	};
	let Ok(positions) = platform.positions_in_order(inner, outer)
		else { unreachable!("{inner:?} & {outer:?} are orthogonal") };

	for pos in positions {
		if platform[pos] != Space::Round { continue }
		let mut current = pos;
		loop {
			let next = current.step(dir);
			if !platform.contains(next) || platform[next] != Space::Empty { break }
			platform.swap(current, next);
			current = next;
		}
	}
}

fn spin_cycle(platform: &mut Platform) {
	for dir in [Dir::North, Dir::West, Dir::South, Dir::East] { tilt(platform, dir) }
}

fn total_load(platform: &Platform) -> usize {
	let height = platform.height();
	platform.rows()
		.enumerate()
		.map(|(y, row)| (height - y) * row.iter().filter(|s| **s == Space::Round).count())
		.sum()
}


fn input_platform_from_str(s: &str) -> Result<Platform, GridError<SymbolError>> {
	Grid::parse(s, None, |s| match s {
		"." => Ok(Space::Empty),
		"#" => Ok(Space::Cube),
		"O" => Ok(Space::Round),
		found => Err(SymbolError::new(found)),
	})
}


fn part1_impl(mut input_platform: Platform) -> usize {
	tilt(&mut input_platform, Dir::North);
	total_load(&input_platform)
}

pub(crate) fn part1(input: &str) -> Result<usize, GridError<SymbolError>> {
	Ok(part1_impl(input_platform_from_str(input)?))
}


fn part2_impl<const N: usize>(input_platform: Platform) -> usize {
	let platform = crate::cycle::project(input_platform, N, spin_cycle, Platform::to_string);
	total_load(&platform)
}

pub(crate) fn part2(input: &str) -> Result<usize, GridError<SymbolError>> {
	Ok(part2_impl::<SPIN_CYCLES>(input_platform_from_str(input)?))
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		O....#....
		O.OO#....#
		.....##...
		OO.#O....O
		.O.....O#.
		O.#..O.#.#
		..O..#O..O
		.......O..
		#....###..
		#OO..#....
	" };

	let mut platform = input_platform_from_str(INPUT).unwrap();
	tilt(&mut platform, Dir::North);
	assert_eq!(platform.to_string(), indoc::indoc! { "
		OOOO.#.O..
		OO..#....#
		OO..O##..O
		O..#.OO...
		........#.
		..#....#.#
		..O..#.O.O
		..O.......
		#....###..
		#....#...."
	});
	assert_eq!(part1(INPUT).unwrap(), 136);

	let mut platform = input_platform_from_str(INPUT).unwrap();
	for _ in 0..3 { spin_cycle(&mut platform) }
	assert_eq!(platform.to_string(), indoc::indoc! { "
		.....#....
		....#...O#
		.....##...
		..O#......
		.....OOO#.
		.O#...O#.#
		....O#...O
		.......OOO
		#...O###.O
		#.OOO#...O"
	});

	let mut naive = input_platform_from_str(INPUT).unwrap();
	for n in 1..=60 {
		spin_cycle(&mut naive);
		let projected = crate::cycle::project(
			input_platform_from_str(INPUT).unwrap(), n, spin_cycle, Platform::to_string);
		assert_eq!(projected.to_string(), naive.to_string(), "n = {n}");
	}

	assert_eq!(part2(INPUT).unwrap(), 64);
	assert!(matches!(part1("O.\n.x"), Err(GridError::Cell { line: 2, column: 2, .. })));
}
