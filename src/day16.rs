// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use crate::grid::{Dir, Grid, Pos, parsing::GridError};


#[derive(Clone, Copy)]
enum Optic { Empty, Mirror, BackMirror, VerticalSplitter, HorizontalSplitter }

impl Optic {
	fn redirect(self, dir: Dir) -> (Dir, Option<Dir>) {
		use {Dir::*, Optic::*};
		match (self, dir) {
			(Mirror, East) => (North, None),
			(Mirror, West) => (South, None),
			(Mirror, North) => (East, None),
			(Mirror, South) => (West, None),
			(BackMirror, East) => (South, None),
			(BackMirror, West) => (North, None),
			(BackMirror, North) => (West, None),
			(BackMirror, South) => (East, None),
			(VerticalSplitter, East) => (South, Some(North)),
			(VerticalSplitter, West) => (North, Some(South)),
			(HorizontalSplitter, South) => (West, Some(East)),
			(HorizontalSplitter, North) => (East, Some(West)),
			_ => (dir, None),
		}
	}
}

#[derive(Clone)]
struct Tile {
	optic: Optic,
	energized: bool,
	visited: [bool; 4],
}

type Contraption = Grid<Tile>;

fn cast_beam(contraption: &mut Contraption, start: (Pos, Dir)) {
	let mut seeds = std::collections::VecDeque::from([start]);
	while let Some((mut pos, mut dir)) = seeds.pop_front() {
		while contraption.contains(pos) {
			let tile = &mut contraption[pos];
			if std::mem::replace(&mut tile.visited[dir.index()], true) { break }
			tile.energized = true;

			let (next_dir, split_dir) = tile.optic.redirect(dir);
			if let Some(split_dir) = split_dir { seeds.push_back((pos, split_dir)) }
			dir = next_dir;
			pos = pos.step(dir);
		}
	}
}

fn count_energized(mut contraption: Contraption, start: (Pos, Dir)) -> usize {
	cast_beam(&mut contraption, start);
	contraption.values().filter(|t| t.energized).count()
}


fn input_contraption_from_str(s: &str) -> Result<Contraption, GridError<parsing::OpticError>> {
	Grid::parse(s, None, parsing::tile_from_str)
}


fn part1_impl(input_contraption: Contraption) -> usize {
	count_energized(input_contraption, (Pos::new(0, 0), Dir::East))
}

pub(crate) fn part1(input: &str) -> Result<usize, GridError<parsing::OpticError>> {
	Ok(part1_impl(input_contraption_from_str(input)?))
}


fn part2_impl(input_contraption: Contraption) -> usize {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};

	let [w, h] = [input_contraption.width() as isize, input_contraption.height() as isize];
	let starts = (0..w)
		.flat_map(|x| [(Pos::new(x, 0), Dir::South), (Pos::new(x, h - 1), Dir::North)])
		.chain((0..h).flat_map(|y| [(Pos::new(0, y), Dir::East), (Pos::new(w - 1, y), Dir::West)]))
		.collect::<Vec<_>>();

	starts.into_par_iter()
		.map(|start| count_energized(input_contraption.copy_with(Tile::clone), start))
		.max()
		.unwrap_or(0)
}

pub(crate) fn part2(input: &str) -> Result<usize, GridError<parsing::OpticError>> {
	Ok(part2_impl(input_contraption_from_str(input)?))
}


mod parsing {
	use super::{Optic, Tile};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct OpticError { found: String }

	pub(super) fn tile_from_str(s: &str) -> Result<Tile, OpticError> {
		let optic = match s {
			"." => Optic::Empty,
			"/" => Optic::Mirror,
			"\\" => Optic::BackMirror,
			"|" => Optic::VerticalSplitter,
			"-" => Optic::HorizontalSplitter,
			found => return Err(OpticError { found: found.to_owned() }),
		};
		Ok(Tile { optic, energized: false, visited: [false; 4] })
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { r"
		.|...\....
		|.-.\.....
		.....|-...
		........|.
		..........
		.........\
		..../.\\..
		.-.-/..|..
		.|....-|.\
		..//.|....
	" };

	let mut contraption = input_contraption_from_str(INPUT).unwrap();
	cast_beam(&mut contraption, (Pos::new(0, 0), Dir::East));
	let energized = contraption.rows()
		.map(|row| row.iter().map(|t| if t.energized { '#' } else { '.' }).collect::<String>())
		.collect::<Vec<_>>();
	assert_eq!(energized, [
		"######....",
		".#...#....",
		".#...#####",
		".#...##...",
		".#...##...",
		".#...##...",
		".#..####..",
		"########..",
		".#######..",
		".#...#.#..",
	]);

	assert_eq!(part1(INPUT).unwrap(), 46);
	assert_eq!(count_energized(input_contraption_from_str(INPUT).unwrap(), (Pos::new(3, 0), Dir::South)), 51);
	assert_eq!(part2(INPUT).unwrap(), 51);
	assert_eq!(part2(INPUT).unwrap(), part2(INPUT).unwrap());
	assert!(matches!(part1("./\n.x"), Err(GridError::Cell { line: 2, column: 2, .. })));
}
