// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use crate::grid::{Grid, parsing::{GridError, SymbolError}};


#[derive(Clone, Copy, PartialEq, Eq)]
enum Terrain { Ash, Rock }

type Pattern = Grid<Terrain>;

/// Number of rows above the line across which the rows mirror each other
/// with exactly `smudges` cells differing.
fn reflection_row(pattern: &Pattern, smudges: usize) -> Option<usize> {
	let rows = pattern.rows().collect::<Vec<_>>();
	(1..rows.len()).find(|&r| {
		rows[..r].iter().rev()
			.zip(&rows[r..])
			.map(|(above, below)| above.iter().zip(*below).filter(|(a, b)| a != b).count())
			.sum::<usize>() == smudges
	})
}

fn summarize(pattern: &Pattern, smudges: usize) -> Option<usize> {
	reflection_row(pattern, smudges).map(|r| 100 * r)
		.or_else(|| reflection_row(&pattern.transpose(), smudges))
}


#[allow(dead_code)]
#[derive(Debug)]
pub(crate) enum Error {
	Parse { pattern: usize, source: GridError<SymbolError> },
	NoReflection { pattern: usize },
}

fn input_patterns_from_str(s: &str) -> Result<Vec<Pattern>, Error> {
	s.split("\n\n")
		.enumerate()
		.map(|(p, pattern)| Grid::parse(pattern, None, |s| match s {
			"." => Ok(Terrain::Ash),
			"#" => Ok(Terrain::Rock),
			found => Err(SymbolError::new(found)),
		}).map_err(|source| Error::Parse { pattern: p + 1, source }))
		.collect()
}


fn part1and2_impl<const SMUDGES: usize>(input_patterns: Vec<Pattern>) -> Result<usize, Error> {
	input_patterns.iter()
		.enumerate()
		.map(|(p, pattern)| summarize(pattern, SMUDGES).ok_or(Error::NoReflection { pattern: p + 1 }))
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	part1and2_impl::<0>(input_patterns_from_str(input)?)
}

pub(crate) fn part2(input: &str) -> Result<usize, Error> {
	part1and2_impl::<1>(input_patterns_from_str(input)?)
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		#.##..##.
		..#.##.#.
		##......#
		##......#
		..#.##.#.
		..##..##.
		#.#.##.#.

		#...##..#
		#....#..#
		..##..###
		#####.##.
		#####.##.
		..##..###
		#....#..#
	" };

	let patterns = input_patterns_from_str(INPUT).unwrap();
	assert_eq!(patterns.len(), 2);
	assert_eq!(reflection_row(&patterns[0], 0), None);
	assert_eq!(reflection_row(&patterns[0].transpose(), 0), Some(5));
	assert_eq!(reflection_row(&patterns[1], 0), Some(4));
	assert_eq!(reflection_row(&patterns[0], 1), Some(3));
	assert_eq!(reflection_row(&patterns[1], 1), Some(1));

	assert_eq!(part1(INPUT).unwrap(), 405);
	assert_eq!(part2(INPUT).unwrap(), 400);

	assert!(matches!(part1("#.\n.#"), Err(Error::NoReflection { pattern: 1 })));
	assert!(matches!(part1("##\n\n#.\n.x"), Err(Error::Parse { pattern: 2, .. })));
}
