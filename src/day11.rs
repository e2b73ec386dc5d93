// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use crate::grid::{Grid, parsing::{GridError, SymbolError}};


#[derive(Clone, Copy, PartialEq, Eq)]
enum Pixel { Space, Galaxy }

type Image = Grid<Pixel>;

fn expanded_coords<const EXPANSION: u64>(empty: impl Iterator<Item = bool>) -> Vec<u64> {
	empty
		.scan(0, |coord, empty| {
			let current = *coord;
			*coord += if empty { EXPANSION } else { 1 };
			Some(current)
		})
		.collect()
}

/// Sum of the shortest distances between every pair of galaxies, after
/// every empty row & column has grown `EXPANSION` times as wide.
fn sum_of_distances<const EXPANSION: u64>(image: &Image) -> u64 {
	use itertools::Itertools as _;

	let ys = expanded_coords::<EXPANSION>(image.rows()
		.map(|row| row.iter().all(|p| *p == Pixel::Space)));
	let xs = expanded_coords::<EXPANSION>(image.columns()
		.map(|mut column| column.all(|p| *p == Pixel::Space)));

	let galaxies = image.positions()
		.filter(|pos| image[*pos] == Pixel::Galaxy)
		.map(|pos| (xs[pos.x as usize], ys[pos.y as usize]))
		.collect::<Vec<_>>();
	#[cfg(LOGGING)]
	println!("{} galaxies", galaxies.len());

	galaxies.iter()
		.tuple_combinations()
		.map(|(a, b)| a.0.abs_diff(b.0) + a.1.abs_diff(b.1))
		.sum()
}


fn input_image_from_str(s: &str) -> Result<Image, GridError<SymbolError>> {
	Grid::parse(s, None, |s| match s {
		"." => Ok(Pixel::Space),
		"#" => Ok(Pixel::Galaxy),
		found => Err(SymbolError::new(found)),
	})
}


fn part1_impl(input_image: Image) -> u64 {
	sum_of_distances::<2>(&input_image)
}

pub(crate) fn part1(input: &str) -> Result<u64, GridError<SymbolError>> {
	Ok(part1_impl(input_image_from_str(input)?))
}


fn part2_impl(input_image: Image) -> u64 {
	sum_of_distances::<1_000_000>(&input_image)
}

pub(crate) fn part2(input: &str) -> Result<u64, GridError<SymbolError>> {
	Ok(part2_impl(input_image_from_str(input)?))
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		...#......
		.......#..
		#.........
		..........
		......#...
		.#........
		.........#
		..........
		.......#..
		#...#.....
	" };

	let image = input_image_from_str(INPUT).unwrap();
	assert_eq!(expanded_coords::<2>(image.columns().map(|mut c| c.all(|p| *p == Pixel::Space))),
		[0, 1, 2, 4, 5, 6, 8, 9, 10, 12]);
	assert_eq!(part1(INPUT).unwrap(), 374);
	assert_eq!(sum_of_distances::<10>(&image), 1030);
	assert_eq!(sum_of_distances::<100>(&image), 8410);
	assert_eq!(part2(INPUT).unwrap(), 82000210);

	assert_eq!(part1("#.#").unwrap(), 3);
	assert!(matches!(part1("#.\n.x"), Err(GridError::Cell { line: 2, column: 2, .. })));
}
