// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use crate::{geom::{Polygon, Vec2}, grid::Dir};


struct Instruction {
	dir: Dir,
	len: u32,
	color: u32,
}

struct DigPlan(Vec<Instruction>);

impl Instruction {
	fn decode_color(&self) -> Option<(Dir, u32)> {
		let dir = match self.color & 0xf {
			0 => Dir::East,
			1 => Dir::South,
			2 => Dir::West,
			3 => Dir::North,
			_ => return None,
		};
		Some((dir, self.color >> 4))
	}
}


#[allow(dead_code)]
#[derive(Debug)]
pub(crate) enum Error {
	Parse(parsing::PlanError),
	ColorDir { line: usize, color: u32 },
	Open,
	Corner { line: usize },
}

fn lagoon_area(steps: &[(Dir, u32)]) -> Result<u64, Error> {
	let n = steps.len();
	let origin = Vec2::new(0.5, 0.5);
	let mut corners = Vec::with_capacity(n);
	let mut pos = origin;
	for &(dir, len) in steps {
		corners.push(pos);
		pos = pos + len as f64 * Vec2::from(dir);
	}
	if pos != origin || n < 4 { return Err(Error::Open) }

	// Move each corner half a cell outwards (to the left of both adjacent
	// steps when clockwise, to their right when counterclockwise)
	let outwards = if Polygon(corners.clone()).is_clockwise() { 0.5 } else { -0.5 };
	let left = |dir: Dir| Vec2::from(Dir::ALL[(dir.index() + 3) % 4]);
	let outline = corners.into_iter()
		.enumerate()
		.map(|(i, corner)| {
			let [d0, d1] = [steps[(i + n - 1) % n].0, steps[i].0];
			if d0.axis() == d1.axis() { return Err(Error::Corner { line: i + 1 }) }
			Ok(corner + outwards * (left(d0) + left(d1)))
		})
		.collect::<Result<Vec<_>, _>>()?;

	Ok(Polygon(outline).area().abs().round() as u64)
}


fn input_plan_from_str(s: &str) -> Result<DigPlan, Error> {
	s.parse().map_err(Error::Parse)
}


fn part1_impl(input_plan: DigPlan) -> Result<u64, Error> {
	lagoon_area(&input_plan.0.iter().map(|i| (i.dir, i.len)).collect::<Vec<_>>())
}

pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	part1_impl(input_plan_from_str(input)?)
}


fn part2_impl(input_plan: DigPlan) -> Result<u64, Error> {
	let steps = input_plan.0.iter()
		.enumerate()
		.map(|(l, i)| i.decode_color().ok_or(Error::ColorDir { line: l + 1, color: i.color }))
		.collect::<Result<Vec<_>, _>>()?;
	lagoon_area(&steps)
}

pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	part2_impl(input_plan_from_str(input)?)
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use crate::grid::Dir;
	use super::{DigPlan, Instruction};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum InstructionError {
		Format,
		Dir { found: String },
		Len(ParseIntError),
		Color { found: String },
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct PlanError { line: usize, source: InstructionError }

	impl FromStr for Instruction {
		type Err = InstructionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use InstructionError as E;

			let mut parts = s.split(' ');
			let (Some(dir), Some(len), Some(color), None) = (parts.next(), parts.next(), parts.next(), parts.next())
				else { return Err(E::Format) };

			let dir = match dir {
				"U" => Dir::North,
				"R" => Dir::East,
				"D" => Dir::South,
				"L" => Dir::West,
				found => return Err(E::Dir { found: found.to_owned() }),
			};
			let len = len.parse().map_err(E::Len)?;
			let color = color.strip_prefix("(#")
				.and_then(|c| c.strip_suffix(')'))
				.filter(|c| c.len() == 6 && c.bytes().all(|b| b.is_ascii_hexdigit()))
				.and_then(|c| u32::from_str_radix(c, 16).ok())
				.ok_or_else(|| E::Color { found: color.to_owned() })?;

			Ok(Instruction { dir, len, color })
		}
	}

	impl FromStr for DigPlan {
		type Err = PlanError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			s.lines()
				.enumerate()
				.map(|(l, line)| line.parse::<Instruction>().map_err(|e| PlanError { line: l + 1, source: e }))
				.collect::<Result<_, _>>()
				.map(DigPlan)
		}
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		R 6 (#70c710)
		D 5 (#0dc571)
		L 2 (#5713f0)
		D 2 (#d2c081)
		R 2 (#59c680)
		D 2 (#411b91)
		L 5 (#8ceee2)
		U 2 (#caa173)
		L 1 (#1b58a2)
		U 2 (#caa171)
		R 2 (#7807d2)
		U 3 (#a77fa3)
		L 2 (#015232)
		U 2 (#7a21e3)
	" };
	let plan: DigPlan = INPUT.parse().unwrap();
	assert_eq!(plan.0.len(), 14);
	assert_eq!((plan.0[6].dir, plan.0[6].len, plan.0[6].color), (Dir::West, 5, 0x8ceee2));
	assert_eq!(plan.0[6].decode_color(), Some((Dir::West, 577262)));

	assert_eq!(part1(INPUT).unwrap(), 62);
	assert_eq!(part2(INPUT).unwrap(), 952408144115);

	// Same loop, counterclockwise
	assert_eq!(lagoon_area(&[(Dir::South, 2), (Dir::East, 3), (Dir::North, 2), (Dir::West, 3)]).unwrap(), 12);
	assert_eq!(lagoon_area(&[(Dir::East, 3), (Dir::South, 2), (Dir::West, 3), (Dir::North, 2)]).unwrap(), 12);

	assert!(matches!(part1("R 2 (#000000)\nD 2 (#000000)"), Err(Error::Open)));
	assert!(matches!(part1("R 2 (#000000)\nR 2 (#000000)\nD 1 (#000000)\nL 4 (#000000)\nU 1 (#000000)"),
		Err(Error::Corner { line: 2 })));
	assert!(matches!(part2("R 2 (#000004)"), Err(Error::ColorDir { line: 1, color: 4 })));
	assert!(matches!(part1("R 2 #000004"), Err(Error::Parse(_))));
}
