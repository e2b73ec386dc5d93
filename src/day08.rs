// Copyright (c) 2023 Bastiaan Marinus van de Weerd


#[derive(Clone, Copy)]
enum Turn { Left = 0, Right = 1 }

struct Maps {
	turns: Vec<Turn>,
	names: Vec<String>,
	nodes: Vec<[usize; 2]>,
}

impl Maps {
	fn node(&self, name: &str) -> Option<usize> {
		self.names.iter().position(|n| n == name)
	}

	fn count_steps(&self, start: usize, is_end: impl Fn(usize) -> bool) -> Option<u64> {
		// Once every (node, turn index) combination could have been visited, it never ends
		let limit = self.turns.len() * self.nodes.len();
		let mut node = start;
		for (steps, turn) in self.turns.iter().cycle().take(limit).enumerate() {
			node = self.nodes[node][*turn as usize];
			if is_end(node) { return Some(steps as u64 + 1) }
		}
		None
	}
}


#[allow(dead_code)]
#[derive(Debug)]
pub(crate) enum Error {
	Parse(parsing::MapsError),
	NoNode { name: &'static str },
	Unreachable,
	Overflow,
}

fn input_maps_from_str(s: &str) -> Result<Maps, Error> {
	s.parse().map_err(Error::Parse)
}


fn part1_impl(input_maps: Maps) -> Result<u64, Error> {
	let start = input_maps.node("AAA").ok_or(Error::NoNode { name: "AAA" })?;
	let end = input_maps.node("ZZZ").ok_or(Error::NoNode { name: "ZZZ" })?;
	input_maps.count_steps(start, |n| n == end).ok_or(Error::Unreachable)
}

pub(crate) fn part1(input: &str) -> Result<u64, Error> {
	part1_impl(input_maps_from_str(input)?)
}


/// Assumes each start node’s path cycles through exactly one end node,
/// reaching it again after the same number of steps.
fn part2_impl(input_maps: Maps) -> Result<u64, Error> {
	let ends_with = |n: usize, c: char| input_maps.names[n].ends_with(c);
	let steps = (0..input_maps.names.len())
		.filter(|n| ends_with(*n, 'A'))
		.map(|n| input_maps.count_steps(n, |n| ends_with(n, 'Z')).ok_or(Error::Unreachable))
		.collect::<Result<Vec<_>, _>>()?;
	crate::math::lcm_all(steps).ok_or(Error::Overflow)
}

pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	part2_impl(input_maps_from_str(input)?)
}


mod parsing {
	use std::str::FromStr;
	use super::{Maps, Turn};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum MapsError {
		Turn { column: usize, found: char },
		NoTurns,
		Format { line: usize },
		UnknownNode { line: usize, name: String },
		DuplicateNode { line: usize, name: String },
	}

	fn try_node_from_str(s: &str) -> Option<(&str, [&str; 2])> {
		let (name, s) = s.split_once(" = (")?;
		let (left, s) = s.split_once(", ")?;
		let right = s.strip_suffix(')')?;
		Some((name, [left, right]))
	}

	impl FromStr for Maps {
		type Err = MapsError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use MapsError as E;

			let mut lines = s.lines();
			let turns = lines.next().unwrap_or_default()
				.chars()
				.enumerate()
				.map(|(c, found)| match found {
					'L' => Ok(Turn::Left),
					'R' => Ok(Turn::Right),
					found => Err(E::Turn { column: c + 1, found }),
				})
				.collect::<Result<Vec<_>, _>>()?;
			if turns.is_empty() { return Err(E::NoTurns) }
			if lines.next().map_or(false, |l| !l.is_empty()) { return Err(E::Format { line: 2 }) }

			let mut names = vec![];
			let mut neighbors = vec![];
			for (l, line) in lines.enumerate() {
				let (name, ns) = try_node_from_str(line).ok_or(E::Format { line: l + 3 })?;
				if names.contains(&name) { return Err(E::DuplicateNode { line: l + 3, name: name.to_owned() }) }
				names.push(name);
				neighbors.push((l + 3, ns));
			}

			let nodes = neighbors.into_iter()
				.map(|(line, ns)| {
					let mut node = [0; 2];
					for (i, n) in ns.into_iter().enumerate() {
						node[i] = names.iter().position(|name| *name == n)
							.ok_or_else(|| E::UnknownNode { line, name: n.to_owned() })?;
					}
					Ok::<_, MapsError>(node)
				})
				.collect::<Result<Vec<_>, _>>()?;

			Ok(Maps { turns, names: names.into_iter().map(str::to_owned).collect(), nodes })
		}
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 3] = [
		indoc::indoc! { "
			RL

			AAA = (BBB, CCC)
			BBB = (DDD, EEE)
			CCC = (ZZZ, GGG)
			DDD = (DDD, DDD)
			EEE = (EEE, EEE)
			GGG = (GGG, GGG)
			ZZZ = (ZZZ, ZZZ)
		" },
		indoc::indoc! { "
			LLR

			AAA = (BBB, BBB)
			BBB = (AAA, ZZZ)
			ZZZ = (ZZZ, ZZZ)
		" },
		indoc::indoc! { "
			LR

			11A = (11B, XXX)
			11B = (XXX, 11Z)
			11Z = (11B, XXX)
			22A = (22B, XXX)
			22B = (22C, 22C)
			22C = (22Z, 22Z)
			22Z = (22B, 22B)
			XXX = (XXX, XXX)
		" },
	];
	let maps: Maps = INPUTS[1].parse().unwrap();
	assert_eq!(maps.turns.len(), 3);
	assert_eq!(maps.names, ["AAA", "BBB", "ZZZ"]);
	assert_eq!(maps.nodes, [[1, 1], [0, 2], [2, 2]]);

	assert_eq!(part1(INPUTS[0]).unwrap(), 2);
	assert_eq!(part1(INPUTS[1]).unwrap(), 6);
	assert_eq!(part2(INPUTS[2]).unwrap(), 6);

	assert!(matches!(part1(INPUTS[2]), Err(Error::NoNode { name: "AAA" })));
	assert!(matches!(part1("L\n\nAAA = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)"), Err(Error::Unreachable)));
	assert!(matches!(part1("LX\n\nAAA = (AAA, AAA)"),
		Err(Error::Parse(parsing::MapsError::Turn { column: 2, found: 'X' }))));
	assert!(matches!(part1("L\n\nAAA = (BBB, AAA)"),
		Err(Error::Parse(parsing::MapsError::UnknownNode { line: 3, .. }))));
}
