// Copyright (c) 2023 Bastiaan Marinus van de Weerd

use std::collections::{HashMap, VecDeque};


const PRESSES: usize = 1000;
const SINK: &str = "rx";
const PRESS_LIMIT: usize = 100_000;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Level { Low = 0, High = 1 }

enum Kind {
	Broadcaster,
	FlipFlop { on: bool },
	Conjunction { memory: Vec<Level> },
	Sink,
}

#[derive(Clone, Copy)]
struct Pulse {
	/// `None` for the button.
	from: Option<usize>,
	level: Level,
}

struct Module {
	name: String,
	kind: Kind,
	inputs: Vec<usize>,
	outputs: Vec<usize>,
	pending: VecDeque<Pulse>,
}

impl Module {
	fn step(&mut self) -> Option<(Pulse, Option<Level>)> {
		let pulse = self.pending.pop_front()?;
		let emit = match &mut self.kind {
			Kind::Broadcaster => Some(pulse.level),
			Kind::FlipFlop { .. } if pulse.level == Level::High => None,
			Kind::FlipFlop { on } => {
				*on = !*on;
				Some(if *on { Level::High } else { Level::Low })
			}
			Kind::Conjunction { memory } => {
				if let Some(i) = pulse.from.and_then(|f| self.inputs.iter().position(|i| *i == f)) {
					memory[i] = pulse.level;
				}
				Some(if memory.iter().all(|l| *l == Level::High) { Level::Low } else { Level::High })
			}
			Kind::Sink => None,
		};
		Some((pulse, emit))
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Event { from: usize, to: usize, level: Level }

struct Network {
	modules: Vec<Module>,
	names: HashMap<String, usize>,
	broadcaster: usize,
	counts: [usize; 2],
}

impl Network {
	/// Returns all pulses received by modules, in order.
	fn press(&mut self) -> Vec<Event> {
		let mut events = vec![];
		self.modules[self.broadcaster].pending.push_back(Pulse { from: None, level: Level::Low });
		self.counts[Level::Low as usize] += 1;

		let mut queue = VecDeque::from([self.broadcaster]);
		while let Some(m) = queue.pop_front() {
			let Some((pulse, emit)) = self.modules[m].step() else { continue };
			if let Some(from) = pulse.from { events.push(Event { from, to: m, level: pulse.level }) }
			let Some(level) = emit else { continue };

			for o in 0..self.modules[m].outputs.len() {
				let to = self.modules[m].outputs[o];
				self.modules[to].pending.push_back(Pulse { from: Some(m), level });
				self.counts[level as usize] += 1;
				queue.push_back(to);
			}
		}

		events
	}
}


#[allow(dead_code)]
#[derive(Debug)]
pub(crate) enum Error {
	Parse(parsing::NetworkError),
	NoSink,
	NotAConjunction { name: String },
	PeriodNotFound { presses: usize },
	Overflow,
}

fn input_network_from_str(s: &str) -> Result<Network, Error> {
	s.parse().map_err(Error::Parse)
}


fn part1_impl(mut input_network: Network) -> usize {
	for _ in 0..PRESSES { input_network.press(); }
	let [low, high] = input_network.counts;
	low * high
}

pub(crate) fn part1(input: &str) -> Result<usize, Error> {
	Ok(part1_impl(input_network_from_str(input)?))
}


fn trigger_periods(network: &mut Network, watched: usize) -> Result<Vec<u64>, Error> {
	let inputs = network.modules[watched].inputs.clone();
	let mut triggers = vec![vec![]; inputs.len()];

	for press in 1..=PRESS_LIMIT {
		for event in network.press() {
			if event.to != watched || event.level != Level::High { continue }
			let Some(i) = inputs.iter().position(|m| *m == event.from) else { continue };
			if triggers[i].len() < 2 && triggers[i].last() != Some(&press) { triggers[i].push(press) }
		}

		if triggers.iter().all(|t| t.len() == 2) {
			#[cfg(LOGGING)]
			println!("triggers: {triggers:?}");
			return Ok(triggers.iter().map(|t| (t[1] - t[0]) as u64).collect())
		}
	}

	Err(Error::PeriodNotFound { presses: PRESS_LIMIT })
}

/// Assumes the conjunction feeding the sink is fed in turn by counters,
/// each sending it a single high pulse per period, first after one period.
fn part2_impl(mut input_network: Network) -> Result<u64, Error> {
	let &sink = input_network.names.get(SINK).ok_or(Error::NoSink)?;
	let watched = match input_network.modules[sink].inputs[..] {
		[m] if matches!(input_network.modules[m].kind, Kind::Conjunction { .. }) => m,
		[m] => return Err(Error::NotAConjunction { name: input_network.modules[m].name.clone() }),
		_ => return Err(Error::NoSink),
	};
	let periods = trigger_periods(&mut input_network, watched)?;
	crate::math::lcm_all(periods).ok_or(Error::Overflow)
}

pub(crate) fn part2(input: &str) -> Result<u64, Error> {
	part2_impl(input_network_from_str(input)?)
}


mod parsing {
	use std::{collections::{HashMap, VecDeque}, str::FromStr};
	use super::{Kind, Level, Module, Network};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum ModuleError {
		Format { column: usize },
		EmptyName { column: usize },
		Duplicate { name: String },
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum NetworkError {
		Module { line: usize, source: ModuleError },
		NoBroadcaster,
	}

	fn try_name(s: &str, column: usize) -> Result<&str, ModuleError> {
		if s.is_empty() { Err(ModuleError::EmptyName { column }) } else { Ok(s) }
	}

	fn add(modules: &mut Vec<Module>, name: &str, kind: Kind) -> usize {
		modules.push(Module {
			name: name.to_owned(),
			kind,
			inputs: vec![],
			outputs: vec![],
			pending: VecDeque::new(),
		});
		modules.len() - 1
	}

	impl FromStr for Network {
		type Err = NetworkError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use {ModuleError as EK, NetworkError as E};

			let mut modules = vec![];
			let mut names = HashMap::<String, usize>::new();
			let mut destinations = vec![];

			for (l, line) in s.lines().enumerate() {
				let err = |source| E::Module { line: l + 1, source };

				let (source, rest) = line.split_once(" -> ")
					.ok_or(err(EK::Format { column: line.len() + 1 }))?;
				let (name, kind) = match source {
					"broadcaster" => (source, Kind::Broadcaster),
					_ if source.starts_with('%') => (&source[1..], Kind::FlipFlop { on: false }),
					_ if source.starts_with('&') => (&source[1..], Kind::Conjunction { memory: vec![] }),
					_ => return Err(err(EK::Format { column: 1 })),
				};
				let name = try_name(name, 2).map_err(err)?;
				if names.contains_key(name) { return Err(err(EK::Duplicate { name: name.to_owned() })) }
				names.insert(name.to_owned(), add(&mut modules, name, kind));

				let mut column = source.len() + 5;
				let mut outputs = vec![];
				for output in rest.split(", ") {
					outputs.push(try_name(output, column).map_err(err)?);
					column += output.len() + 2;
				}
				destinations.push(outputs);
			}

			for (m, outputs) in destinations.into_iter().enumerate() {
				for output in outputs {
					let o = match names.get(output) {
						Some(&o) => o,
						None => {
							let o = add(&mut modules, output, Kind::Sink);
							names.insert(output.to_owned(), o);
							o
						}
					};
					modules[m].outputs.push(o);
					if !modules[o].inputs.contains(&m) { modules[o].inputs.push(m) }
				}
			}

			for module in &mut modules {
				if let Kind::Conjunction { memory } = &mut module.kind {
					*memory = vec![Level::Low; module.inputs.len()];
				}
			}

			let &broadcaster = names.get("broadcaster").ok_or(E::NoBroadcaster)?;
			Ok(Network { modules, names, broadcaster, counts: [0; 2] })
		}
	}
}


#[test]
fn tests() {
	const INPUTS: [&str; 3] = [
		indoc::indoc! { "
			broadcaster -> a, b, c
			%a -> b
			%b -> c
			%c -> inv
			&inv -> a
		" },
		indoc::indoc! { "
			broadcaster -> a
			%a -> inv, con
			&inv -> b
			%b -> con
			&con -> output
		" },
		// Two counters, triggering every 2 & 4 presses respectively
		indoc::indoc! { "
			broadcaster -> a, b
			%a -> ga
			&ga -> fin
			%b -> c
			%c -> gc
			&gc -> fin
			&fin -> rx
		" },
	];

	let network: Network = INPUTS[1].parse().unwrap();
	let con = network.names["con"];
	assert_eq!(network.modules[con].inputs.len(), 2);
	assert!(matches!(&network.modules[con].kind, Kind::Conjunction { memory } if memory == &[Level::Low; 2]));
	assert!(matches!(network.modules[network.names["output"]].kind, Kind::Sink));

	let mut network = input_network_from_str(INPUTS[0]).unwrap();
	network.press();
	assert_eq!(network.counts, [8, 4]);
	let mut network = input_network_from_str(INPUTS[1]).unwrap();
	let events = network.press();
	assert_eq!(events.len(), 7);
	assert_eq!(
		events.iter()
			.map(|e| (network.modules[e.from].name.as_str(), network.modules[e.to].name.as_str(), e.level))
			.collect::<Vec<_>>(),
		[
			("broadcaster", "a", Level::Low),
			("a", "inv", Level::High),
			("a", "con", Level::High),
			("inv", "b", Level::Low),
			("con", "output", Level::High),
			("b", "con", Level::High),
			("con", "output", Level::Low),
		]);

	assert_eq!(part1(INPUTS[0]).unwrap(), 32000000);
	assert_eq!(part1(INPUTS[1]).unwrap(), 11687500);

	for input in INPUTS {
		let [mut n0, mut n1] = [(); 2].map(|_| input_network_from_str(input).unwrap());
		for _ in 0..50 { assert_eq!(n0.press(), n1.press()) }
		assert_eq!(n0.counts, n1.counts);
	}

	let mut network = input_network_from_str(INPUTS[2]).unwrap();
	let fin = network.names["fin"];
	assert_eq!(trigger_periods(&mut network, fin).unwrap(), [2, 4]);
	assert_eq!(part2(INPUTS[2]).unwrap(), 4);
	let mut network = input_network_from_str(INPUTS[2]).unwrap();
	let rx = network.names["rx"];
	let first_low = (1..).find(|_| network.press().iter().any(|e| e.to == rx && e.level == Level::Low));
	assert_eq!(first_low, Some(4));

	assert!(matches!(part2(INPUTS[0]), Err(Error::NoSink)));
	assert!(matches!(part2("broadcaster -> a\n%a -> rx"), Err(Error::NotAConjunction { .. })));
	assert!(matches!(part1("%a -> b"), Err(Error::Parse(parsing::NetworkError::NoBroadcaster))));
	assert!(matches!(part1("broadcaster -> a\n%a b"),
		Err(Error::Parse(parsing::NetworkError::Module { line: 2, .. }))));
	assert!(matches!(part1("broadcaster -> a\n%a -> b\n&a -> b"),
		Err(Error::Parse(parsing::NetworkError::Module { line: 3, source: parsing::ModuleError::Duplicate { .. } }))));
}
