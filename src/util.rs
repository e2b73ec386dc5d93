// Copyright (c) 2023 Bastiaan Marinus van de Weerd


macro_rules! mod_days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	const DAYS: &[&str] = &[$( stringify!($day) ),*];

	fn run(day: &str, input: &str) -> Option<[String; 2]> {
		match day {
			$( stringify!($day) => Some([
				util::render([<day $day>]::part1(input)),
				util::render([<day $day>]::part2(input)),
			]), )*
			_ => None,
		}
	}
} } }

pub(crate) use mod_days;


pub(crate) fn load_input(day: &str) -> std::io::Result<String> {
	std::fs::read_to_string(format!("input/day{day}.txt"))
}

pub(crate) fn render<N: std::fmt::Display, E: std::fmt::Debug>(result: Result<N, E>) -> String {
	match result {
		Ok(answer) => answer.to_string(),
		Err(error) => format!("error: {error:?}"),
	}
}
