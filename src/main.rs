// Copyright (c) 2023 Bastiaan Marinus van de Weerd

mod util;
mod grid;
mod geom;
mod math;
mod cycle;
util::mod_days![08, 10, 11, 13, 14, 16, 18, 20];

fn main() {
	let args = std::env::args().skip(1).collect::<Vec<_>>();
	let days = if args.is_empty() { DAYS.iter().map(|d| d.to_string()).collect() } else { args };

	for day in days {
		let day = if day.len() == 1 { format!("0{day}") } else { day };
		if !DAYS.contains(&day.as_str()) {
			eprintln!("Day {day}; unknown (known: {})", DAYS.join(", "));
			continue
		}
		let input = match util::load_input(&day) {
			Ok(input) => input,
			Err(error) => { eprintln!("Day {day}; no input: {error}"); continue }
		};
		let Some([part1, part2]) = run(&day, &input) else { continue };
		println!("Day {day}; part 1: {part1}, part 2: {part2}");
	}
}
