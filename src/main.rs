use clap::{arg, command, ArgAction};
use log::LevelFilter;

use combinatorics_calculator::format::render_report;
use combinatorics_calculator::input::{parse_int, InputPair};
use combinatorics_calculator::report::Report;
use combinatorics_calculator::session::Session;

fn main() -> anyhow::Result<()> {
    let matches = command!()
        .allow_negative_numbers(true)
        .arg(arg!(n: [N] "Total items (n)"))
        .arg(arg!(k: [K] "Items to choose (k)"))
        .arg(
            arg!(interactive: -i --interactive "Edit n and k from stdin")
                .action(ArgAction::SetTrue),
        )
        .arg(arg!(verbose: -v --verbose "Log failed quantities").action(ArgAction::SetTrue))
        .get_matches();

    let level = match flag(&matches, "verbose") {
        true => LevelFilter::Debug,
        false => LevelFilter::Warn,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let defaults = InputPair::default();
    let input = InputPair::new(
        matches
            .get_one::<String>("n")
            .map_or(defaults.n, |v| parse_int(v)),
        matches
            .get_one::<String>("k")
            .map_or(defaults.k, |v| parse_int(v)),
    );

    if flag(&matches, "interactive") {
        let mut session = Session::new(input, |line: String| println!("{}", line));
        session.run(std::io::stdin().lock())?;
    } else {
        for line in render_report(&Report::compute(input)) {
            println!("{}", line);
        }
    }

    Ok(())
}

fn flag(matches: &clap::ArgMatches, id: &str) -> bool {
    matches.get_one::<bool>(id).copied().unwrap_or(false)
}
