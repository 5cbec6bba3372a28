use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tunnels_core::symbols::describe;
use tunnels_core::PuzzleSession;

mod cli;
mod commands;
mod event_log;
mod render;
mod settings;

use cli::{RunArgs, Source};
use commands::Command;
use event_log::{EventLog, Outcome, RecordingReporter, ReportEvent, RunStatus};

fn main() -> Result<()> {
    let run = cli::parse()?;
    init_logging(run.verbose);

    let config = settings::resolve_config(run.config.as_deref(), &run.overrides)?;
    let (mut session, seed) = match &run.source {
        Source::Layout(path) => {
            let layout = settings::load_layout(path)?;
            let session = PuzzleSession::from_layout(config, layout, RecordingReporter::new())
                .with_context(|| format!("building puzzle from {}", path.display()))?;
            (session, None)
        }
        Source::Random { seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            let session = PuzzleSession::generate(config, &mut rng, RecordingReporter::new())
                .context("generating puzzle")?;
            (session, *seed)
        }
    };

    if run.reveal {
        println!("Targets: {}", describe(session.target_nodes()));
    }

    let mut run_log = EventLog::start(&session, seed);
    let input: Box<dyn BufRead> = match run.script.as_ref() {
        Some(path) => Box::new(BufReader::new(
            File::open(path)
                .with_context(|| format!("opening command script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    println!("{}", render::render_view(&session.view()));
    let status = play(&mut session, input, &mut run_log, &run)?;
    run_log.finish(status, session.reporter());

    match status {
        RunStatus::Solved => println!("Module solved with {} strikes.", session.strikes()),
        RunStatus::Exploded => println!("Too many strikes. Boom."),
        RunStatus::Abandoned => println!("Run ended unsolved."),
    }

    if let Some(path) = run.event_log_json.as_ref() {
        let json =
            serde_json::to_string_pretty(&run_log).context("serializing event log to JSON")?;
        fs::write(path, json)
            .with_context(|| format!("writing event log to {}", path.display()))?;
        println!("Saved event log to {}", path.display());
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn play(
    session: &mut PuzzleSession<RecordingReporter>,
    input: Box<dyn BufRead>,
    run_log: &mut EventLog,
    run: &RunArgs,
) -> Result<RunStatus> {
    for line in input.lines() {
        let line = line.context("reading command")?;
        let command = match commands::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            Command::Turn(turn) => {
                let outcome = session.turn(turn);
                println!("> {}: {}", command.label(), render::describe_move(&outcome));
                run_log.record(session, command.label(), Outcome::Move(outcome));
            }
            Command::Confirm => {
                let outcome = session.confirm_target();
                println!(
                    "> {}: {}",
                    command.label(),
                    render::describe_confirm(&outcome)
                );
                run_log.record(session, command.label(), Outcome::Confirm(outcome));
            }
            Command::Look => {}
            Command::Help => {
                println!("{}", commands::HELP);
                continue;
            }
            Command::Quit => return Ok(RunStatus::Abandoned),
        }

        println!("{}", render::render_view(&session.view()));

        if session.is_solved() {
            return Ok(RunStatus::Solved);
        }
        if let Some(limit) = run.max_strikes {
            let reporter = session.reporter();
            if reporter.strike_count() >= limit {
                if let Some(ReportEvent::Strike { strike }) = reporter.events().last() {
                    println!("Final strike: {}", render::describe_strike(strike));
                }
                log::debug!(
                    "[tunnels #{}] strike limit {limit} reached",
                    session.instance()
                );
                return Ok(RunStatus::Exploded);
            }
        }
    }
    Ok(RunStatus::Abandoned)
}
