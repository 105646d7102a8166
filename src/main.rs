use std::error::Error;

use log::info;

use checkers_engine::game::{run_match, MatchConfig};

/// Usage: checkers_engine [WHITE_STRATEGY] [RED_STRATEGY] [HEURISTIC] [DEPTH]
///
/// Strategies: standard, custom, avgmax, negamax, random.
/// Heuristics: standard, bad, equalize, combined.
fn main() -> Result<(), Box<dyn Error>> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stderr())
        .apply()?;

    let mut config = MatchConfig::default();
    let mut args = std::env::args().skip(1);
    if let Some(white) = args.next() {
        config.white = white.parse()?;
    }
    if let Some(red) = args.next() {
        config.red = red.parse()?;
    }
    if let Some(heuristic) = args.next() {
        config.heuristic = heuristic.parse()?;
    }
    if let Some(depth) = args.next() {
        config.depth = depth.parse()?;
    }

    info!(
        "white={} red={} heuristic={} depth={}",
        config.white, config.red, config.heuristic, config.depth
    );

    let mut rng = rand::thread_rng();
    match run_match(&config, &mut rng) {
        Some(winner) => info!("Congrats {winner}!"),
        None => info!("drawn at the {}-ply cap", config.max_plies),
    }

    Ok(())
}
