use anyhow::Result;
use clap::Parser;
use letitride::betting;
use letitride::game::paytable::{BonusPaytable, Paytable};
use letitride::session::config::SessionConfig;
use letitride::simulation::controller::{Controller, SimulationConfig};
use letitride::simulation::progress::Progress;
use letitride::stats::chi::goodness_of_fit;
use letitride::stats::theory::five_card_probabilities;
use letitride::stats::wilson::wilson95;
use letitride::strategy::factory::{bonus_factory, factory};
use std::sync::Mutex;

#[derive(Parser, Debug)]
#[command(version, about = "Monte Carlo simulation of the Let It Ride casino game")]
struct Args {
    /// number of sessions to simulate
    #[arg(long, default_value_t = 1_000)]
    sessions: usize,

    /// master seed for the per-session seed table
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// playing strategy: basic, always-ride, always-pull
    #[arg(long, default_value = "basic")]
    strategy: String,

    /// betting system: flat, proportional, martingale, paroli,
    /// dalembert, fibonacci
    #[arg(long, default_value = "flat")]
    betting: String,

    /// bonus strategy: never, flat, ratio
    #[arg(long, default_value = "never")]
    bonus: String,

    /// starting bankroll per session
    #[arg(long, default_value_t = 1_000.0)]
    bankroll: f64,

    /// base bet per spot
    #[arg(long, default_value_t = 10.0)]
    bet: f64,

    /// stop a session once it is this far ahead
    #[arg(long)]
    win_limit: Option<f64>,

    /// stop a session once it is this far behind
    #[arg(long)]
    loss_limit: Option<f64>,

    /// hand cap per session
    #[arg(long, default_value_t = 500)]
    max_hands: usize,

    /// worker threads; zero means one per logical cpu
    #[arg(long, default_value_t = 0)]
    workers: usize,

    /// emit the aggregate as json instead of a report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = SimulationConfig {
        session: SessionConfig {
            bankroll: args.bankroll,
            base_bet: args.bet,
            min_bet: args.bet,
            max_bet: args.bet.max(500.0),
            win_limit: args.win_limit,
            loss_limit: args.loss_limit,
            max_hands: Some(args.max_hands),
            ..SessionConfig::default()
        },
        strategy: factory(&args.strategy)?,
        betting: betting::factory(&args.betting, args.bet)?,
        bonus: bonus_factory(&args.bonus, args.bet)?,
        paytable: Paytable::standard(),
        bonus_paytable: BonusPaytable::standard(),
        sessions: args.sessions,
        master_seed: args.seed,
        workers: args.workers,
    };

    log::info!(
        "simulating {} sessions of {} / {} / {} from seed {}",
        args.sessions,
        args.strategy,
        args.betting,
        args.bonus,
        args.seed,
    );
    let controller = Controller::new(config)?;
    let progress = Mutex::new(Progress::new(args.sessions, 20));
    let run = controller.run_parallel_with(|_, _| {
        if let Ok(mut progress) = progress.lock() {
            progress.tick();
        }
    })?;

    let aggregate = &run.aggregate;
    if args.json {
        println!("{}", serde_json::to_string_pretty(aggregate)?);
        return Ok(());
    }

    println!("sessions        {:>12}", aggregate.sessions);
    println!("hands           {:>12}", aggregate.hands);
    match wilson95(aggregate.wins, aggregate.sessions) {
        Some(interval) => println!(
            "win rate        {:>12.4}  [{:.4}, {:.4}]",
            aggregate.win_rate(),
            interval.low,
            interval.high,
        ),
        None => println!("win rate        {:>12}", "n/a"),
    }
    println!("total profit    {:>+12.2}", aggregate.profit);
    println!("ev per hand     {:>+12.4}", aggregate.ev_per_hand());
    match aggregate.stddev_profit() {
        Some(stddev) => println!(
            "session profit  {:>+12.2}  sd {:.2}",
            aggregate.mean_profit(),
            stddev,
        ),
        None => println!("session profit  {:>+12.2}", aggregate.mean_profit()),
    }
    for p in [5.0, 50.0, 95.0] {
        if let Some(profit) = aggregate.percentile(p) {
            println!("p{:<3}            {:>+12.2}", p as u32, profit);
        }
    }
    match goodness_of_fit(&aggregate.frequencies, &five_card_probabilities(), 0.05) {
        Some(verdict) => println!(
            "hand frequencies vs theory: chi2 {:.2} (df {}), p {:.4} -> {}",
            verdict.statistic,
            verdict.df,
            verdict.p_value,
            if verdict.consistent() {
                "consistent"
            } else {
                "inconsistent"
            },
        ),
        None => println!("hand frequencies vs theory: insufficient data"),
    }
    Ok(())
}
