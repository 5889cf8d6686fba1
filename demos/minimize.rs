use clap::{Parser, ValueEnum};
use color_eyre::Result;
use qmc_rs::eval::{truth_table, Expression};
use qmc_rs::minimize::{BudgetPolicy, Minimizer, MinimizerConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Fail when the covering step exceeds its budget
    Fail,
    /// Fall back to a greedy cover
    Greedy,
}

#[derive(Parser)]
#[command(name = "minimize")]
#[command(about = "Minimize a Boolean function given by its minterms", long_about = None)]
struct Cli {
    /// Number of input variables
    #[arg(short, long, default_value_t = 4)]
    vars: usize,
    /// Minterms (indices of true rows, MSB = variable A)
    minterms: Vec<u64>,
    /// Maximum Petrick combinations kept after each step (0 = unlimited)
    #[arg(long, default_value_t = 16384)]
    budget: usize,
    /// What to do when the budget is exceeded
    #[arg(long, default_value = "fail")]
    policy: Policy,
    /// Print the prime implicant chart
    #[arg(long)]
    chart: bool,
    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    simplelog::TermLogger::init(
        if cli.debug {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Warn
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = MinimizerConfig::default()
        .with_max_combinations(if cli.budget == 0 { None } else { Some(cli.budget) })
        .with_budget_policy(match cli.policy {
            Policy::Fail => BudgetPolicy::Fail,
            Policy::Greedy => BudgetPolicy::Greedy,
        });
    let minimizer = Minimizer::new(config);
    log::debug!("config: {:?}", minimizer.config());

    let (result, trace) = minimizer.minimize_traced(&cli.minterms, cli.vars)?;
    println!("f = {}", result);

    for imp in &result.cover {
        println!("  {}  {:?}", imp.pattern(cli.vars), imp.minterms());
    }
    if cli.chart && !result.is_constant() {
        println!();
        print!("{}", trace);
    }

    if cli.vars <= 16 {
        let expr = Expression::parse(&result.expression, cli.vars)?;
        let ok = truth_table(&expr, cli.vars)
            .into_iter()
            .enumerate()
            .all(|(x, value)| value == trace.minterms.contains(&(x as u64)));
        println!("verified: {}", ok);
    }

    Ok(())
}
