use anyhow::Result;
use binfit::SolverConfig;
use binfit::factory::create_solvers;
use binfit::strategies::Solver;
use binfit_cli::io;
use binfit_cli::io::cli::Cli;
use binfit_cli::io::output::{CliOutput, solution_line};
use clap::Parser as ClapParser;
use log::info;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => {
            info!("[MAIN] no config file provided, use --config-file to provide a custom config");
            SolverConfig::default()
        }
        Some(config_file) => io::read_config(config_file)?,
    };

    info!("[MAIN] successfully parsed SolverConfig: {config:?}");

    let solvers = create_solvers(&args.solver_type, args.load, &args.bins, config)?;

    let mut solutions = Vec::with_capacity(solvers.len());
    for solver in &solvers {
        info!(
            "[MAIN] applying '{}' solver to a load of {} and bins {:?}",
            solver.kind(),
            args.load,
            args.bins
        );
        let solution = solver.solve()?;
        println!("{}", solution_line(args.load, &args.bins, &solution));
        solutions.push(solution);
    }

    if let Some(output_file) = &args.output_file {
        let output = CliOutput {
            load: args.load,
            bins: args.bins.clone(),
            config,
            solutions,
        };
        io::write_json(&output, output_file)?;
    }

    Ok(())
}
