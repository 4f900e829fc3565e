#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::{fs::File, io::BufWriter};

use clap::Parser;
use otter_sls::{context::Context, reports::Report};

mod args;
mod read;
mod window;

use args::Args;
use window::StatsWindow;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {e:?}");
            std::process::exit(1);
        }
    };

    let mut ctx = Context::from_config(config);

    if let Err(e) = read::read_formula(&args.formula_file, args.dimacs, &mut ctx) {
        println!("c {e}");
        std::process::exit(1);
    }

    if args.stats {
        match StatsWindow::new(&ctx.config) {
            Some(window) => ctx.set_callback_step(Box::new(move |step| window.observe(step))),
            None => println!("c Unable to display stats"),
        }
    }

    let report = match ctx.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Search error: {e}");
            std::process::exit(2);
        }
    };

    println!(
        "c {report} after {} flips ({} in total) in {:.2?}",
        ctx.counters.flips, ctx.counters.total_flips, ctx.counters.time
    );

    match report {
        Report::Satisfiable => {
            if args.valuation {
                println!("v {}", ctx.valuation_string());
            }

            let path = args.solution_path();
            let written = match File::create(&path) {
                Ok(file) => ctx.write_solution(BufWriter::new(file)),
                Err(e) => Err(e.into()),
            };
            match written {
                Ok(()) => println!("c Solution written to {path:?}"),
                Err(e) => {
                    println!("c Failed to write solution to {path:?}: {e}");
                    std::process::exit(1);
                }
            }

            println!("s SATISFIABLE");
            std::process::exit(10)
        }

        Report::SearchExhausted | Report::RestartsExhausted | Report::Unknown => {
            println!("s UNKNOWN");
            std::process::exit(30)
        }
    }
}
