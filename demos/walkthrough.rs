//! Walks through Deutsch-Jozsa for every function type, printing the bars a
//! visualizer would draw at a few points of each animation.
//!
//! Run with `RUST_LOG=djsim=debug` to see the engine's log output.

use djsim::{AlgorithmStepper, BasisBar, DjError, FunctionType};
use tracing_subscriber::EnvFilter;

fn print_bars(bars: &[BasisBar]) {
    for bar in bars {
        println!(
            "    {:>6}  {:<22} {:.3}  {:>4.0}°",
            bar.label,
            "#".repeat((bar.magnitude * 20.0).round() as usize),
            bar.magnitude,
            bar.phase_degrees()
        );
    }
}

fn main() -> Result<(), DjError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let qubits = 2;
    for function_type in FunctionType::ALL {
        println!("\n=== {} qubits, {} ===", qubits, function_type.label());
        let mut stepper = AlgorithmStepper::new(qubits, function_type)?;
        println!("{}: {}", stepper.step().status(), stepper.step().prompt());
        print_bars(&stepper.frame(0.0));

        while !stepper.step().is_terminal() {
            let record = match stepper.advance() {
                Ok(record) => record,
                Err(rejection) => {
                    eprintln!("{}", rejection);
                    break;
                }
            };
            println!("\n{}", record);

            if stepper.is_animating() {
                for progress in [0.5, 1.0] {
                    println!("  progress {:.1}:", progress);
                    print_bars(&stepper.frame(progress));
                }
                stepper.commit_animation();
            }
            println!("  {}", stepper.step().prompt());
        }

        if let Some(outcome) = stepper.measurement() {
            println!("\nResult: {}", outcome);
        }
    }

    Ok(())
}
