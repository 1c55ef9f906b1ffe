// tests/transform_properties.rs

use djsim::{DjError, FunctionType, OracleFunction, QuantumStateVector, apply_hadamard, apply_oracle, check_normalization};
use djsim::validation::states_approx_equal;
use num_complex::Complex;
use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;

const TEST_TOLERANCE: f64 = 1e-9;

/// Random normalized state on `n` qubits, reproducible from `seed`.
fn random_state(n: usize, seed: u64) -> Result<QuantumStateVector, DjError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut amps: Vec<Complex<f64>> = (0..1usize << n)
        .map(|_| {
            let re: f64 = StandardUniform.sample(&mut rng);
            let im: f64 = StandardUniform.sample(&mut rng);
            Complex::new(re - 0.5, im - 0.5)
        })
        .collect();
    let norm = amps.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt();
    for amp in amps.iter_mut() {
        *amp /= norm;
    }
    QuantumStateVector::from_amplitudes(amps)
}

#[test]
fn test_hadamard_twice_restores_initial_state() {
    for n in 1..=8 {
        let initial = QuantumStateVector::initialize(n);
        let twice = apply_hadamard(&apply_hadamard(&initial));
        assert!(states_approx_equal(&twice, &initial, TEST_TOLERANCE), "n = {}", n);
    }
}

#[test]
fn test_hadamard_is_self_inverse_on_random_states() -> Result<(), DjError> {
    for n in 1..=6 {
        for seed in 0..5 {
            let state = random_state(n, seed)?;
            let twice = apply_hadamard(&apply_hadamard(&state));
            assert!(states_approx_equal(&twice, &state, TEST_TOLERANCE), "n = {}, seed = {}", n, seed);
        }
    }
    Ok(())
}

#[test]
fn test_transforms_preserve_normalization() -> Result<(), DjError> {
    for n in 1..=6 {
        for seed in 0..5 {
            let state = random_state(n, 100 + seed)?;
            check_normalization(&state, None)?;
            check_normalization(&apply_hadamard(&state), None)?;
            for function_type in FunctionType::ALL {
                let oracle = OracleFunction::new(function_type, n);
                check_normalization(&apply_oracle(&state, &oracle), None)?;
            }
        }
    }
    Ok(())
}

#[test]
fn test_oracle_keeps_magnitudes_and_is_involution() -> Result<(), DjError> {
    let n = 4;
    let state = random_state(n, 7)?;
    let oracle = OracleFunction::new(FunctionType::Balanced, n);
    let once = apply_oracle(&state, &oracle);
    for (before, after) in state.amplitudes().iter().zip(once.amplitudes()) {
        assert!((before.norm() - after.norm()).abs() < TEST_TOLERANCE);
    }
    let twice = apply_oracle(&once, &oracle);
    assert!(states_approx_equal(&twice, &state, TEST_TOLERANCE));
    Ok(())
}
