//! Closed-form propagation against step integration
//!
//! Propagates an eccentric low Earth orbit with Kepler's equation and with
//! the leapfrog and Euler integrators, printing the position error of each
//! integrator over several orbits.
//!
//! Run with: cargo run --package kepler --example leapfrog_vs_kepler

use kepler::forces::{ForceModel, PointMass};
use kepler::integrator::{Euler, Integrator, Leapfrog};
use kepler::{KeplerOrbit, OrbitalState};
use tracing_subscriber::EnvFilter;
use units::Mass;

fn main() -> kepler::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Leapfrog vs Kepler: Eccentric Earth Orbit\n");
    println!("{}", "=".repeat(60));

    let earth = Mass::from_earth_masses(1.0);
    let orbit = KeplerOrbit::new(1.0e7, 0.3, 0.5, 0.2, 1.0, earth);
    let period = orbit.period()?.to_seconds();
    let field = PointMass::new(earth);

    println!("\nOrbit:");
    println!("  Periapsis: {:.1} km", orbit.periapsis() / 1e3);
    println!("  Apoapsis: {:.1} km", orbit.apoapsis() / 1e3);
    println!("  Period: {:.1} min", period / 60.0);

    let start = OrbitalState::new(orbit, 0.0)?;
    let steps_per_orbit = 2000;
    let dt = period / steps_per_orbit as f64;

    let leapfrog = Leapfrog::new();
    let integrators: [(&str, &dyn Integrator); 2] = [("Leapfrog", &leapfrog), ("Euler", &Euler)];

    for (name, integrator) in integrators {
        println!("\n{name} (dt = {dt:.2} s):");
        let mut r = start.position();
        let mut v = start.velocity();
        let initial_energy = 0.5 * v.magnitude2() + field.potential(r);

        for orbit_number in 1..=5 {
            (r, v) = integrator.integrate(r, v, dt, steps_per_orbit, &field);

            let mut exact = start;
            exact.set_time(start.time() + orbit_number as f64 * period)?;
            let error = (r - exact.position()).magnitude();
            let energy = 0.5 * v.magnitude2() + field.potential(r);

            println!(
                "  Orbit {orbit_number}: position error {:>12.3} m, energy error {:.2e}",
                error,
                ((energy - initial_energy) / initial_energy).abs()
            );
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("Leapfrog keeps the energy error bounded; Euler's grows every orbit.");

    Ok(())
}
