//! Sun, Earth, Moon and Mars on Keplerian orbits
//!
//! Builds a small hierarchy from state vectors, advances the clock a few
//! times and prints where everything is as seen from Earth.
//!
//! Run with: RUST_LOG=debug cargo run --package kepler --example solar_system

use kepler::{Body, BodyId, SolarSystem, Vector3D};
use tracing_subscriber::EnvFilter;
use units::{Length, Mass, Time};

const SUN: BodyId = BodyId(0);
const EARTH: BodyId = BodyId(1);
const MOON: BodyId = BodyId(2);
const MARS: BodyId = BodyId(3);

fn main() -> kepler::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Keplerian Solar System\n");
    println!("{}", "=".repeat(60));

    let mut system = SolarSystem::new(Body::new(SUN, "Sun", Mass::from_solar_masses(1.0)));

    system.add_body_with_vectors(
        Body::new(EARTH, "Earth", Mass::from_earth_masses(1.0)),
        Vector3D::new(0.0, 1.47095e11, 0.0),
        Vector3D::new(3.029e4, 0.0, 0.0),
        SUN,
    )?;
    system.add_body_with_vectors(
        Body::new(MOON, "Moon", Mass::from_kg(7.342e22)),
        Vector3D::new(-3.626e8, 0.0, 0.0),
        Vector3D::new(0.0, -1.022e3, 0.0),
        EARTH,
    )?;
    system.add_body_with_vectors(
        Body::new(MARS, "Mars", Mass::from_kg(6.4171e23)),
        Vector3D::new(2.067e11, 0.0, 0.0),
        Vector3D::new(0.0, -2.650e4, 0.0),
        SUN,
    )?;

    println!("\nOrbits:");
    for id in [EARTH, MOON, MARS] {
        let body = system.body(id)?;
        let Some(state) = system.orbital_state(id)? else {
            continue;
        };
        let orbit = state.orbit();
        let period = orbit.period()?;
        println!(
            "  {:<6} a = {:.4} AU  e = {:.4}  i = {:.2}°  T = {:.2} days",
            body.name,
            Length::from_meters(orbit.semi_major_axis()).to_au(),
            orbit.eccentricity(),
            orbit.inclination().to_degrees(),
            period.to_days(),
        );
    }

    let step = Time::from_days(30.0);
    for month in 0..=6 {
        if month > 0 {
            system.tick(step.to_seconds());
            system.propagate()?;
        }

        println!("\nDay {:.0}:", Time::from_seconds(system.time()).to_days());
        let mut seen = system.relative_to(EARTH)?;
        seen.sort_by_key(|(body, _)| body.id());
        for (body, offset) in seen {
            println!(
                "  {:<6} {:>12.4} AU  {}",
                body.name,
                Length::from_meters(offset.to_vector().magnitude()).to_au(),
                offset
            );
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("Removing the Earth hands the Moon to the Sun");
    system.remove_body(EARTH)?;
    if let Some(state) = system.orbital_state(MOON)? {
        println!(
            "  Moon around the Sun: a = {:.4} AU  e = {:.4}",
            Length::from_meters(state.orbit().semi_major_axis()).to_au(),
            state.orbit().eccentricity(),
        );
    }

    Ok(())
}
