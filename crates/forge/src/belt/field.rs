use std::f64::consts::TAU;

use celestial::BodyType;
use nalgebra::Point3;
use orbital::{KeplerOptions, OrbitalElements, wrap_angle};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::spec::{AngularClustering, BeltFieldSpec, BeltGap, MajorBodyInput};
use crate::rng::SeededRng;
use crate::sampling::{sample_biased_low, sample_power_law};

/// Rejection-sampling budget for one radial draw
const MAX_RADIAL_ATTEMPTS: usize = 1000;

/// One belt member. Elements use AU and radians; position is in AU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeltAsteroidData {
    pub is_major: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<BodyType>,
    pub elements: OrbitalElements,
    pub position_au: Point3<f64>,
    pub radius_m: f64,
}

/// A generated belt: majors first, then background asteroids in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeltFieldData {
    pub spec: BeltFieldSpec,
    pub seed: u64,
    pub asteroids: Vec<BeltAsteroidData>,
}

impl BeltFieldData {
    pub fn majors(&self) -> impl Iterator<Item = &BeltAsteroidData> {
        self.asteroids.iter().filter(|a| a.is_major)
    }

    pub fn background(&self) -> impl Iterator<Item = &BeltAsteroidData> {
        self.asteroids.iter().filter(|a| !a.is_major)
    }
}

/// Unnormalized radial density t^c (1 − t)^c at normalized position `t`.
pub fn radial_density(t: f64, concentration: f64) -> f64 {
    (t * (1.0 - t)).max(0.0).powf(concentration)
}

/// Whether `radius_au` falls strictly inside any gap.
pub fn in_gap(gaps: &[BeltGap], radius_au: f64) -> bool {
    gaps.iter().any(|gap| gap.contains(radius_au))
}

/// Semi-major axis by rejection sampling against the radial density.
///
/// The density peaks at t = 0.5, so its value there bounds the envelope.
/// If every attempt is rejected the belt midpoint is used, even when a gap
/// covers it.
fn sample_semi_major_axis(spec: &BeltFieldSpec, rng: &mut SeededRng) -> f64 {
    let envelope = radial_density(0.5, spec.radial_concentration);
    for _ in 0..MAX_RADIAL_ATTEMPTS {
        let t = rng.uniform();
        let y = rng.uniform() * envelope;
        if y > radial_density(t, spec.radial_concentration) {
            continue;
        }
        let radius_au = spec.inner_radius_au + t * spec.width_au();
        if !in_gap(&spec.gaps, radius_au) {
            return radius_au;
        }
    }
    let midpoint = spec.midpoint_au();
    warn!(
        attempts = MAX_RADIAL_ATTEMPTS,
        midpoint_au = midpoint,
        in_gap = in_gap(&spec.gaps, midpoint),
        "radial sampling exhausted, using belt midpoint"
    );
    midpoint
}

/// Longitude of the asteroid, clumped around a cluster centre or uniform.
///
/// Clustered longitudes approximate a von Mises distribution with a normal
/// of σ = 1/√κ wrapped to [0, 2π).
fn sample_longitude(clustering: Option<&AngularClustering>, centres: &[f64], rng: &mut SeededRng) -> f64 {
    if let Some(clustering) = clustering
        && !centres.is_empty()
        && rng.chance(clustering.cluster_fraction)
    {
        let centre = centres[rng.index(centres.len())];
        let sigma = 1.0 / clustering.concentration.sqrt();
        return wrap_angle(rng.normal(centre, sigma));
    }
    rng.uniform_range(0.0, TAU)
}

fn place_major(major: &MajorBodyInput, options: &KeplerOptions) -> BeltAsteroidData {
    let elements = OrbitalElements::from_mean_anomaly(
        major.semi_major_axis_au,
        major.eccentricity,
        major.inclination_deg.to_radians(),
        major.longitude_ascending_node_deg.to_radians(),
        major.argument_periapsis_deg.to_radians(),
        major.mean_anomaly_deg.to_radians(),
        options,
    );
    BeltAsteroidData {
        is_major: true,
        body_id: Some(major.body_id.clone()),
        body_type: Some(major.body_type),
        position_au: elements.position(),
        elements,
        radius_m: major.radius_m,
    }
}

/// Generate a belt population.
///
/// Majors are placed exactly from their elements; each background asteroid
/// then takes, in order: semi-major axis, eccentricity, inclination, node,
/// argument of periapsis, longitude and radius from `rng`.
pub fn generate_field(spec: &BeltFieldSpec, rng: &mut SeededRng) -> BeltFieldData {
    let options = KeplerOptions::default();
    let mut asteroids = Vec::with_capacity(spec.major_bodies.len() + spec.asteroid_count);
    asteroids.extend(spec.major_bodies.iter().map(|major| place_major(major, &options)));

    let clustering = spec.clustering.as_ref();
    let centres: Vec<f64> = clustering
        .map(|c| (0..c.cluster_count).map(|_| rng.uniform_range(0.0, TAU)).collect())
        .unwrap_or_default();

    for index in 0..spec.asteroid_count {
        let semi_major_axis = sample_semi_major_axis(spec, rng);
        let eccentricity = sample_biased_low(rng, spec.max_eccentricity);
        let inclination = sample_biased_low(rng, spec.max_inclination_deg).to_radians();
        let longitude_ascending_node = rng.uniform_range(0.0, TAU);
        let argument_of_periapsis = rng.uniform_range(0.0, TAU);
        let longitude = sample_longitude(clustering, &centres, rng);
        let radius_m = sample_power_law(
            rng,
            spec.min_radius_m,
            spec.max_radius_m,
            spec.size_power_law_exponent,
        );

        let elements = OrbitalElements {
            semi_major_axis,
            eccentricity,
            inclination,
            longitude_ascending_node,
            argument_of_periapsis,
            true_anomaly: wrap_angle(longitude - argument_of_periapsis),
        };
        trace!(index, semi_major_axis, eccentricity, radius_m, "belt asteroid");
        asteroids.push(BeltAsteroidData {
            is_major: false,
            body_id: None,
            body_type: None,
            position_au: elements.position(),
            elements,
            radius_m,
        });
    }

    debug!(
        seed = rng.seed(),
        majors = spec.major_bodies.len(),
        background = spec.asteroid_count,
        gaps = spec.gaps.len(),
        clustered = spec.clustering.is_some(),
        "generated belt field"
    );

    BeltFieldData {
        spec: spec.clone(),
        seed: rng.seed(),
        asteroids,
    }
}
