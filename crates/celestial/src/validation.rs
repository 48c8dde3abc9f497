//! Advisory physical-consistency checks.
//!
//! Errors mark values that are physically invalid (non-positive mass,
//! fractions outside [0, 1]); warnings mark combinations that are
//! implausible but representable (a star with a surface, overlapping ring
//! bands). Validation reads the body and never changes it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::body::{BodyType, CelestialBody};
use crate::composition::{self, Composition};
use crate::rings::RingSystemProps;
use crate::surface::SurfaceProps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Error,
    Warning,
}

/// One finding, tagged with the dotted path of the offending field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub severity: Severity,
    pub message: String,
}

/// Ordered list of findings for one body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// No error-severity issues. Warnings never block validity.
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.severity == Severity::Warning)
    }

    /// Issues recorded against exactly `field`.
    pub fn issues_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues.iter().filter(move |issue| issue.field == field)
    }

    fn error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(field.into(), Severity::Error, message.into());
    }

    fn warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(field.into(), Severity::Warning, message.into());
    }

    fn push(&mut self, field: String, severity: Severity, message: String) {
        self.issues.push(ValidationIssue {
            field,
            severity,
            message,
        });
    }

    fn positive(&mut self, field: &str, value: f64) {
        if !(value.is_finite() && value > 0.0) {
            self.error(field, format!("must be positive and finite, got {}", value));
        }
    }

    fn non_negative(&mut self, field: &str, value: f64) {
        if !(value.is_finite() && value >= 0.0) {
            self.error(field, format!("must be non-negative, got {}", value));
        }
    }

    fn fraction(&mut self, field: &str, value: f64) {
        if !(0.0..=1.0).contains(&value) {
            self.error(field, format!("must lie in [0, 1], got {}", value));
        }
    }

    fn composition(&mut self, field: &str, composition: &Composition) {
        for (name, fraction) in composition {
            self.fraction(&format!("{}.{}", field, name), *fraction);
        }
        if !composition::is_normalized(composition) {
            self.warning(
                field,
                format!("fractions sum to {:.4}, expected 1.0", composition::total(composition)),
            );
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        };
        write!(f, "{}", str)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.field, self.message)
    }
}

/// Check a body's components for invalid values and implausible combinations.
pub fn validate_body(body: &CelestialBody) -> ValidationResult {
    let mut result = ValidationResult::default();

    if body.id.trim().is_empty() {
        result.error("id", "body id is empty");
    }

    match &body.physical {
        Some(physical) => {
            result.positive("physical.mass_kg", physical.mass_kg);
            result.positive("physical.radius_m", physical.radius_m);
            if !(0.0..1.0).contains(&physical.oblateness) {
                result.error(
                    "physical.oblateness",
                    format!("must lie in [0, 1), got {}", physical.oblateness),
                );
            }
            result.non_negative("physical.internal_heat_watts", physical.internal_heat_watts);
            result.positive("physical.rotation_period_s", physical.rotation_period_s);
        }
        None => result.error("physical", "physical properties are missing"),
    }

    match (&body.stellar, body.body_type) {
        (Some(stellar), body_type) => {
            if body_type != BodyType::Star {
                result.warning("stellar", format!("stellar properties on a {}", body_type));
            }
            result.non_negative("stellar.luminosity_watts", stellar.luminosity_watts);
            result.non_negative("stellar.effective_temperature_k", stellar.effective_temperature_k);
            result.fraction("stellar.metallicity", stellar.metallicity);
            result.non_negative("stellar.age_years", stellar.age_years);
        }
        (None, BodyType::Star) => result.warning("stellar", "star has no stellar properties"),
        (None, _) => {}
    }

    match &body.orbital {
        Some(orbit) => {
            result.positive("orbital.semi_major_axis_m", orbit.semi_major_axis_m);
            if orbit.eccentricity.is_nan() || orbit.eccentricity < 0.0 {
                result.error(
                    "orbital.eccentricity",
                    format!("must be non-negative, got {}", orbit.eccentricity),
                );
            } else if orbit.eccentricity >= 1.0 {
                result.warning(
                    "orbital.eccentricity",
                    format!("unbound orbit (e = {})", orbit.eccentricity),
                );
            }
            if !(0.0..=180.0).contains(&orbit.inclination_deg) {
                result.error(
                    "orbital.inclination_deg",
                    format!("must lie in [0, 180], got {}", orbit.inclination_deg),
                );
            }
        }
        None if body.body_type == BodyType::Moon => {
            result.warning("orbital", "moon has no orbit");
        }
        None => {}
    }

    if let Some(surface) = &body.surface {
        if body.body_type == BodyType::Star {
            result.warning("surface", "stars do not have solid surfaces");
        }
        validate_surface(&mut result, surface);
    }

    if let Some(atmosphere) = &body.atmosphere {
        result.non_negative("atmosphere.surface_pressure_pa", atmosphere.surface_pressure_pa);
        result.non_negative("atmosphere.scale_height_m", atmosphere.scale_height_m);
        result.non_negative("atmosphere.greenhouse_factor", atmosphere.greenhouse_factor);
        result.composition("atmosphere.composition", &atmosphere.composition);
    }

    if let Some(rings) = &body.ring_system {
        let body_radius = body.physical.as_ref().map(|p| p.radius_m);
        validate_rings(&mut result, rings, body_radius);
    }

    debug!(
        id = %body.id,
        errors = result.errors().count(),
        warnings = result.warnings().count(),
        "validated body"
    );

    result
}

fn validate_surface(result: &mut ValidationResult, surface: &SurfaceProps) {
    result.non_negative("surface.temperature_k", surface.temperature_k);
    result.fraction("surface.albedo", surface.albedo);
    result.fraction("surface.volcanism_level", surface.volcanism_level);
    result.composition("surface.materials", &surface.materials);

    if let Some(terrain) = &surface.terrain {
        result.non_negative("surface.terrain.elevation_range_m", terrain.elevation_range_m);
        result.fraction("surface.terrain.roughness", terrain.roughness);
        result.fraction("surface.terrain.crater_density", terrain.crater_density);
        result.fraction("surface.terrain.tectonic_activity", terrain.tectonic_activity);
        result.fraction("surface.terrain.erosion_level", terrain.erosion_level);
    }

    if let Some(hydrosphere) = &surface.hydrosphere {
        result.fraction("surface.hydrosphere.ocean_coverage", hydrosphere.ocean_coverage);
        result.fraction("surface.hydrosphere.ice_coverage", hydrosphere.ice_coverage);
        result.non_negative("surface.hydrosphere.mean_depth_m", hydrosphere.mean_depth_m);
        result.non_negative("surface.hydrosphere.salinity_ppt", hydrosphere.salinity_ppt);
        if hydrosphere.ocean_coverage + hydrosphere.ice_coverage > 1.0 + composition::COMPOSITION_TOLERANCE {
            result.warning("surface.hydrosphere", "ocean and ice coverage exceed the whole surface");
        }
    }

    if let Some(cryosphere) = &surface.cryosphere {
        result.fraction("surface.cryosphere.polar_cap_coverage", cryosphere.polar_cap_coverage);
        result.non_negative("surface.cryosphere.permafrost_depth_m", cryosphere.permafrost_depth_m);
        result.non_negative(
            "surface.cryosphere.subsurface_ocean_depth_m",
            cryosphere.subsurface_ocean_depth_m,
        );
        result.fraction("surface.cryosphere.cryovolcanism_level", cryosphere.cryovolcanism_level);
    }
}

fn validate_rings(result: &mut ValidationResult, rings: &RingSystemProps, body_radius: Option<f64>) {
    result.non_negative("ring_system.total_mass_kg", rings.total_mass_kg);

    for (index, band) in rings.bands.iter().enumerate() {
        let field = format!("ring_system.bands[{}]", index);
        result.positive(&format!("{}.inner_radius_m", field), band.inner_radius_m);
        result.positive(&format!("{}.outer_radius_m", field), band.outer_radius_m);
        if band.inner_radius_m >= band.outer_radius_m {
            result.error(
                field.as_str(),
                format!(
                    "inner radius {} is not inside outer radius {}",
                    band.inner_radius_m, band.outer_radius_m
                ),
            );
        }
        if let Some(radius) = body_radius
            && band.inner_radius_m < radius
        {
            result.error(
                format!("{}.inner_radius_m", field),
                format!("band starts inside the body (radius {})", radius),
            );
        }
        result.non_negative(&format!("{}.optical_depth", field), band.optical_depth);
        result.positive(&format!("{}.particle_size_m", field), band.particle_size_m);
        result.composition(&format!("{}.composition", field), &band.composition);
    }

    for (index, pair) in rings.bands.windows(2).enumerate() {
        if pair[0].overlaps(&pair[1]) {
            result.warning(
                format!("ring_system.bands[{}]", index + 1),
                format!("overlaps band {}", index),
            );
        }
    }
}
