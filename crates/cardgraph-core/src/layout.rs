//! Force-layout parameter model.
//!
//! [`compute_forces`] maps the user-facing [`ForceSettings`] sliders and the
//! card size from [`DisplaySettings`] onto the concrete parameters consumed by
//! the external force-simulation engine, using the fixed [`PHYSICS`] table.
//! The engine itself (ticking, collision resolution, rendering) lives outside
//! this crate.

use crate::settings::{DisplaySettings, ForceSettings};
use rand::Rng;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Multipliers, clamps and simulation tuning. Read-only for the life of the
/// process; [`PHYSICS`] is the table used in production.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicsConstants {
    pub repel_multiplier: f64,
    /// Floor for the spring rest length.
    pub min_link_distance: f64,
    pub link_strength_multiplier: f64,
    pub center_multiplier: f64,
    /// Repulsion is only applied between nodes whose distance lies inside
    /// `[many_body_distance_min, many_body_distance_max]`.
    pub many_body_distance_min: f64,
    pub many_body_distance_max: f64,
    /// Side of the square around the viewport center in which unplaced nodes
    /// start.
    pub initial_spread: f64,
    pub alpha_decay: f64,
    pub alpha_min: f64,
    pub velocity_decay: f64,
    pub cooldown_ticks: u32,
    pub cooldown_time_ms: u64,
}

pub const PHYSICS: PhysicsConstants = PhysicsConstants {
    repel_multiplier: 50.0,
    min_link_distance: 30.0,
    link_strength_multiplier: 0.5,
    center_multiplier: 0.1,
    many_body_distance_min: 10.0,
    many_body_distance_max: 2000.0,
    initial_spread: 400.0,
    alpha_decay: 0.0228,
    alpha_min: 0.001,
    velocity_decay: 0.4,
    cooldown_ticks: 300,
    cooldown_time_ms: 15_000,
};

impl Default for PhysicsConstants {
    fn default() -> Self {
        PHYSICS
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Concrete parameters for the force-simulation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParameters {
    /// Many-body strength; negative is repulsive.
    pub repulsion_strength: f64,
    pub link_distance: f64,
    pub link_strength: f64,
    pub center_strength: f64,
    pub collision_radius: f64,
    pub many_body_distance_min: f64,
    pub many_body_distance_max: f64,
    pub alpha_decay: f64,
    pub alpha_min: f64,
    pub velocity_decay: f64,
    pub cooldown_ticks: u32,
    pub cooldown_time_ms: u64,
}

impl LayoutParameters {
    /// Whether the engine applies repulsion between two nodes `distance` apart.
    pub fn repulsion_applies(&self, distance: f64) -> bool {
        (self.many_body_distance_min..=self.many_body_distance_max).contains(&distance)
    }
}

/// Map settings onto engine parameters. Pure; the only enforced clamp is the
/// link-distance floor.
pub fn compute_forces(
    forces: &ForceSettings,
    display: &DisplaySettings,
    constants: &PhysicsConstants,
) -> LayoutParameters {
    let params = LayoutParameters {
        // 0.0 - x rather than -x so a zero slider yields +0.0, not -0.0.
        repulsion_strength: 0.0 - forces.repel_force * constants.repel_multiplier,
        link_distance: forces.link_distance.max(constants.min_link_distance),
        link_strength: forces.link_force * constants.link_strength_multiplier,
        center_strength: forces.center_force * constants.center_multiplier,
        collision_radius: collision_radius(display),
        many_body_distance_min: constants.many_body_distance_min,
        many_body_distance_max: constants.many_body_distance_max,
        alpha_decay: constants.alpha_decay,
        alpha_min: constants.alpha_min,
        velocity_decay: constants.velocity_decay,
        cooldown_ticks: constants.cooldown_ticks,
        cooldown_time_ms: constants.cooldown_time_ms,
    };
    tracing::debug!(
        repulsion = params.repulsion_strength,
        link_distance = params.link_distance,
        link_strength = params.link_strength,
        center = params.center_strength,
        collision = params.collision_radius,
        "layout: computed forces"
    );
    params
}

/// Half the card diagonal.
pub fn collision_radius(display: &DisplaySettings) -> f64 {
    display.card_width.hypot(display.card_height) / 2.0
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Visible area of the graph canvas, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Starting point for a node with no saved position: the viewport center
/// plus a uniform offset in `[-spread/2, spread/2]` on each axis.
pub fn initial_position<R: Rng + ?Sized>(
    viewport: &Viewport,
    constants: &PhysicsConstants,
    rng: &mut R,
) -> Point {
    let half = constants.initial_spread.max(0.0) / 2.0;
    let center = viewport.center();
    Point::new(
        center.x + rng.gen_range(-half..=half),
        center.y + rng.gen_range(-half..=half),
    )
}

/// Resolve a node's position: a persisted point is returned as-is and draws
/// nothing from `rng`; otherwise a fresh [`initial_position`].
pub fn place_node<R: Rng + ?Sized>(
    persisted: Option<Point>,
    viewport: &Viewport,
    constants: &PhysicsConstants,
    rng: &mut R,
) -> Point {
    match persisted {
        Some(point) => point,
        None => initial_position(viewport, constants, rng),
    }
}
