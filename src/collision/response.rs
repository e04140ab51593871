//! # Sequential Impulse Resolution
//!
//! Consumes one manifold at a time: a normal impulse and a Coulomb friction
//! impulse per contact point, then a Baumgarte-style positional correction
//! for the pair. A single un-iterated pass; contact order matters and is
//! part of the engine's deterministic contract.

use super::Manifold;
use crate::body::Body;

/// Penetration tolerated before positional correction kicks in; avoids
/// jitter from correcting tiny steady-state overlap.
const SLOP: f32 = 0.00198;
/// Fraction of the remaining penetration corrected per step; partial so the
/// correction cannot inject energy.
const CORRECTION_PERCENT: f32 = 0.25;

/// Resolve one manifold between bodies `a` and `b`.
///
/// The total impulse is split evenly across the manifold's contacts (a
/// simplifying approximation, not a block solve). Restitution takes the
/// weaker of the two materials; friction coefficients are averaged.
pub fn resolve_collision(a: &mut Body, b: &mut Body, manifold: &Manifold) {
    let normal = manifold.normal;
    let inv_contact_count = 1.0 / manifold.contacts.len() as f32;

    for &contact in &manifold.contacts {
        let rel_a = contact - a.pos;
        let rel_b = contact - b.pos;
        let rel_vel = b.vel_at(rel_b) - a.vel_at(rel_a);
        let contact_vel = rel_vel.dot(normal);

        // Don't resolve if velocities are separating
        if contact_vel > 0.0 {
            continue;
        }

        let mut inv_mass_sum = a.inv_mass + b.inv_mass;
        inv_mass_sum += rel_a.cross(normal).powi(2) * a.inv_inertia;
        inv_mass_sum += rel_b.cross(normal).powi(2) * b.inv_inertia;

        let e = a.material.restitution.min(b.material.restitution);
        let j = -(1.0 + e) * contact_vel / inv_mass_sum * inv_contact_count;

        let impulse = normal * j;
        a.apply_impulse(-impulse, rel_a);
        b.apply_impulse(impulse, rel_b);

        // Friction acts on whatever tangential velocity is left after the
        // normal impulse.
        let rel_vel = b.vel_at(rel_b) - a.vel_at(rel_a);
        let mut tangent = rel_vel - normal * rel_vel.dot(normal);
        if tangent.squared_length() == 0.0 {
            continue;
        }
        tangent.normalize();

        let j_t = -rel_vel.dot(tangent) / inv_mass_sum * inv_contact_count;
        if j_t == 0.0 {
            continue;
        }

        let mu_s = (a.material.static_friction + b.material.static_friction) * 0.5;
        let mu_d = (a.material.dynamic_friction + b.material.dynamic_friction) * 0.5;

        // Inside the static friction cone the full tangential impulse is
        // applied; outside it is clamped by the dynamic coefficient.
        let tangent_impulse = if j_t.abs() <= j * mu_s {
            tangent * j_t
        } else {
            tangent * (-j * mu_d)
        };

        a.apply_impulse(-tangent_impulse, rel_a);
        b.apply_impulse(tangent_impulse, rel_b);
    }

    if manifold.depth > SLOP {
        let step = manifold.depth * CORRECTION_PERCENT;
        let push = normal * (step / (a.inv_mass + b.inv_mass));
        a.correct_position(-push);
        b.correct_position(push);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec2;
    use crate::types::Material;

    fn frictionless(restitution: f32) -> Material {
        Material::new(restitution, 0.0, 0.0)
    }

    #[test]
    fn separating_contacts_receive_no_impulse() {
        let mut a = Body::circle(Vec2::ZERO, 1.0)
            .unwrap()
            .with_velocity(Vec2::new(-1.0, 0.0));
        let mut b = Body::circle(Vec2::new(1.5, 0.0), 1.0)
            .unwrap()
            .with_velocity(Vec2::new(1.0, 0.0));
        let manifold = Manifold {
            normal: Vec2::new(1.0, 0.0),
            depth: 0.0,
            contacts: vec![Vec2::new(0.75, 0.0)],
        };
        resolve_collision(&mut a, &mut b, &manifold);
        assert_eq!(a.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(b.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn elastic_head_on_collision_swaps_equal_masses() {
        let mut a = Body::circle(Vec2::new(-0.45, 0.0), 0.5)
            .unwrap()
            .with_velocity(Vec2::new(1.0, 0.0))
            .with_material(frictionless(1.0));
        let mut b = Body::circle(Vec2::new(0.45, 0.0), 0.5)
            .unwrap()
            .with_velocity(Vec2::new(-1.0, 0.0))
            .with_material(frictionless(1.0));
        let manifold =
            crate::collision::detect_circle_circle_collision(&a, &b).expect("overlap");
        resolve_collision(&mut a, &mut b, &manifold);
        assert!((a.vel.x - -1.0).abs() < 1e-5);
        assert!((b.vel.x - 1.0).abs() < 1e-5);
        assert!(a.vel.y.abs() < 1e-6);
        assert!(b.vel.y.abs() < 1e-6);
    }

    #[test]
    fn deep_penetration_is_partially_corrected() {
        let mut a = Body::circle(Vec2::ZERO, 1.0).unwrap();
        let mut b = Body::circle(Vec2::new(1.0, 0.0), 1.0).unwrap();
        let manifold = Manifold {
            normal: Vec2::new(1.0, 0.0),
            depth: 1.0,
            contacts: vec![Vec2::new(0.5, 0.0)],
        };
        let gap_before = b.pos.x - a.pos.x;
        resolve_collision(&mut a, &mut b, &manifold);
        let gap_after = b.pos.x - a.pos.x;
        // A quarter of the penetration, split across the pair.
        assert!((gap_after - gap_before - 0.25).abs() < 1e-5);
    }

    #[test]
    fn shallow_penetration_within_slop_is_left_alone() {
        let mut a = Body::circle(Vec2::ZERO, 1.0).unwrap();
        let mut b = Body::circle(Vec2::new(1.999, 0.0), 1.0).unwrap();
        let manifold = Manifold {
            normal: Vec2::new(1.0, 0.0),
            depth: 0.001,
            contacts: vec![Vec2::new(1.0, 0.0)],
        };
        resolve_collision(&mut a, &mut b, &manifold);
        assert_eq!(a.pos, Vec2::ZERO);
        assert_eq!(b.pos, Vec2::new(1.999, 0.0));
    }

    #[test]
    fn friction_opposes_tangential_sliding() {
        // Circle sliding along +x while pressed into a floor plane.
        let mut plane = Body::plane(Vec2::ZERO, Vec2::new(0.0, 1.0)).unwrap();
        let mut circle = Body::circle(Vec2::new(0.0, 0.95), 1.0)
            .unwrap()
            .with_velocity(Vec2::new(2.0, -1.0));
        let manifold =
            crate::collision::detect_plane_circle_collision(&plane, &circle).expect("overlap");
        resolve_collision(&mut plane, &mut circle, &manifold);
        assert!(circle.vel.x < 2.0);
        assert!(circle.vel.y > -1.0);
    }
}
