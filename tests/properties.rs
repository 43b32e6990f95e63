//! Property tests for the movement rules over randomly drawn states.

use proptest::prelude::*;
use strafekit::{
    collision_vel, dot_product, fme_maxaccel_costheta, fme_maxaccel_speed, fme_maxaccel_speed_c,
    fme_minaccel_speed, fme_speed, fme_vel_theta, fric_speed, fric_speedsq, planar_speed,
    StrafeMode,
};
use test_utils::cosine_sweep;

fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}

fn unit_normal() -> impl Strategy<Value = [f64; 3]> {
    (0.0..std::f64::consts::TAU, -1.0..=1.0_f64).prop_map(|(phi, z)| {
        let r = (1.0 - z * z).sqrt();
        [r * phi.cos(), r * phi.sin(), z]
    })
}

proptest! {
    #[test]
    fn friction_never_speeds_up(
        speed in 0.0..5000.0_f64,
        stop_speed in 0.0..200.0_f64,
        tau_k in 0.0..0.5_f64,
    ) {
        let after = fric_speed(speed, stop_speed, tau_k);
        prop_assert!(after >= 0.0);
        prop_assert!(after <= speed);
    }

    #[test]
    fn friction_is_monotone_in_speed(
        a in 0.0..5000.0_f64,
        b in 0.0..5000.0_f64,
        stop_speed in 0.0..200.0_f64,
        tau_k in 0.0..0.5_f64,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(fric_speed(lo, stop_speed, tau_k) <= fric_speed(hi, stop_speed, tau_k) + 1e-9);
    }

    #[test]
    fn squared_friction_matches_scalar(
        speed in 0.0..5000.0_f64,
        stop_speed in 0.0..200.0_f64,
        tau_k in 0.0..0.5_f64,
    ) {
        let scalar = fric_speed(speed, stop_speed, tau_k);
        let squared = fric_speedsq(speed * speed, stop_speed, tau_k);
        prop_assert!(close(scalar * scalar, squared, 1e-9), "{scalar}² vs {squared}");
    }

    #[test]
    fn forward_increment_never_slows(
        speed in 0.0..5000.0_f64,
        cos_theta in 0.0..=1.0_f64,
        wish_speed in -50.0..400.0_f64,
        accel_limit in 0.0..50.0_f64,
    ) {
        let after = fme_speed(speed, cos_theta, wish_speed, accel_limit);
        prop_assert!(after >= speed * (1.0 - 1e-12));
        prop_assert!(fme_maxaccel_speed(speed, wish_speed, accel_limit) >= after * (1.0 - 1e-12));
    }

    #[test]
    fn maxaccel_equals_fme_at_its_angle(
        speed in 0.0..5000.0_f64,
        wish_speed in -50.0..400.0_f64,
        accel_limit in -50.0..50.0_f64,
    ) {
        let cos_theta = fme_maxaccel_costheta(speed, wish_speed, accel_limit);
        prop_assert!(close(
            fme_maxaccel_speed(speed, wish_speed, accel_limit),
            fme_speed(speed, cos_theta, wish_speed, accel_limit),
            1e-12,
        ));
    }

    #[test]
    fn maxaccel_constant_matches_speed(
        speed in 0.0..5000.0_f64,
        wish_speed in -50.0..400.0_f64,
        accel_limit in -50.0..50.0_f64,
    ) {
        let c = fme_maxaccel_speed_c(speed * speed, wish_speed, accel_limit);
        prop_assert!(close(
            (speed * speed + c).sqrt(),
            fme_maxaccel_speed(speed, wish_speed, accel_limit),
            1e-9,
        ));
    }

    #[test]
    fn squared_selection_agrees(
        speed in 0.0..5000.0_f64,
        wish_speed in -50.0..400.0_f64,
        accel_limit in -50.0..50.0_f64,
    ) {
        prop_assert_eq!(
            StrafeMode::select(speed, wish_speed, accel_limit),
            StrafeMode::select_squared(speed * speed, wish_speed, accel_limit)
        );
    }

    #[test]
    fn minaccel_is_a_lower_bound(
        speed in 0.0..2000.0_f64,
        wish_speed in -50.0..400.0_f64,
        accel_limit in -50.0..50.0_f64,
    ) {
        let least = fme_minaccel_speed(speed, wish_speed, accel_limit);
        prop_assert!(least >= 0.0);
        for cos_theta in cosine_sweep(200) {
            let candidate = fme_speed(speed, cos_theta, wish_speed, accel_limit);
            prop_assert!(candidate >= least - 1e-9 * speed.max(1.0));
        }
    }

    #[test]
    fn velocity_form_reaches_fme_speed(
        vx in -2000.0..2000.0_f64,
        vy in -2000.0..2000.0_f64,
        theta in 0.0..std::f64::consts::TAU,
        wish_speed in 0.0..400.0_f64,
        accel_limit in 0.0..50.0_f64,
    ) {
        let mut vel = [vx, vy, 0.0];
        let speed = planar_speed(&vel);
        prop_assume!(speed > 1e-3);
        fme_vel_theta(&mut vel, speed, theta.cos(), theta.sin(), wish_speed, accel_limit);
        prop_assert!(close(
            planar_speed(&vel),
            fme_speed(speed, theta.cos(), wish_speed, accel_limit),
            1e-9,
        ));
    }

    #[test]
    fn clipping_is_idempotent(
        v in prop::array::uniform3(-1000.0..1000.0_f64),
        n in unit_normal(),
    ) {
        let mut once = v;
        collision_vel(&mut once, &n, 1.0);
        prop_assert!(dot_product(&once, &n).abs() <= 1e-9 * 1000.0);

        let mut twice = once;
        collision_vel(&mut twice, &n, 1.0);
        for (a, b) in once.iter().zip(&twice) {
            prop_assert!((a - b).abs() <= 1e-9);
        }
    }
}
