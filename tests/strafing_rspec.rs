//! Behaviour-driven tests using rust-rspec.
//!
//! These tests drive a mover through many ticks and check that the per-tick
//! rules compose: strafing in the air follows the cached squared-speed
//! constant, and friction on the ground brings a mover to a clean stop.

use approx::assert_relative_eq;
use strafekit::{
    fme_maxaccel_speed, fme_maxaccel_speed_c, fric_speed, MovementVars, StrafeDir, StrafeMode,
    TickScalars,
};
use test_utils::Mover;

#[derive(Clone, Debug)]
struct StrafeRun {
    tick: TickScalars,
    mover: Mover,
    dir: StrafeDir,
    mode: StrafeMode,
    speeds: Vec<f64>,
}

impl Default for StrafeRun {
    fn default() -> Self {
        Self {
            tick: MovementVars::default()
                .tick_scalars(0.001, false)
                .expect("default movement vars are valid"),
            mover: Mover::new([0.0; 3]),
            dir: StrafeDir::Clockwise,
            mode: StrafeMode::Linear,
            speeds: Vec::new(),
        }
    }
}

impl StrafeRun {
    fn launch(&mut self, frame_time: f64, vel: [f64; 3]) {
        test_utils::init_logging(false);
        self.tick = MovementVars::default()
            .tick_scalars(frame_time, false)
            .expect("default movement vars are valid");
        self.mover = Mover::new(vel);
        self.dir = StrafeDir::Clockwise;
        self.speeds = vec![self.mover.speed()];
    }

    fn air_strafe(&mut self, ticks: usize) {
        self.mode = StrafeMode::select(
            self.mover.speed(),
            self.tick.air_wish_speed,
            self.tick.air_accel,
        );
        for _ in 0..ticks {
            self.mover.air_strafe_tick(&self.tick, self.dir);
            self.speeds.push(self.mover.speed());
        }
    }

    fn slide(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.mover.friction_tick(&self.tick);
            self.speeds.push(self.mover.speed());
        }
    }

    fn initial_speed(&self) -> f64 {
        self.speeds.first().copied().expect("run was launched")
    }

    fn ticks_run(&self) -> usize {
        self.speeds.len() - 1
    }
}

#[test]
fn air_strafing_follows_the_cached_constant() {
    rspec::run(&rspec::given(
        "a mover at ground speed in the air at 1000 fps",
        StrafeRun::default(),
        |ctx| {
            ctx.before_each(|run| run.launch(0.001, [320.0, 0.0, -100.0]));
            ctx.when("it strafes clockwise for one second", |ctx| {
                ctx.before_each(|run| run.air_strafe(1000));
                ctx.then("the strafe mode can be cached", |run| {
                    assert_eq!(run.mode, StrafeMode::Partial);
                    assert!(run.mode.is_speed_independent());
                });
                ctx.then("the squared speed grows by a fixed amount per tick", |run| {
                    let start = run.initial_speed();
                    let c = fme_maxaccel_speed_c(
                        start * start,
                        run.tick.air_wish_speed,
                        run.tick.air_accel,
                    );
                    let ticks = run.ticks_run() as f64;
                    assert_relative_eq!(
                        run.mover.speed() * run.mover.speed(),
                        start * start + ticks * c,
                        max_relative = 1e-9
                    );
                });
                ctx.then("the velocity turns clockwise", |run| {
                    assert!(run.mover.vel[1] < 0.0);
                });
                ctx.then("the vertical component is untouched", |run| {
                    assert_eq!(run.mover.vel[2], -100.0);
                });
            });
            ctx.when("it strafes anticlockwise for one second", |ctx| {
                ctx.before_each(|run| {
                    run.dir = run.dir.flipped();
                    run.air_strafe(1000);
                });
                ctx.then("the velocity turns anticlockwise", |run| {
                    assert!(run.mover.vel[1] > 0.0);
                });
                ctx.then("every tick gains speed", |run| {
                    assert!(run.speeds.windows(2).all(|w| matches!(w, [a, b] if b > a)));
                });
            });
        },
    ));
}

#[test]
fn ground_friction_brings_a_mover_to_rest() {
    rspec::run(&rspec::given(
        "a mover sliding at 320 ups on the ground at 250 fps",
        StrafeRun::default(),
        |ctx| {
            ctx.before_each(|run| run.launch(0.004, [192.0, 256.0, 0.0]));
            ctx.when("it slides for two seconds", |ctx| {
                ctx.before_each(|run| run.slide(500));
                ctx.then("its speed never increases", |run| {
                    assert!(run.speeds.windows(2).all(|w| matches!(w, [a, b] if b <= a)));
                });
                ctx.then("every tick matches the scalar friction rule", |run| {
                    for pair in run.speeds.windows(2) {
                        if let [before, after] = pair {
                            assert_relative_eq!(
                                *after,
                                fric_speed(*before, run.tick.stop_speed, run.tick.tau_k),
                                epsilon = 1e-9
                            );
                        }
                    }
                });
                ctx.then("it comes to an exact stop", |run| {
                    assert_eq!(run.mover.vel, [0.0, 0.0, 0.0]);
                });
            });
        },
    ));
}

#[test]
fn one_ground_tick_composes_friction_and_acceleration() {
    let tick = MovementVars::default()
        .tick_scalars(0.004, false)
        .expect("default movement vars are valid");
    let mut mover = Mover::new([400.0, 0.0, 0.0]);
    mover.ground_strafe_tick(&tick, StrafeDir::Clockwise);

    let after_friction = fric_speed(400.0, tick.stop_speed, tick.tau_k);
    assert_relative_eq!(after_friction, 393.6, epsilon = 1e-9);
    assert_relative_eq!(
        mover.speed(),
        fme_maxaccel_speed(after_friction, tick.ground_wish_speed, tick.ground_accel),
        max_relative = 1e-12
    );
}
