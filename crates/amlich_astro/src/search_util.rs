//! Newton refinement of solar-longitude crossings.

use tracing::warn;

use crate::solar::solar_longitude;

/// Days per radian of mean solar motion (365.2422 / 2π).
const DAYS_PER_RADIAN: f64 = 58.0;

/// Iteration cap for longitude refinement.
pub(crate) const MAX_ITERATIONS: u32 = 20;

/// Convergence threshold on the Newton step, in days.
pub(crate) const TOLERANCE_DAYS: f64 = 1e-6;

/// Outcome of a crossing refinement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Refined {
    pub jd: f64,
    pub approximate: bool,
}

/// Refine `jd0` toward the instant the apparent solar longitude equals
/// `target_deg`.
///
/// On hitting the iteration cap the unrefined estimate is returned with
/// `approximate = true`.
pub(crate) fn refine_solar_crossing(target_deg: f64, jd0: f64) -> Refined {
    refine_solar_crossing_with(target_deg, jd0, MAX_ITERATIONS)
}

pub(crate) fn refine_solar_crossing_with(target_deg: f64, jd0: f64, max_iter: u32) -> Refined {
    let mut jd = jd0;
    for _ in 0..max_iter {
        let diff = (target_deg - solar_longitude(jd)).to_radians();
        let step = DAYS_PER_RADIAN * diff.sin();
        jd += step;
        if step.abs() < TOLERANCE_DAYS {
            return Refined {
                jd,
                approximate: false,
            };
        }
    }
    warn!(
        target_deg,
        jd0, max_iter, "solar longitude refinement hit iteration cap, using estimate"
    );
    Refined {
        jd: jd0,
        approximate: true,
    }
}
