use crate::responses::HealthRes;

/// Health check shared by every surface that reports liveness.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Reports the service as alive.
    ///
    /// The intake API has no backing store, so being able to answer is the whole check.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Intake API is alive".into(),
        }
    }
}
