use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FuelError {
    #[error("moisture of {moisture}% leaves no dry mass to rescale to")]
    NoDryMass { moisture: f64 },

    #[error("moisture {moisture}% plus ash {ash}% leaves no combustible mass to rescale to")]
    NoCombustibleMass { moisture: f64, ash: f64 },
}
