use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P2, Z0},
};

/// Diffusivity (kinematic diffusion coefficient), m²/s in SI.
pub type Diffusivity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
