//! Dimension types and traits.

use core::marker::PhantomData;

/// Marker trait for dimensions.
pub trait Dimension {}

/// Dimension formed by dividing two dimensions (`N / D`).
///
/// Density is `DivDim<Mass, Volume>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DivDim<N: Dimension, D: Dimension>(PhantomData<(N, D)>);
impl<N: Dimension, D: Dimension> Dimension for DivDim<N, D> {}
