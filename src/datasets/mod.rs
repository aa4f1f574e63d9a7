extern crate ndarray;

use ndarray::ArrayView1;

mod impl_datasets;
mod impl_design_matrix;
mod impl_targets;

/// A dataset pairs a design matrix (one row per sample) with the labels
/// assigned to each sample. It is the input consumed by the fitting routines.
pub struct DatasetBase<DM, T>
where
    DM: DesignMatrix,
{
    pub design_matrix: DM,
    pub targets: T,
}

pub trait DesignMatrix: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn n_features(&self) -> usize;
}

pub trait AsSingleTargets: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn as_single_targets(&self) -> ArrayView1<Self::Elem>;
}
