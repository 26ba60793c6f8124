//! Vectorized linear spaces and fractional-index interpolation

use crate::error::{MatrixError, MatrixResult};
use crate::expand::add_expand_dim;
use mprl_core::dense::{lerp_scalar, linspace_weight};
use mprl_core::DenseND;
use scirs2_core::numeric::{Float, FromPrimitive};

/// One end of a vectorized linear space: a scalar or a tensor.
#[derive(Debug, Clone, Copy)]
pub enum LinspaceBound<'a, T> {
    /// Broadcast to the shape of the other bound
    Scalar(T),
    /// Element-wise bound; fixes the batch shape of the result
    Tensor(&'a DenseND<T>),
}

/// Where [`tensor_linspace_with`] places the step axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinspaceLayout {
    /// `[*bound_shape, steps]`
    #[default]
    StepsLast,
    /// `[*add_dim, steps, dim_data]` for bounds of shape `[*add_dim, dim_data]`
    StepsBeforeData,
}

/// Vectorized `linspace`: element-wise evenly spaced values from `start` to `end`.
///
/// A scalar bound is broadcast to the shape of the tensor bound; two tensor
/// bounds must have the same shape. The result has shape
/// `start.shape + [steps]`, with `start` at step 0 and `end` at step
/// `steps - 1`, both exact. Two scalar bounds give a plain 1-D linear space.
///
/// # Examples
///
/// ```
/// use mprl_core::DenseND;
/// use mprl_util::{tensor_linspace, LinspaceBound};
///
/// let start = DenseND::from_vec(vec![0.0, 10.0], &[2]).unwrap();
/// let out = tensor_linspace(LinspaceBound::Tensor(&start), LinspaceBound::Scalar(20.0), 3).unwrap();
/// assert_eq!(out.shape(), &[2, 3]);
/// assert_eq!(out.to_vec(), vec![0.0, 10.0, 20.0, 10.0, 15.0, 20.0]);
/// ```
pub fn tensor_linspace<T: Float + FromPrimitive>(
    start: LinspaceBound<'_, T>,
    end: LinspaceBound<'_, T>,
    steps: usize,
) -> MatrixResult<DenseND<T>> {
    tensor_linspace_with(start, end, steps, LinspaceLayout::StepsLast)
}

/// [`tensor_linspace`] with an explicit placement of the step axis.
///
/// ```
/// use mprl_core::DenseND;
/// use mprl_util::{tensor_linspace_with, LinspaceBound, LinspaceLayout};
///
/// let start = DenseND::<f64>::zeros(&[4, 2]);
/// let end = DenseND::<f64>::ones(&[4, 2]);
/// let out = tensor_linspace_with(
///     LinspaceBound::Tensor(&start),
///     LinspaceBound::Tensor(&end),
///     5,
///     LinspaceLayout::StepsBeforeData,
/// )
/// .unwrap();
/// assert_eq!(out.shape(), &[4, 5, 2]);
/// ```
pub fn tensor_linspace_with<T: Float + FromPrimitive>(
    start: LinspaceBound<'_, T>,
    end: LinspaceBound<'_, T>,
    steps: usize,
    layout: LinspaceLayout,
) -> MatrixResult<DenseND<T>> {
    let (starts, ends, mut shape) = match (start, end) {
        (LinspaceBound::Scalar(s), LinspaceBound::Scalar(e)) => {
            return Ok(DenseND::linspace(s, e, steps));
        }
        (LinspaceBound::Tensor(s), LinspaceBound::Scalar(e)) => {
            (s.to_vec(), vec![e; s.len()], s.shape_vec())
        }
        (LinspaceBound::Scalar(s), LinspaceBound::Tensor(e)) => {
            (vec![s; e.len()], e.to_vec(), e.shape_vec())
        }
        (LinspaceBound::Tensor(s), LinspaceBound::Tensor(e)) => {
            if s.shape() != e.shape() {
                return Err(MatrixError::shape_mismatch(
                    "tensor_linspace",
                    s.shape(),
                    e.shape(),
                ));
            }
            (s.to_vec(), e.to_vec(), s.shape_vec())
        }
    };

    let weights: Vec<T> = (0..steps).map(|i| linspace_weight(i, steps)).collect();
    let mut data = Vec::with_capacity(starts.len() * steps);
    for (&s, &e) in starts.iter().zip(&ends) {
        data.extend(weights.iter().map(|&w| lerp_scalar(s, e, w)));
    }
    shape.push(steps);
    let out = DenseND::from_vec(data, &shape)?;

    let rank = shape.len();
    match layout {
        LinspaceLayout::StepsBeforeData if rank >= 2 => {
            let mut axes: Vec<usize> = (0..rank).collect();
            axes.swap(rank - 2, rank - 1);
            Ok(out.permute(&axes)?)
        }
        _ => Ok(out),
    }
}

/// Index the leading axis of `data` with fractional positions, interpolating
/// linearly between the two neighbouring rows.
///
/// `data` has shape `[num_data, *dim_data]` and `indices` shape
/// `[*add_dim, num_indices]`; the result has shape
/// `[*add_dim, num_indices, *dim_data]`. Positions outside
/// `[0, num_data - 1]` are clamped to the first or last row rather than
/// extrapolated.
///
/// # Errors
///
/// Fails when `data` has fewer than two rows or an index is not finite.
///
/// # Examples
///
/// ```
/// use mprl_core::DenseND;
/// use mprl_util::indexing_interpolate;
///
/// let data = DenseND::from_vec(vec![0.0, 10.0, 20.0, 30.0, 40.0], &[5]).unwrap();
/// let idx = DenseND::from_vec(vec![-1.0, 1.5, 10.0], &[3]).unwrap();
/// let out = indexing_interpolate(&data, &idx).unwrap();
/// assert_eq!(out.to_vec(), vec![0.0, 15.0, 40.0]);
/// ```
pub fn indexing_interpolate<T: Float + FromPrimitive>(
    data: &DenseND<T>,
    indices: &DenseND<T>,
) -> MatrixResult<DenseND<T>> {
    let num_data = data.shape().first().copied().unwrap_or(0);
    if num_data < 2 {
        return Err(MatrixError::invalid_argument(
            "indexing_interpolate",
            format!(
                "data needs at least two rows along its first axis, got shape {:?}",
                data.shape()
            ),
        ));
    }
    if indices.as_array().iter().any(|pos| !pos.is_finite()) {
        return Err(MatrixError::invalid_argument(
            "indexing_interpolate",
            "indices must be finite",
        ));
    }
    let last_lower = T::from_usize(num_data - 2).ok_or_else(|| {
        MatrixError::invalid_argument(
            "indexing_interpolate",
            format!("{} rows do not fit the index type", num_data),
        )
    })?;

    let lower_f = indices.floor().clip(T::zero(), last_lower);
    let raw_weights = indices - &lower_f;
    let weights = raw_weights.clip(T::zero(), T::one());
    if raw_weights != weights {
        log::trace!(
            "indexing_interpolate: clamped indices of shape {:?} into [0, {}]",
            indices.shape(),
            num_data - 1
        );
    }

    let lower: Vec<usize> = lower_f
        .as_array()
        .iter()
        .map(|f| {
            f.to_usize().ok_or_else(|| {
                MatrixError::invalid_argument(
                    "indexing_interpolate",
                    "clamped index is not representable as usize",
                )
            })
        })
        .collect::<MatrixResult<_>>()?;
    let upper: Vec<usize> = lower.iter().map(|i| i + 1).collect();

    let dim_data = &data.shape()[1..];
    let mut out_shape = indices.shape_vec();
    out_shape.extend_from_slice(dim_data);

    let start_rows = data.select(0, &lower)?.reshape(&out_shape)?;
    let end_rows = data.select(0, &upper)?.reshape(&out_shape)?;

    let first_new = indices.rank() as isize;
    let new_axes: Vec<isize> = (first_new..first_new + dim_data.len() as isize).collect();
    let weights = add_expand_dim(weights, &new_axes, dim_data)?;

    Ok(start_rows.lerp(&end_rows, &weights)?)
}
