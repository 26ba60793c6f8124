//! Multi-axis sub-tensor selection

use crate::error::{normalize_axis, MatrixError, MatrixResult};
use mprl_core::DenseND;
use scirs2_core::numeric::Num;

/// What to keep along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisSelector {
    /// A single position (negative counts from the end); the axis is removed.
    Index(isize),
    /// The strided range `start..end`; the axis is kept.
    Range {
        start: isize,
        end: Option<isize>,
        step: isize,
    },
    /// Gather the listed positions; the axis is kept.
    Indices(Vec<usize>),
    /// The whole axis.
    Full,
}

impl AxisSelector {
    /// `start..end` with unit step
    pub fn range(start: isize, end: Option<isize>) -> Self {
        AxisSelector::Range {
            start,
            end,
            step: 1,
        }
    }
}

impl From<isize> for AxisSelector {
    fn from(index: isize) -> Self {
        AxisSelector::Index(index)
    }
}

impl From<Vec<usize>> for AxisSelector {
    fn from(indices: Vec<usize>) -> Self {
        AxisSelector::Indices(indices)
    }
}

/// Select a sub-tensor by applying `selectors[k]` to axis `dims[k]`.
///
/// Axis numbers refer to the axes of `data` itself and may be negative.
/// Axes not named in `dims` are kept whole.
///
/// # Errors
///
/// Fails when `dims` and `selectors` differ in length, when an axis is out of
/// range or named twice, or when a selector reaches outside its axis.
///
/// # Examples
///
/// ```
/// use mprl_core::DenseND;
/// use mprl_util::{get_sub_tensor, AxisSelector};
///
/// let a = DenseND::from_vec((0..60).map(|x| x as f64).collect(), &[3, 4, 5]).unwrap();
/// let sub = get_sub_tensor(&a, &[0, 2], &[AxisSelector::Index(1), AxisSelector::Index(3)]).unwrap();
/// assert_eq!(sub.shape(), &[4]);
/// assert_eq!(sub.to_vec(), vec![23.0, 28.0, 33.0, 38.0]);
/// ```
pub fn get_sub_tensor<T: Clone + Num>(
    data: &DenseND<T>,
    dims: &[isize],
    selectors: &[AxisSelector],
) -> MatrixResult<DenseND<T>> {
    if dims.len() != selectors.len() {
        return Err(MatrixError::invalid_argument(
            "get_sub_tensor",
            format!("{} axes but {} selectors", dims.len(), selectors.len()),
        ));
    }

    let rank = data.rank();
    let mut plan = Vec::with_capacity(dims.len());
    for (&dim, selector) in dims.iter().zip(selectors) {
        plan.push((normalize_axis("get_sub_tensor", dim, rank)?, selector));
    }
    plan.sort_by_key(|&(axis, _)| axis);
    if let Some(pair) = plan.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(MatrixError::invalid_argument(
            "get_sub_tensor",
            format!("axis {} is selected more than once", pair[0].0),
        ));
    }

    // Highest axis first, so removing an axis never renumbers a pending one.
    let mut out = data.clone();
    for &(axis, selector) in plan.iter().rev() {
        out = match selector {
            AxisSelector::Index(index) => {
                let size = out.shape()[axis] as isize;
                let resolved = if *index < 0 { index + size } else { *index };
                if resolved < 0 || resolved >= size {
                    return Err(MatrixError::invalid_argument(
                        "get_sub_tensor",
                        format!(
                            "index {} is out of bounds for axis {} with size {}",
                            index, axis, size
                        ),
                    ));
                }
                out.index_axis(axis, resolved as usize)?
            }
            AxisSelector::Range { start, end, step } => {
                out.slice_axis(axis, *start, *end, *step)?
            }
            AxisSelector::Indices(indices) => out.select(axis, indices)?,
            AxisSelector::Full => out,
        };
    }
    Ok(out)
}
