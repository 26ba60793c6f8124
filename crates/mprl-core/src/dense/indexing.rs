//! Indexing and selection operations on tensors
//!
//! Single-axis selections that multi-axis slicing is composed from: fixed
//! index, strided range and gather by index list.

use super::types::DenseND;
use scirs2_core::ndarray::{Axis, Slice};
use scirs2_core::numeric::Num;

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    fn check_axis(&self, axis: usize) -> anyhow::Result<()> {
        if axis >= self.rank() {
            anyhow::bail!("Axis {} out of bounds for tensor of rank {}", axis, self.rank());
        }
        Ok(())
    }

    /// Select a single position along `axis`, removing that axis.
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let t = DenseND::from_vec((0..6).map(|x| x as f64).collect(), &[2, 3]).unwrap();
    /// let col = t.index_axis(1, 2).unwrap();
    /// assert_eq!(col.to_vec(), vec![2.0, 5.0]);
    /// ```
    pub fn index_axis(&self, axis: usize, index: usize) -> anyhow::Result<Self> {
        self.check_axis(axis)?;
        let size = self.shape()[axis];
        if index >= size {
            anyhow::bail!(
                "Index {} is out of bounds for axis {} with size {}",
                index,
                axis,
                size
            );
        }
        Ok(Self {
            data: self.data.index_axis(Axis(axis), index).to_owned(),
        })
    }

    /// Keep the strided range `start..end` (step `step`) along `axis`.
    ///
    /// Negative `start`/`end` count from the end of the axis and `end: None`
    /// means "to the end". A negative `step` walks the range backwards.
    /// Out-of-range bounds are an error.
    pub fn slice_axis(
        &self,
        axis: usize,
        start: isize,
        end: Option<isize>,
        step: isize,
    ) -> anyhow::Result<Self> {
        self.check_axis(axis)?;
        if step == 0 {
            anyhow::bail!("Slice step must be non-zero");
        }
        let size = self.shape()[axis] as isize;
        let resolve = |bound: isize| if bound < 0 { bound + size } else { bound };
        let (lo, hi) = (resolve(start), end.map(resolve).unwrap_or(size));
        if lo < 0 || lo > size || hi < 0 || hi > size {
            anyhow::bail!(
                "Slice {}..{:?} is out of bounds for axis {} with size {}",
                start,
                end,
                axis,
                size
            );
        }
        let slice = Slice::new(lo, Some(hi.max(lo)), step);
        Ok(Self {
            data: self.data.slice_axis(Axis(axis), slice).to_owned(),
        })
    }

    /// Gather the listed positions along `axis`, keeping the axis.
    ///
    /// ```
    /// use mprl_core::DenseND;
    ///
    /// let t = DenseND::from_vec(vec![10.0, 20.0, 30.0], &[3]).unwrap();
    /// let picked = t.select(0, &[2, 0, 2]).unwrap();
    /// assert_eq!(picked.to_vec(), vec![30.0, 10.0, 30.0]);
    /// ```
    pub fn select(&self, axis: usize, indices: &[usize]) -> anyhow::Result<Self> {
        self.check_axis(axis)?;
        let size = self.shape()[axis];
        if let Some(&bad) = indices.iter().find(|&&i| i >= size) {
            anyhow::bail!(
                "Index {} is out of bounds for axis {} with size {}",
                bad,
                axis,
                size
            );
        }
        Ok(Self {
            data: self.data.select(Axis(axis), indices),
        })
    }
}
