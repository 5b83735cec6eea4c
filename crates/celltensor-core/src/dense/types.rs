//! Dense storage type definition and basic operations
//!
//! This module defines `DenseND<T>`, the cell buffer behind every dense
//! tensor. It has a fixed shape: no method changes the number or layout of
//! cells after construction, only their values.

use scirs2_core::ndarray_ext::{Array, IxDyn};
use scirs2_core::numeric::Num;
use std::fmt;

/// Dense N-dimensional storage backed by scirs2_core's ndarray
///
/// Cells are laid out in C-contiguous (row-major) order, so the cell at
/// multi-index `[i₀, …, iₙ₋₁]` lives at offset `Σ iₖ·strideₖ` with
/// `strideₖ = ∏ₘ₍ₘ>ₖ₎ shapeₘ`.
///
/// # Examples
///
/// ```
/// use celltensor_core::DenseND;
///
/// let storage = DenseND::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(storage.shape(), &[2, 3, 4]);
/// assert_eq!(storage.len(), 24);
/// ```
#[derive(Clone, PartialEq)]
pub struct DenseND<T> {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array<T, IxDyn>,
}

impl<T> DenseND<T>
where
    T: Clone + Num,
{
    /// Create storage from a vector with given shape
    ///
    /// # Arguments
    ///
    /// * `vec` - Flattened data in row-major order
    /// * `shape` - Target shape
    ///
    /// # Examples
    ///
    /// ```
    /// use celltensor_core::DenseND;
    ///
    /// let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let storage = DenseND::from_vec(data, &[2, 3]).unwrap();
    /// assert_eq!(storage.get(&[1, 0]), Some(&4.0));
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self { data: array })
    }

    /// Create storage filled with zeros
    ///
    /// # Examples
    ///
    /// ```
    /// use celltensor_core::DenseND;
    ///
    /// let storage = DenseND::<f64>::zeros(&[2, 3]);
    /// assert_eq!(storage.get(&[1, 2]), Some(&0.0));
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: Array::zeros(IxDyn(shape)),
        }
    }

    /// Number of dimensions
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Extent of every dimension
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the storage has no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cell values in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter()
    }

    /// Row-major offset of a multi-index, `None` if the index has the wrong
    /// length or any coordinate is out of range
    ///
    /// # Examples
    ///
    /// ```
    /// use celltensor_core::DenseND;
    ///
    /// let storage = DenseND::<f64>::zeros(&[10, 10]);
    /// assert_eq!(storage.offset(&[8, 9]), Some(89));
    /// assert_eq!(storage.offset(&[10, 9]), None);
    /// ```
    pub fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.rank() {
            return None;
        }
        let mut offset = 0;
        for (&idx, &size) in index.iter().zip(self.shape()) {
            if idx >= size {
                return None;
            }
            offset = offset * size + idx;
        }
        Some(offset)
    }

    /// Multi-index of a row-major offset
    pub fn unravel(&self, offset: usize) -> Option<Vec<usize>> {
        if offset >= self.len() {
            return None;
        }
        let mut index = vec![0; self.rank()];
        let mut remaining = offset;
        for (dim, &size) in self.shape().iter().enumerate().rev() {
            index[dim] = remaining % size;
            remaining /= size;
        }
        Some(index)
    }

    /// Get an element by index without panicking
    ///
    /// Returns `None` if the index has the wrong length or is out of range.
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        if index.len() != self.rank() {
            return None;
        }
        for (i, &idx) in index.iter().enumerate() {
            if idx >= self.shape()[i] {
                return None;
            }
        }
        self.data.get(index)
    }

    /// Get a mutable reference to an element by index without panicking
    ///
    /// # Examples
    ///
    /// ```
    /// use celltensor_core::DenseND;
    ///
    /// let mut storage = DenseND::<f64>::zeros(&[2, 2]);
    /// if let Some(cell) = storage.get_mut(&[0, 1]) {
    ///     *cell = 10.0;
    /// }
    /// assert_eq!(storage.get(&[0, 1]), Some(&10.0));
    /// assert!(storage.get_mut(&[2, 0]).is_none());
    /// ```
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        if index.len() != self.rank() {
            return None;
        }
        for (i, &idx) in index.iter().enumerate() {
            if idx >= self.shape()[i] {
                return None;
            }
        }
        self.data.get_mut(index)
    }

    /// Mutable element at a row-major offset
    ///
    /// # Examples
    ///
    /// ```
    /// use celltensor_core::DenseND;
    ///
    /// let mut storage = DenseND::<f64>::zeros(&[10, 10]);
    /// if let Some(cell) = storage.get_flat_mut(89) {
    ///     *cell = 11.0;
    /// }
    /// assert_eq!(storage.get(&[8, 9]), Some(&11.0));
    /// assert!(storage.get_flat_mut(100).is_none());
    /// ```
    pub fn get_flat_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.data.as_slice_mut()?.get_mut(offset)
    }
}

impl<T: fmt::Debug> fmt::Debug for DenseND<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseND")
            .field("shape", &self.data.shape())
            .field("data", &self.data.iter().collect::<Vec<_>>())
            .finish()
    }
}
