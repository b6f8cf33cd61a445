use crate::{error::IntentError, predicate::Field};
use serde::Serialize;

///
/// Direction
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

///
/// SortSpec
///
/// Explicit result ordering over one queryable field. Rows whose sort
/// field is missing (teamless members under a joined-field sort) order
/// after every present value under either direction.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortSpec {
    pub field: Field,
    pub direction: Direction,
}

impl SortSpec {
    #[must_use]
    pub const fn asc(field: Field) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    #[must_use]
    pub const fn desc(field: Field) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }
}

///
/// PageRequest
///
/// Zero-based page window over the full ordered result.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Option<SortSpec>,
}

impl PageRequest {
    /// Request page `page` (zero-based) of `size` rows.
    pub const fn of(page: u32, size: u32) -> Result<Self, IntentError> {
        if size == 0 {
            return Err(IntentError::PageSizeZero);
        }

        Ok(Self {
            page,
            size,
            sort: None,
        })
    }

    /// Attach an explicit ordering for the sliced result.
    #[must_use]
    pub const fn sorted(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub const fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// First row index of this page in the full ordered result.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

///
/// SliceWindow
///
/// Canonical slice bounds in usize-domain, saturated and clamped to the
/// materialized row count.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SliceWindow {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// Compute clamped slice bounds from logical pagination inputs.
#[must_use]
pub(crate) fn compute_slice_window(offset: u64, limit: u64, total_rows: usize) -> SliceWindow {
    let start = usize::try_from(offset).unwrap_or(usize::MAX).min(total_rows);
    let length = usize::try_from(limit).unwrap_or(usize::MAX);
    let end = start.saturating_add(length).min(total_rows);

    SliceWindow { start, end }
}

///
/// Page
///
/// Bounded slice of a result set plus the total count matching the full
/// filter, independent of the slice bounds.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Page<T> {
    items: Vec<T>,
    page: u32,
    size: u32,
    total: u64,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, page: u32, size: u32, total: u64) -> Self {
        Self {
            items,
            page,
            size,
            total,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size; the last slice may hold fewer rows.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Total matching count under the full filter.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Rows actually present in this slice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pages needed to cover `total` at the requested size.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        let size = u64::from(self.size);
        if size == 0 {
            return 0;
        }

        self.total.div_ceil(size)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        u64::from(self.page).saturating_add(1) >= self.total_pages()
    }

    /// Consume this page and return `(items, total)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, u64) {
        (self.items, self.total)
    }

    /// Map the slice rows while preserving the page envelope.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}

///
/// TESTS
///
