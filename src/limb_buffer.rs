//! # LimbBuffer
//! Growable storage for the limbs of a magnitude.
//!
//! Up to [`INLINE_LIMBS`] limbs are kept inline, so values of at most 96 bits never touch
//! the heap. The first time a longer length is requested the limbs move into a `Vec` and
//! stay there for the rest of the buffer's life, even if it shrinks again.
//!
//! Cloning always yields an independent buffer: heap storage is copied eagerly.

use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use crate::constants::INLINE_LIMBS;

#[derive(Debug, Clone)]
enum Storage {
    Inline { len: usize, limbs: [u32; INLINE_LIMBS] },
    Heap(Vec<u32>),
}

/// Ordered sequence of `u32` limbs with an inline small-size fast path.
#[derive(Debug, Clone)]
pub struct LimbBuffer {
    storage: Storage,
}

impl LimbBuffer {
    /// Empty inline buffer.
    pub const fn new() -> Self {
        LimbBuffer { storage: Storage::Inline { len: 0, limbs: [0; INLINE_LIMBS] } }
    }

    /// Buffer of `len` copies of `fill`.
    pub fn from_elem(len: usize, fill: u32) -> Self {
        let storage = if len <= INLINE_LIMBS {
            Storage::Inline { len, limbs: [fill; INLINE_LIMBS] }
        } else {
            Storage::Heap(vec![fill; len])
        };
        LimbBuffer { storage }
    }

    pub fn from_slice(limbs: &[u32]) -> Self {
        if limbs.len() <= INLINE_LIMBS {
            let mut inline = [0; INLINE_LIMBS];
            inline[..limbs.len()].copy_from_slice(limbs);
            LimbBuffer { storage: Storage::Inline { len: limbs.len(), limbs: inline } }
        } else {
            LimbBuffer { storage: Storage::Heap(limbs.to_vec()) }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Inline { len, .. } => *len,
            Storage::Heap(heap) => heap.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of limbs the buffer can hold without reallocating.
    pub fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Inline { .. } => INLINE_LIMBS,
            Storage::Heap(heap) => heap.capacity(),
        }
    }

    /// Whether the limbs are still stored inline.
    pub fn is_inline(&self) -> bool {
        matches!(self.storage, Storage::Inline { .. })
    }

    #[inline]
    pub fn as_slice(&self) -> &[u32] {
        match &self.storage {
            Storage::Inline { len, limbs } => &limbs[..*len],
            Storage::Heap(heap) => heap,
        }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        match &mut self.storage {
            Storage::Inline { len, limbs } => &mut limbs[..*len],
            Storage::Heap(heap) => heap,
        }
    }

    /// The most significant limb, if any.
    #[inline]
    pub fn last(&self) -> Option<u32> {
        self.as_slice().last().copied()
    }

    /// Appends a limb, moving the storage to the heap if the inline slots are full.
    pub fn push(&mut self, limb: u32) {
        if let Storage::Inline { len, limbs } = &mut self.storage {
            if *len < INLINE_LIMBS {
                limbs[*len] = limb;
                *len += 1;
                return;
            }
        }
        self.heap_mut(self.len() + 1).push(limb);
    }

    /// Removes the last limb. Heap storage is kept.
    pub fn pop(&mut self) -> Option<u32> {
        match &mut self.storage {
            Storage::Inline { len, limbs } => {
                if *len == 0 {
                    return None;
                }
                *len -= 1;
                Some(limbs[*len])
            }
            Storage::Heap(heap) => heap.pop(),
        }
    }

    /// Replaces the whole contents with `len` copies of `fill`.
    pub fn assign(&mut self, len: usize, fill: u32) {
        self.resize(0, fill);
        self.resize(len, fill);
    }

    /// Grows or shrinks to `new_len`. New trailing limbs are set to `fill`.
    ///
    /// Shrinking never gives back reserved capacity and never moves heap limbs
    /// back inline.
    pub fn resize(&mut self, new_len: usize, fill: u32) {
        if let Storage::Inline { len, limbs } = &mut self.storage {
            if new_len <= INLINE_LIMBS {
                if new_len > *len {
                    limbs[*len..new_len].fill(fill);
                }
                *len = new_len;
                return;
            }
        }
        self.heap_mut(new_len).resize(new_len, fill);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.as_slice().iter()
    }

    /// Heap vector backing the buffer, promoting inline limbs first.
    fn heap_mut(&mut self, min_capacity: usize) -> &mut Vec<u32> {
        if let Storage::Inline { len, limbs } = self.storage {
            let mut heap = Vec::with_capacity(min_capacity.max(2 * INLINE_LIMBS));
            heap.extend_from_slice(&limbs[..len]);
            self.storage = Storage::Heap(heap);
        }
        match &mut self.storage {
            Storage::Heap(heap) => heap,
            Storage::Inline { .. } => unreachable!("limb buffer was just promoted"),
        }
    }
}

impl Default for LimbBuffer {
    fn default() -> Self {
        LimbBuffer::new()
    }
}

impl Index<usize> for LimbBuffer {
    type Output = u32;

    #[inline]
    fn index(&self, index: usize) -> &u32 {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for LimbBuffer {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut u32 {
        &mut self.as_mut_slice()[index]
    }
}

impl PartialEq for LimbBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl Eq for LimbBuffer {}

impl Hash for LimbBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a> IntoIterator for &'a LimbBuffer {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[test]
fn test_push_promotes_once() {
    let mut buf = LimbBuffer::new();
    assert!(buf.is_empty());
    for limb in 1..=3 {
        buf.push(limb);
        assert!(buf.is_inline());
    }
    assert_eq!(buf.capacity(), INLINE_LIMBS);

    buf.push(4);
    assert!(!buf.is_inline());
    assert_eq!(buf.as_slice(), &[1, 2, 3, 4]);

    while buf.pop().is_some() {}
    assert!(buf.is_empty());
    assert!(!buf.is_inline());
    assert_eq!(buf.pop(), None);
}

#[test]
fn test_resize() {
    let mut buf = LimbBuffer::from_elem(2, 7);
    buf.resize(3, 9);
    assert_eq!(buf.as_slice(), &[7, 7, 9]);
    assert!(buf.is_inline());

    buf.resize(8, 1);
    assert_eq!(buf.as_slice(), &[7, 7, 9, 1, 1, 1, 1, 1]);
    let capacity = buf.capacity();

    buf.resize(1, 0);
    assert_eq!(buf.as_slice(), &[7]);
    assert!(!buf.is_inline());
    assert_eq!(buf.capacity(), capacity);

    // shrink inline, then grow again: stale slots must be refilled
    let mut small = LimbBuffer::from_slice(&[1, 2, 3]);
    small.resize(1, 0);
    small.resize(3, 5);
    assert_eq!(small.as_slice(), &[1, 5, 5]);
}

#[test]
fn test_assign() {
    let mut buf = LimbBuffer::from_slice(&[1, 2]);
    buf.assign(5, 3);
    assert_eq!(buf.as_slice(), &[3; 5]);
    buf.assign(1, 0);
    assert_eq!(buf.as_slice(), &[0]);
    assert!(!buf.is_inline());
}

#[test]
fn test_clone_is_independent() {
    let original = LimbBuffer::from_slice(&[1, 2, 3, 4, 5]);
    let mut copy = original.clone();
    copy[0] = 100;
    copy.push(6);
    assert_eq!(original.as_slice(), &[1, 2, 3, 4, 5]);
    assert_eq!(copy.as_slice(), &[100, 2, 3, 4, 5, 6]);
}

#[test]
fn test_eq_ignores_storage_mode() {
    let inline = LimbBuffer::from_slice(&[1, 2]);
    let mut heap = LimbBuffer::from_slice(&[1, 2, 3, 4]);
    heap.resize(2, 0);
    assert!(!heap.is_inline());
    assert_eq!(inline, heap);
}

#[test]
#[should_panic]
fn test_index_out_of_range() {
    let buf = LimbBuffer::from_slice(&[1, 2]);
    let limb: u32 = buf[2];
    assert_eq!(limb, 0);
}
