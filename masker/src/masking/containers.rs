//! `Mask` and `MaskLeaf` implementations for standard library types.
//!
//! Containers (`Option`, `Vec`, `VecDeque`, `Box`, arrays, `RefCell`, maps)
//! forward to their contents. Scalars and plain strings have no-op `Mask`
//! implementations so that unannotated fields of those types are left alone.
//!
//! ## Map Keys Are Not Masked
//!
//! For `HashMap` and `BTreeMap` only the **values** are masked. Keys are left
//! untouched to preserve hashing and ordering invariants.

use std::{
    borrow::Cow,
    cell::RefCell,
    collections::{BTreeMap, HashMap, VecDeque},
    marker::PhantomData,
};

use super::traits::{Mask, MaskLeaf};
use crate::mask::MaskStrategy;

// =============================================================================
// Passthrough implementations (scalars and primitives)
// =============================================================================

macro_rules! impl_mask_passthrough {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Mask for $ty {
                fn mask(&mut self) {}
            }
        )*
    };
}

impl_mask_passthrough!(String, bool, char, ());
impl_mask_passthrough!(i8, i16, i32, i64, i128, isize);
impl_mask_passthrough!(u8, u16, u32, u64, u128, usize);
impl_mask_passthrough!(f32, f64);

impl Mask for Cow<'_, str> {
    fn mask(&mut self) {}
}

impl<T: ?Sized> Mask for PhantomData<T> {
    fn mask(&mut self) {}
}

// =============================================================================
// Walking implementations
// =============================================================================

impl<T: Mask> Mask for Option<T> {
    fn mask(&mut self) {
        if let Some(value) = self {
            value.mask();
        }
    }
}

impl<T: Mask + ?Sized> Mask for Box<T> {
    fn mask(&mut self) {
        (**self).mask();
    }
}

impl<T: Mask> Mask for Vec<T> {
    fn mask(&mut self) {
        self.iter_mut().for_each(Mask::mask);
    }
}

impl<T: Mask> Mask for VecDeque<T> {
    fn mask(&mut self) {
        self.iter_mut().for_each(Mask::mask);
    }
}

impl<T: Mask, const N: usize> Mask for [T; N] {
    fn mask(&mut self) {
        self.iter_mut().for_each(Mask::mask);
    }
}

impl<T: Mask> Mask for RefCell<T> {
    fn mask(&mut self) {
        self.get_mut().mask();
    }
}

impl<K, V: Mask, S> Mask for HashMap<K, V, S> {
    fn mask(&mut self) {
        self.values_mut().for_each(Mask::mask);
    }
}

impl<K, V: Mask> Mask for BTreeMap<K, V> {
    fn mask(&mut self) {
        self.values_mut().for_each(Mask::mask);
    }
}

// =============================================================================
// Leaf containers
// =============================================================================

impl<T: MaskLeaf> MaskLeaf for Option<T> {
    fn mask_leaf(&mut self, strategy: MaskStrategy) {
        if let Some(value) = self {
            value.mask_leaf(strategy);
        }
    }
}

impl<T: MaskLeaf + ?Sized> MaskLeaf for Box<T> {
    fn mask_leaf(&mut self, strategy: MaskStrategy) {
        (**self).mask_leaf(strategy);
    }
}

impl<T: MaskLeaf> MaskLeaf for Vec<T> {
    fn mask_leaf(&mut self, strategy: MaskStrategy) {
        for value in self {
            value.mask_leaf(strategy);
        }
    }
}

impl<T: MaskLeaf> MaskLeaf for VecDeque<T> {
    fn mask_leaf(&mut self, strategy: MaskStrategy) {
        for value in self {
            value.mask_leaf(strategy);
        }
    }
}

impl<T: MaskLeaf, const N: usize> MaskLeaf for [T; N] {
    fn mask_leaf(&mut self, strategy: MaskStrategy) {
        for value in self {
            value.mask_leaf(strategy);
        }
    }
}

impl<K, V: MaskLeaf, S> MaskLeaf for HashMap<K, V, S> {
    fn mask_leaf(&mut self, strategy: MaskStrategy) {
        for value in self.values_mut() {
            value.mask_leaf(strategy);
        }
    }
}

impl<K, V: MaskLeaf> MaskLeaf for BTreeMap<K, V> {
    fn mask_leaf(&mut self, strategy: MaskStrategy) {
        for value in self.values_mut() {
            value.mask_leaf(strategy);
        }
    }
}
