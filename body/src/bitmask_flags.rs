use num_traits::{One, PrimInt};

/// Implemented by flag enums that map each variant to one bit.
///
/// The enum's discriminant (via `#[repr(u8)]`) is the bit index; `Storage` picks the
/// backing integer.
pub trait FlagBitmask {
    type Storage: PrimInt;

    fn bit_index(&self) -> u8;

    fn mask(&self) -> Self::Storage {
        // NOTE: `bit_index()` must be < the bit width of `Storage`.
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// Packed set of flags.
///
/// Used for both the per-tick input intents and the body's contact/mode flags, so a whole
/// flag set is a single copyable integer.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitmaskFlags<T: PrimInt> {
    pub bits: T,
}

impl<T: PrimInt> BitmaskFlags<T> {
    pub fn new(bits: T) -> Self {
        Self { bits }
    }

    pub fn add<U: FlagBitmask<Storage = T>>(&mut self, flag: U) {
        self.bits = self.bits | flag.mask();
    }

    pub fn remove<U: FlagBitmask<Storage = T>>(&mut self, flag: U) {
        self.bits = self.bits & !flag.mask();
    }

    /// Add or remove `flag` depending on `on`.
    pub fn set<U: FlagBitmask<Storage = T>>(&mut self, flag: U, on: bool) {
        if on {
            self.add(flag);
        } else {
            self.remove(flag);
        }
    }

    /// Flip `flag`, returning its new state.
    pub fn toggle<U: FlagBitmask<Storage = T>>(&mut self, flag: U) -> bool {
        self.bits = self.bits ^ flag.mask();
        self.has(flag)
    }

    pub fn has<U: FlagBitmask<Storage = T>>(&self, flag: U) -> bool {
        (self.bits & flag.mask()) != T::zero()
    }

    pub fn has_all<U: FlagBitmask<Storage = T> + Copy>(&self, flags: &[U]) -> bool {
        let combined = flags.iter().fold(T::zero(), |acc, f| acc | f.mask());
        (self.bits & combined) == combined
    }

    pub fn is_empty(&self) -> bool {
        self.bits == T::zero()
    }
}

impl<T: PrimInt, U: FlagBitmask<Storage = T>> FromIterator<U> for BitmaskFlags<T> {
    fn from_iter<I: IntoIterator<Item = U>>(iter: I) -> Self {
        let mut flags = Self::new(T::zero());
        for flag in iter {
            flags.add(flag);
        }
        flags
    }
}

/// Declare a bitmask-backed enum and implement `FlagBitmask` for it.
///
/// Also generates an `ALL` slice listing every variant in declaration order.
///
/// Example:
/// ```rust
/// voxel_body::define_bitmask_flags!(Stance, u8, {
///     Crouching,
///     Swimming,
/// });
/// assert_eq!(Stance::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! define_bitmask_flags {
    ($name:ident, $storage:ty, { $($variant:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant),*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::bitmask_flags::FlagBitmask for $name {
            type Storage = $storage;

            fn bit_index(&self) -> u8 {
                *self as u8
            }
        }
    };
}
