use {
    crate::{Borsh, Codec, Item},
    warp_types::{StdError, StdResult, Storage},
};

/// Numbers that a [`Counter`] can hold.
pub trait CounterValue: Copy {
    fn checked_increment(self, step: Self) -> StdResult<Self>;
}

macro_rules! impl_counter_value {
    ($($t:ty),+) => {
        $(impl CounterValue for $t {
            fn checked_increment(self, step: Self) -> StdResult<Self> {
                self.checked_add(step)
                    .ok_or_else(|| StdError::overflow(self.into(), step.into(), "+"))
            }
        })*
    }
}

impl_counter_value!(u32, u64, u128);

/// A single number that is monotonically incremented by the given step size.
///
/// Internally, this is an abstraction over an [`Item`].
pub struct Counter<'a, T, C = Borsh>
where
    C: Codec<T>,
{
    item: Item<'a, T, C>,
    base: T,
    step: T,
}

impl<'a, T, C> Counter<'a, T, C>
where
    T: CounterValue,
    C: Codec<T>,
{
    pub const fn new(storage_key: &'a str, base: T, step: T) -> Self {
        Self {
            item: Item::new(storage_key),
            base,
            step,
        }
    }

    /// Load the current counter value.
    pub fn current(&self, storage: &dyn Storage) -> StdResult<T> {
        self.item
            .may_load(storage)
            .map(|maybe_value| maybe_value.unwrap_or(self.base))
    }

    /// Increment the value by the step size; return the values before and after
    /// incrementing.
    pub fn increment(&self, storage: &mut dyn Storage) -> StdResult<(T, T)> {
        let old_value = self.current(storage)?;
        let new_value = old_value.checked_increment(self.step)?;

        self.item.save(storage, &new_value)?;

        Ok((old_value, new_value))
    }
}

// ----------------------------------- tests -----------------------------------
