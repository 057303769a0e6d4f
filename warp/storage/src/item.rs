use {
    crate::{Borsh, Codec, Path},
    std::ops::Deref,
};

/// A single value stored under a fixed key.
pub struct Item<'a, T, C = Borsh>
where
    C: Codec<T>,
{
    path: Path<'a, T, C>,
}

impl<'a, T, C> Item<'a, T, C>
where
    C: Codec<T>,
{
    pub const fn new(storage_key: &'a str) -> Self {
        Self {
            path: Path::from_raw(storage_key.as_bytes()),
        }
    }
}

// `Item` is effectively a wrapper over a `Path`, so instead of implementing
// methods (`load`, `save`, ...) manually, we implement `Deref<Target = Path>`.
impl<'a, T, C> Deref for Item<'a, T, C>
where
    C: Codec<T>,
{
    type Target = Path<'a, T, C>;

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        borsh::{BorshDeserialize, BorshSerialize},
        warp_types::{Addr, MockStorage, StdError, StdResult},
    };

    #[derive(BorshSerialize, BorshDeserialize, PartialEq, Debug)]
    struct Config {
        owner: Addr,
        toll: u128,
    }

    const CONFIG: Item<Config> = Item::new("config");

    #[test]
    fn save_and_load_works() {
        let mut storage = MockStorage::new();

        assert!(CONFIG.load(&storage).is_err());
        assert_eq!(CONFIG.may_load(&storage).unwrap(), None);
        assert!(!CONFIG.exists(&storage));

        let cfg = Config {
            owner: Addr::mock(1),
            toll: 1_000,
        };
        CONFIG.save(&mut storage, &cfg).unwrap();

        assert!(CONFIG.exists(&storage));
        assert_eq!(CONFIG.load(&storage).unwrap(), cfg);

        CONFIG.remove(&mut storage);
        assert_eq!(CONFIG.may_load(&storage).unwrap(), None);
    }

    #[test]
    fn update_does_not_change_data_on_error() {
        let mut storage = MockStorage::new();

        let cfg = Config {
            owner: Addr::mock(1),
            toll: 1_000,
        };
        CONFIG.save(&mut storage, &cfg).unwrap();

        let res = CONFIG.update(&mut storage, |mut c| -> StdResult<_> {
            c.toll = c
                .toll
                .checked_sub(2_000)
                .ok_or_else(|| StdError::overflow(c.toll, 2_000, "-"))?;
            Ok(c)
        });

        assert!(matches!(res, Err(StdError::Overflow { .. })));
        assert_eq!(CONFIG.load(&storage).unwrap(), cfg);
    }
}
