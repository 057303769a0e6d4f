use {
    crate::TestSuite,
    std::{
        cmp::Ordering,
        collections::{BTreeMap, BTreeSet},
    },
    warp_types::Addr,
};

/// What a balance is denominated in: the native currency, or a token-like
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Denom {
    Native,
    Token(Addr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceChange {
    Increased(u128),
    Decreased(u128),
    Unchanged,
}

pub struct BalanceTracker<'a> {
    pub(crate) suite: &'a mut TestSuite,
}

impl BalanceTracker<'_> {
    /// Record the current balances of a list of accounts.
    pub fn record_many<I>(&mut self, accounts: I)
    where
        I: IntoIterator<Item = Addr>,
    {
        let new_balances = accounts
            .into_iter()
            .map(|addr| (addr, self.suite.query_all_balances(addr)))
            // collect is needed to avoid borrowing issues
            .collect::<BTreeMap<_, _>>();

        self.suite.balances.extend(new_balances);
    }

    /// Record the current balances of a single account.
    pub fn record(&mut self, account: Addr) {
        let balances = self.suite.query_all_balances(account);
        self.suite.balances.insert(account, balances);
    }

    /// Refresh all recorded balances.
    pub fn refresh_all(&mut self) {
        let addresses = self.suite.balances.keys().copied().collect::<Vec<_>>();
        self.record_many(addresses);
    }

    pub fn clear(&mut self) {
        self.suite.balances.clear();
    }

    /// Get the changes in balances of an account since they were last
    /// recorded.
    pub fn changes(&self, account: Addr) -> BTreeMap<Denom, BalanceChange> {
        let old_balances = self
            .suite
            .balances
            .get(&account)
            .unwrap_or_else(|| panic!("balances of {account} were never recorded"));
        let new_balances = self.suite.query_all_balances(account);

        old_balances
            .keys()
            .chain(new_balances.keys())
            .copied()
            // Take denoms only once
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|denom| {
                let old_balance = old_balances.get(&denom).copied().unwrap_or_default();
                let new_balance = new_balances.get(&denom).copied().unwrap_or_default();
                let change = match new_balance.cmp(&old_balance) {
                    Ordering::Greater => BalanceChange::Increased(new_balance - old_balance),
                    Ordering::Less => BalanceChange::Decreased(old_balance - new_balance),
                    Ordering::Equal => BalanceChange::Unchanged,
                };

                (denom, change)
            })
            .collect()
    }

    /// Assert a list of balance changes for an account. Denoms not listed are
    /// not checked.
    pub fn should_change(&self, account: Addr, changes: BTreeMap<Denom, BalanceChange>) {
        let delta = self.changes(account);

        for (denom, change) in changes {
            let diff = delta.get(&denom).copied().unwrap_or(BalanceChange::Unchanged);
            if change != diff {
                panic!(
                    "incorrect balance! account: {account}, denom: {denom:?}, expected: {change:?}, actual: {diff:?}"
                );
            }
        }
    }

    /// Assert that none of the balances of an account have changed.
    pub fn should_not_change(&self, account: Addr) {
        for (denom, diff) in self.changes(account) {
            if diff != BalanceChange::Unchanged {
                panic!("balance changed! account: {account}, denom: {denom:?}, actual: {diff:?}");
            }
        }
    }
}

impl TestSuite {
    /// Native balance plus the balance of every token-like contract in the
    /// suite. Zero balances are omitted.
    pub fn query_all_balances(&self, address: Addr) -> BTreeMap<Denom, u128> {
        let native = self.query_balance(address).unwrap();
        let tokens = [
            self.contracts.token,
            self.contracts.wrapped_native,
            self.contracts.wrapped_cat,
        ]
        .map(|token| (Denom::Token(token), self.token_balance(token, address)));

        [(Denom::Native, native)]
            .into_iter()
            .chain(tokens)
            .filter(|(_, amount)| *amount > 0)
            .collect()
    }
}
