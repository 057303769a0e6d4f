use {
    crate::{Addr, Json, Querier, StdError, StdResult},
    std::collections::BTreeMap,
};

type SmartQueryHandler = Box<dyn Fn(Addr, &Json) -> StdResult<Json>>;

/// A [`Querier`] for unit tests. Contract queries are answered by a handler
/// function; native balances by a fixed table.
#[derive(Default)]
pub struct MockQuerier {
    balances: BTreeMap<Addr, u128>,
    smart_query_handler: Option<SmartQueryHandler>,
}

impl MockQuerier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, address: Addr, amount: u128) -> Self {
        self.balances.insert(address, amount);
        self
    }

    pub fn with_smart_query_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(Addr, &Json) -> StdResult<Json> + 'static,
    {
        self.smart_query_handler = Some(Box::new(handler));
        self
    }
}

impl Querier for MockQuerier {
    fn query_contract(&self, contract: Addr, msg: Json) -> StdResult<Json> {
        let Some(handler) = &self.smart_query_handler else {
            return Err(StdError::query(contract, "no smart query handler set"));
        };

        handler(contract, &msg)
    }

    fn query_balance(&self, address: Addr) -> StdResult<u128> {
        Ok(self.balances.get(&address).copied().unwrap_or_default())
    }
}
