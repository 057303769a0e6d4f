use {
    crate::{
        do_execute, do_instantiate, do_query_balance, do_query_wasm_smart, do_transfer,
        dyn_event, AppCtx, AppResult, Contract, Shared, TraceOption, TxOutcome, TxStorage,
        BALANCES,
    },
    serde::{de::DeserializeOwned, ser::Serialize},
    warp_types::{
        Addr, BlockInfo, Buffer, JsonDeExt, JsonSerExt, MockStorage, StdError,
    },
};

/// An in-memory chain that hosts contracts.
///
/// Every call to [`instantiate`](Self::instantiate), [`execute`](Self::execute)
/// or [`transfer`](Self::transfer) is a transaction: its state changes, and
/// those of every message it triggers, are written if and only if all of them
/// succeed.
pub struct App {
    db: Shared<MockStorage>,
    codes: Vec<Box<dyn Contract + Send + Sync>>,
    chain_id: u64,
    block: BlockInfo,
    trace_opt: TraceOption,
}

impl App {
    pub fn new(chain_id: u64, block: BlockInfo) -> Self {
        Self {
            db: Shared::new(MockStorage::new()),
            codes: Vec::new(),
            chain_id,
            block,
            trace_opt: TraceOption::LOUD,
        }
    }

    pub fn with_trace_option(mut self, trace_opt: TraceOption) -> Self {
        self.trace_opt = trace_opt;
        self
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn block(&self) -> BlockInfo {
        self.block
    }

    /// Move to the next block, `seconds` later.
    pub fn advance_block(&mut self, seconds: u64) {
        self.block.height += 1;
        self.block.timestamp += seconds;
    }

    /// Make a contract available for instantiation; return its code index.
    pub fn upload(&mut self, code: Box<dyn Contract + Send + Sync>) -> u32 {
        self.codes.push(code);
        (self.codes.len() - 1) as u32
    }

    /// Create native currency out of thin air. Intended for test setups.
    pub fn mint_native(&mut self, to: Addr, amount: u128) -> AppResult<()> {
        let mut db = self.db.clone();
        let balance = BALANCES.may_load(&db, to)?.unwrap_or_default();
        let balance = balance
            .checked_add(amount)
            .ok_or_else(|| StdError::overflow(balance, amount, "+"))?;

        BALANCES.save(&mut db, to, &balance)?;

        Ok(())
    }

    // ------------------------------ transactions -----------------------------

    pub fn instantiate<M>(
        &mut self,
        sender: Addr,
        code_id: u32,
        msg: &M,
        salt: &[u8],
        funds: u128,
    ) -> AppResult<Addr>
    where
        M: Serialize,
    {
        let msg = msg.to_json()?;

        self.run_tx("instantiate", sender, |ctx| {
            do_instantiate(ctx, 0, sender, code_id, &msg, salt, funds).map(|(address, _)| address)
        })
    }

    pub fn execute<M>(
        &mut self,
        sender: Addr,
        contract: Addr,
        msg: &M,
        funds: u128,
    ) -> AppResult<TxOutcome>
    where
        M: Serialize,
    {
        let msg = msg.to_json()?;

        self.run_tx("execute", sender, |ctx| {
            let events = do_execute(ctx, 0, sender, contract, &msg, funds)?;
            Ok(TxOutcome { events })
        })
    }

    pub fn transfer(&mut self, sender: Addr, to: Addr, amount: u128) -> AppResult<TxOutcome> {
        self.run_tx("transfer", sender, |ctx| {
            let events = do_transfer(ctx, 0, sender, to, amount)?;
            Ok(TxOutcome { events })
        })
    }

    fn run_tx<F, T>(&self, name: &'static str, sender: Addr, action: F) -> AppResult<T>
    where
        F: FnOnce(AppCtx<TxStorage>) -> AppResult<T>,
    {
        let span = tracing::info_span!("tx", kind = name, sender = sender.to_string());
        let _guard = span.enter();

        let buffer = Shared::new(Buffer::new(self.db.clone()));
        let ctx = AppCtx::new(&self.codes, buffer.clone(), self.chain_id, self.block);

        match action(ctx) {
            Ok(value) => {
                buffer.disassemble().consume();

                dyn_event!(self.trace_opt.ok_level, "Committed transaction");

                Ok(value)
            },
            Err(err) => {
                dyn_event!(
                    self.trace_opt.error_level,
                    err = err.to_string(),
                    "Transaction failed"
                );

                Err(err)
            },
        }
    }

    // -------------------------------- queries --------------------------------

    pub fn query_wasm_smart<M, R>(&self, contract: Addr, msg: &M) -> AppResult<R>
    where
        M: Serialize,
        R: DeserializeOwned,
    {
        let ctx = AppCtx::new(&self.codes, self.db.clone(), self.chain_id, self.block);
        let res = do_query_wasm_smart(ctx, contract, &msg.to_json()?, 0)?;

        Ok(res.deserialize_json()?)
    }

    pub fn query_balance(&self, address: Addr) -> AppResult<u128> {
        do_query_balance(&self.db, address)
    }
}

// ----------------------------------- tests -----------------------------------
