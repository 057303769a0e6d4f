use {
    serde::de::DeserializeOwned,
    thiserror::Error,
    warp_types::{Empty, ImmutableCtx, Json, JsonDeExt, MutableCtx, Response, StdError},
};

/// The result of calling a contract entry point. The error is the contract's
/// own error, rendered as a string.
pub type GenericResult<T> = core::result::Result<T, String>;

pub type InstantiateFn<M, E = StdError> = fn(MutableCtx, M) -> Result<Response, E>;

pub type ExecuteFn<M, E = StdError> = fn(MutableCtx, M) -> Result<Response, E>;

pub type ReceiveFn<E = StdError> = fn(MutableCtx) -> Result<Response, E>;

pub type QueryFn<M, E = StdError> = fn(ImmutableCtx, M) -> Result<Json, E>;

// ----------------------------------- error -----------------------------------

#[derive(Debug, Error)]
pub enum VmError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error("contract does not implement function `{name}`")]
    FunctionNotFound { name: &'static str },
}

impl VmError {
    pub const fn function_not_found(name: &'static str) -> Self {
        Self::FunctionNotFound { name }
    }
}

pub type VmResult<T> = core::result::Result<T, VmError>;

// ----------------------------------- trait -----------------------------------

/// A contract: a set of entry points, each taking a context and a JSON
/// message.
pub trait Contract {
    fn instantiate(&self, ctx: MutableCtx, msg: &Json) -> VmResult<GenericResult<Response>>;

    fn execute(&self, ctx: MutableCtx, msg: &Json) -> VmResult<GenericResult<Response>>;

    fn receive(&self, ctx: MutableCtx) -> VmResult<GenericResult<Response>>;

    fn query(&self, ctx: ImmutableCtx, msg: &Json) -> VmResult<GenericResult<Json>>;
}

// ---------------------------------- builder ----------------------------------

pub struct ContractBuilder<M1, E1, M2 = Empty, M4 = Empty, E2 = StdError, E3 = StdError, E4 = StdError>
{
    instantiate_fn: InstantiateFn<M1, E1>,
    execute_fn: Option<ExecuteFn<M2, E2>>,
    receive_fn: Option<ReceiveFn<E3>>,
    query_fn: Option<QueryFn<M4, E4>>,
}

impl<M1, E1> ContractBuilder<M1, E1>
where
    M1: DeserializeOwned + 'static,
    E1: ToString + 'static,
{
    pub fn new(instantiate_fn: InstantiateFn<M1, E1>) -> Self {
        Self {
            instantiate_fn,
            execute_fn: None,
            receive_fn: None,
            query_fn: None,
        }
    }
}

impl<M1, E1, M2, M4, E2, E3, E4> ContractBuilder<M1, E1, M2, M4, E2, E3, E4>
where
    M1: DeserializeOwned + 'static,
    M2: DeserializeOwned + 'static,
    M4: DeserializeOwned + 'static,
    E1: ToString + 'static,
    E2: ToString + 'static,
    E3: ToString + 'static,
    E4: ToString + 'static,
{
    pub fn with_execute<M2A, E2A>(
        self,
        execute_fn: ExecuteFn<M2A, E2A>,
    ) -> ContractBuilder<M1, E1, M2A, M4, E2A, E3, E4>
    where
        M2A: DeserializeOwned + 'static,
        E2A: ToString + 'static,
    {
        ContractBuilder {
            instantiate_fn: self.instantiate_fn,
            execute_fn: Some(execute_fn),
            receive_fn: self.receive_fn,
            query_fn: self.query_fn,
        }
    }

    pub fn with_receive<E3A>(
        self,
        receive_fn: ReceiveFn<E3A>,
    ) -> ContractBuilder<M1, E1, M2, M4, E2, E3A, E4>
    where
        E3A: ToString + 'static,
    {
        ContractBuilder {
            instantiate_fn: self.instantiate_fn,
            execute_fn: self.execute_fn,
            receive_fn: Some(receive_fn),
            query_fn: self.query_fn,
        }
    }

    pub fn with_query<M4A, E4A>(
        self,
        query_fn: QueryFn<M4A, E4A>,
    ) -> ContractBuilder<M1, E1, M2, M4A, E2, E3, E4A>
    where
        M4A: DeserializeOwned + 'static,
        E4A: ToString + 'static,
    {
        ContractBuilder {
            instantiate_fn: self.instantiate_fn,
            execute_fn: self.execute_fn,
            receive_fn: self.receive_fn,
            query_fn: Some(query_fn),
        }
    }

    pub fn build(self) -> Box<dyn Contract + Send + Sync> {
        Box::new(ContractImpl {
            instantiate_fn: self.instantiate_fn,
            execute_fn: self.execute_fn,
            receive_fn: self.receive_fn,
            query_fn: self.query_fn,
        })
    }
}

// ----------------------------------- impl ------------------------------------

struct ContractImpl<M1, M2, M4, E1, E2, E3, E4> {
    instantiate_fn: InstantiateFn<M1, E1>,
    execute_fn: Option<ExecuteFn<M2, E2>>,
    receive_fn: Option<ReceiveFn<E3>>,
    query_fn: Option<QueryFn<M4, E4>>,
}

impl<M1, M2, M4, E1, E2, E3, E4> Contract for ContractImpl<M1, M2, M4, E1, E2, E3, E4>
where
    M1: DeserializeOwned,
    M2: DeserializeOwned,
    M4: DeserializeOwned,
    E1: ToString,
    E2: ToString,
    E3: ToString,
    E4: ToString,
{
    fn instantiate(&self, ctx: MutableCtx, msg: &Json) -> VmResult<GenericResult<Response>> {
        let msg = msg.deserialize_json()?;
        let res = (self.instantiate_fn)(ctx, msg);

        Ok(res.map_err(|err| err.to_string()))
    }

    fn execute(&self, ctx: MutableCtx, msg: &Json) -> VmResult<GenericResult<Response>> {
        let Some(execute_fn) = &self.execute_fn else {
            return Err(VmError::function_not_found("execute"));
        };

        let msg = msg.deserialize_json()?;
        let res = execute_fn(ctx, msg);

        Ok(res.map_err(|err| err.to_string()))
    }

    fn receive(&self, ctx: MutableCtx) -> VmResult<GenericResult<Response>> {
        let Some(receive_fn) = &self.receive_fn else {
            return Err(VmError::function_not_found("receive"));
        };

        let res = receive_fn(ctx);

        Ok(res.map_err(|err| err.to_string()))
    }

    fn query(&self, ctx: ImmutableCtx, msg: &Json) -> VmResult<GenericResult<Json>> {
        let Some(query_fn) = &self.query_fn else {
            return Err(VmError::function_not_found("query"));
        };

        let msg = msg.deserialize_json()?;
        let res = query_fn(ctx, msg);

        Ok(res.map_err(|err| err.to_string()))
    }
}
