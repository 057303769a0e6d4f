use {
    crate::{Addr, Json, JsonSerExt, StdResult},
    serde::{Deserialize, Serialize},
};

/// A message that carries no data.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty {}

/// A type that can be emitted as a contract event.
pub trait EventName {
    const EVENT_NAME: &'static str;
}

/// An event emitted by a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub ty: String,
    pub data: Json,
}

impl Event {
    pub fn new<E>(event: E) -> StdResult<Self>
    where
        E: EventName + Serialize,
    {
        Ok(Self {
            ty: E::EVENT_NAME.to_string(),
            data: event.to_json()?,
        })
    }
}

/// A follow-up action requested by a contract. Messages are executed
/// depth-first, after the state changes of the emitting call are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Call another contract, optionally attaching native currency.
    Execute {
        contract: Addr,
        msg: Json,
        funds: u128,
    },
    /// Send native currency. If the recipient is a contract, its `receive`
    /// entry point is invoked and may reject the transfer.
    Transfer { to: Addr, amount: u128 },
}

impl Message {
    pub fn execute<M>(contract: Addr, msg: &M, funds: u128) -> StdResult<Self>
    where
        M: Serialize,
    {
        Ok(Self::Execute {
            contract,
            msg: msg.to_json()?,
            funds,
        })
    }

    pub fn transfer(to: Addr, amount: u128) -> Self {
        Self::Transfer { to, amount }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub messages: Vec<Message>,
    pub events: Vec<Event>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message(mut self, msg: Message) -> Self {
        self.messages.push(msg);
        self
    }

    pub fn may_add_message(mut self, maybe_msg: Option<Message>) -> Self {
        if let Some(msg) = maybe_msg {
            self.messages.push(msg);
        }
        self
    }

    pub fn add_messages<M>(mut self, msgs: M) -> Self
    where
        M: IntoIterator<Item = Message>,
    {
        self.messages.extend(msgs);
        self
    }

    pub fn add_event<E>(mut self, event: E) -> StdResult<Self>
    where
        E: EventName + Serialize,
    {
        self.events.push(Event::new(event)?);
        Ok(self)
    }
}

/// Implement [`EventName`] for one or more event types.
///
/// ```ignore
/// event_name!(MessageSent => "message_sent", MessageReceived => "message_received");
/// ```
#[macro_export]
macro_rules! event_name {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl $crate::EventName for $ty {
                const EVENT_NAME: &'static str = $name;
            }
        )+
    };
}
